use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use pages::home::Home;
use pages::municipality::MunicipalityPage;
use pages::not_found::NotFound;
use pages::prefecture::PrefecturePage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/prefectures/:code")]
    Prefecture { code: String },
    #[at("/municipalities/:city_code")]
    Municipality { city_code: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home => {
            log::trace!("Rendering home page");
            html! { <Home /> }
        }
        Route::Prefecture { code } => {
            log::trace!("Rendering prefecture page for {}", code);
            html! { <PrefecturePage code={code} /> }
        }
        Route::Municipality { city_code } => {
            log::trace!("Rendering municipality page for {}", city_code);
            html! { <MunicipalityPage city_code={city_code} /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFound /> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Carbon Pace dashboard starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

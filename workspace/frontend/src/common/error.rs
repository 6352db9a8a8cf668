use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="flex flex-col items-center justify-center py-12 gap-4">
            <div class="alert alert-error max-w-lg">
                <i class="fas fa-exclamation-circle text-2xl"></i>
                <div class="flex flex-col gap-2">
                    <span class="font-semibold">{"データを取得できませんでした"}</span>
                    <span class="text-sm">{&props.message}</span>
                </div>
            </div>
            {if let Some(on_retry) = &props.on_retry {
                let on_retry = on_retry.clone();
                html! {
                    <button
                        class="btn btn-primary btn-sm"
                        onclick={Callback::from(move |_| {
                            log::debug!("User clicked retry button");
                            on_retry.emit(());
                        })}
                    >
                        <i class="fas fa-redo"></i>
                        {" 再読み込み"}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotFoundDisplayProps {
    #[prop_or_default]
    pub subject: Option<String>,
}

#[function_component(NotFoundDisplay)]
pub fn not_found_display(props: &NotFoundDisplayProps) -> Html {
    let subject = props.subject.clone().unwrap_or_else(|| "ページ".to_string());
    log::info!("Rendering not-found view for {}", subject);

    html! {
        <div class="flex flex-col items-center justify-center py-16 gap-4 text-center">
            <p class="text-6xl font-bold text-gray-300">{"404"}</p>
            <p class="text-lg">{format!("{}が見つかりませんでした", subject)}</p>
            <Link<Route> to={Route::Home} classes="btn btn-outline btn-sm">
                {"トップへ戻る"}
            </Link<Route>>
        </div>
    }
}

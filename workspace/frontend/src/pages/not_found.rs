use yew::prelude::*;

use crate::common::error::NotFoundDisplay;
use crate::components::layout::layout::Layout;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <Layout title="404">
            <NotFoundDisplay />
        </Layout>
    }
}

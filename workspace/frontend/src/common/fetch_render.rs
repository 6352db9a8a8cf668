use yew::prelude::*;

use super::error::{ErrorDisplay, NotFoundDisplay};
use super::loading::Loading;
use crate::hooks::FetchState;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<String>,
    /// What was looked up, shown when the backend answers 404
    #[prop_or_default]
    pub not_found_subject: Option<String>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.not_found_subject == other.not_found_subject
    }
}

/// Renders a page body from its fetch state.
/// - Loading: spinner
/// - NotFound: not-found view
/// - Error: error view with a retry button
/// - Success: the `render` callback
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading text={props.loading_text.clone()} /> },
        FetchState::NotFound => html! {
            <NotFoundDisplay subject={props.not_found_subject.clone()} />
        },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={props.on_retry.clone()} />
        },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}

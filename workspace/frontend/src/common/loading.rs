use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Spinner above a card-shaped skeleton of the page body.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let text = props.text.clone().unwrap_or_else(|| "読み込み中...".to_string());

    html! {
        <div class="flex flex-col gap-6" aria-busy="true">
            <div class="flex items-center justify-center gap-3 py-6 text-gray-500">
                <span class="loading loading-spinner loading-md"></span>
                <span class="text-sm">{text}</span>
            </div>
            <div class="skeleton h-40 w-full"></div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                { for (0..4).map(|_| html! { <div class="skeleton h-24"></div> }) }
            </div>
        </div>
    }
}

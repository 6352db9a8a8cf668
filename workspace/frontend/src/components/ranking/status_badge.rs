use common::PaceStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub status: PaceStatus,
    #[prop_or_default]
    pub large: bool,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &Props) -> Html {
    let size = if props.large { "badge-lg" } else { "badge-sm" };

    html! {
        <span
            class={classes!("badge", "border-0", "text-white", "whitespace-nowrap", size)}
            style={format!("background-color: {};", props.status.color())}
            data-status={props.status.as_str()}
        >
            { props.status.label() }
        </span>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub desc: Option<AttrValue>,
    /// Extra class for the value, e.g. `text-error`
    #[prop_or_default]
    pub value_class: Option<AttrValue>,
}

#[function_component(KpiCard)]
pub fn kpi_card(props: &Props) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{&props.title}</div>
                <div class={classes!("stat-value", "text-2xl", props.value_class.as_ref().map(|c| c.to_string()))}>{&props.value}</div>
                if let Some(desc) = &props.desc {
                    <div class="stat-desc">{desc}</div>
                }
            </div>
        </div>
    }
}

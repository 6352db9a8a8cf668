use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub route: Route,
}

impl Crumb {
    pub fn new(label: impl Into<String>, route: Route) -> Self {
        Self {
            label: label.into(),
            route,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub items: Vec<Crumb>,
}

#[function_component(Breadcrumb)]
pub fn breadcrumb(props: &Props) -> Html {
    let last = props.items.len().saturating_sub(1);

    html! {
        <div class="breadcrumbs text-sm px-6 py-2 bg-base-100">
            <ul>
                {for props.items.iter().enumerate().map(|(idx, item)| {
                    html! {
                        <li>
                            if idx == last {
                                <span class="text-primary font-semibold">{&item.label}</span>
                            } else {
                                <Link<Route> to={item.route.clone()} classes="hover:text-primary">
                                    {&item.label}
                                </Link<Route>>
                            }
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

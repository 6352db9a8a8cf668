use yew::prelude::*;

use super::breadcrumb::{Breadcrumb, Crumb};
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    #[prop_or_default]
    pub crumbs: Vec<Crumb>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} />
            if !props.crumbs.is_empty() {
                <Breadcrumb items={props.crumbs.clone()} />
            }
            <main class="flex-1 p-6 max-w-6xl w-full mx-auto flex flex-col gap-6">
                { for props.children.iter() }
            </main>
            <footer class="footer footer-center p-4 text-xs text-gray-500">
                <p>{"出典: 環境省 自治体排出量カルテ。基準年度 2013年度、2030年度 46%削減・2050年度 80%削減を目標とする。"}</p>
            </footer>
        </div>
    }
}

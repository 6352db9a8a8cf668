use common::format::{change_marker, fixed, pace};
use common::PaceStatus;
use yew::prelude::*;

use super::pace_bar::PaceBar;
use crate::components::ranking::StatusBadge;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub name: String,
    pub latest_year: i32,
    pub reduction_rate: f64,
    pub actual_pace: f64,
    pub required_pace: f64,
    pub pace_achievement_rate: f64,
    pub status: PaceStatus,
}

/// Headline comparison of actual and required reduction pace.
#[function_component(PaceHero)]
pub fn pace_hero(props: &Props) -> Html {
    let gap = props.actual_pace - props.required_pace;

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-4">
                <div class="flex items-center justify-between flex-wrap gap-2">
                    <h2 class="card-title text-2xl">{&props.name}</h2>
                    <StatusBadge status={props.status} large={true} />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <div>
                        <p class="text-sm text-gray-500">{"実績ペース"}</p>
                        <p class="text-4xl font-bold">{pace(props.actual_pace)}</p>
                        <p class="text-xs text-gray-500">
                            {format!("2013年度→{}年度 {}", props.latest_year, change_marker(props.reduction_rate))}
                        </p>
                    </div>
                    <div>
                        <p class="text-sm text-gray-500">{"必要ペース"}</p>
                        <p class="text-4xl font-bold text-gray-600">{pace(props.required_pace)}</p>
                        <p class="text-xs text-gray-500">{"2030年度 46%削減に必要な年平均削減率"}</p>
                    </div>
                    <div>
                        <p class="text-sm text-gray-500">{"差"}</p>
                        <p class="text-4xl font-bold" style={format!("color: {};", props.status.color())}>
                            {format!("{}{}pt", if gap > 0.0 { "+" } else { "" }, fixed(gap, 1))}
                        </p>
                    </div>
                </div>
                <PaceBar achievement_rate={props.pace_achievement_rate} status={props.status} />
            </div>
        </div>
    }
}

use common::format::{deviation_band, deviation_gauge_position, fixed};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub score: Option<f64>,
}

/// Gauge of the peer deviation score on a 30..70 scale.
#[function_component(DeviationMeter)]
pub fn deviation_meter(props: &Props) -> Html {
    let Some(score) = props.score else {
        return html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-lg">{"同規模自治体との比較"}</h3>
                    <p class="text-sm text-gray-500">{"比較できる自治体がありません。"}</p>
                </div>
            </div>
        };
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body gap-3">
                <h3 class="card-title text-lg">{"同規模自治体との比較"}</h3>
                <div class="flex items-baseline gap-3">
                    <span class="text-4xl font-bold">{fixed(score, 1)}</span>
                    <span class="badge badge-outline">{deviation_band(score)}</span>
                </div>
                <div class="relative h-3 rounded bg-gradient-to-r from-red-200 via-base-300 to-green-200">
                    <div
                        class="absolute -top-1 h-5 w-1 rounded bg-neutral"
                        style={format!("left: calc({:.1}% - 2px);", deviation_gauge_position(score))}
                    ></div>
                </div>
                <div class="flex justify-between text-xs text-gray-500">
                    <span>{"30"}</span><span>{"50"}</span><span>{"70"}</span>
                </div>
                <p class="text-xs text-gray-500">
                    {"同じ都道府県・同じ人口規模の自治体の中での、基準年比削減率の偏差値。"}
                </p>
            </div>
        </div>
    }
}

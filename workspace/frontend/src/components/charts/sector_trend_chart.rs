use common::{SectorBucket, SectorTrendPoint};
use plotly::common::Marker;
use plotly::layout::BarMode;
use plotly::{Bar, Layout};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::common::plot::{draw, Traces};

const HEIGHT: usize = 380;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub div_id: String,
    pub points: Vec<SectorTrendPoint>,
}

/// Stacked yearly emissions by display bucket (thousand t-CO₂).
#[function_component(SectorTrendChart)]
pub fn sector_trend_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.points.clone(), props.div_id.clone()),
        move |(container_ref, points, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let years: Vec<i32> = points.iter().map(|p| p.year).collect();
                let mut traces = Traces::new();
                for bucket in SectorBucket::ALL {
                    let values: Vec<f64> = points.iter().map(|p| p.bucket(bucket)).collect();
                    if values.iter().all(|v| *v == 0.0) {
                        continue;
                    }
                    traces.push(
                        Bar::new(years.clone(), values)
                            .name(bucket.label())
                            .marker(Marker::new().color(bucket.color())),
                    );
                }

                let layout = Layout::new().bar_mode(BarMode::Stack).height(HEIGHT);
                draw(div_id, &traces, &layout);
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"部門別排出量の推移"}</h3>
                <p class="text-sm text-gray-500">{"単位: 千t-CO₂"}</p>
                if props.points.is_empty() {
                    <p class="text-center py-8 text-gray-500">{"排出量データがありません。"}</p>
                } else {
                    <div ref={container_ref} style={format!("width:100%; height:{}px;", HEIGHT)}></div>
                }
            </div>
        </div>
    }
}

use common::format::fixed;
use common::SectorReduction;
use plotly::common::{Marker, Orientation};
use plotly::layout::BarMode;
use plotly::{Bar, Layout};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::common::plot::{draw, Traces};

const REDUCED: &str = "#2d6b45";
const INCREASED: &str = "#8b2a2a";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub div_id: String,
    pub reductions: Vec<SectorReduction>,
}

fn bar(rows: &[&SectorReduction], name: &str, color: &'static str) -> Box<Bar<f64, String>> {
    // Plotly draws the first category at the bottom.
    let rates: Vec<f64> = rows.iter().rev().map(|r| r.rate).collect();
    let sectors: Vec<String> = rows.iter().rev().map(|r| r.sector.name().to_string()).collect();
    Bar::new(rates, sectors)
        .name(name)
        .orientation(Orientation::Horizontal)
        .marker(Marker::new().color(color))
}

/// Change of each sector since the base year. Reductions green, increases red.
#[function_component(SectorReductionChart)]
pub fn sector_reduction_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let height = 80 + 32 * props.reductions.len();

    use_effect_with(
        (container_ref.clone(), props.reductions.clone(), props.div_id.clone()),
        move |(container_ref, reductions, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let (reduced, increased): (Vec<&SectorReduction>, Vec<&SectorReduction>) =
                    reductions.iter().partition(|r| r.rate <= 0.0);

                let mut traces = Traces::new();
                if !reduced.is_empty() {
                    traces.push(bar(&reduced, "削減", REDUCED));
                }
                if !increased.is_empty() {
                    traces.push(bar(&increased, "増加", INCREASED));
                }

                let layout = Layout::new()
                    .bar_mode(BarMode::Overlay)
                    .height(80 + 32 * reductions.len())
                    .show_legend(false);
                draw(div_id, &traces, &layout);
            }
            || ()
        },
    );

    let best = props
        .reductions
        .iter()
        .min_by(|a, b| a.rate.total_cmp(&b.rate));

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"部門別 基準年比"}</h3>
                if let Some(best) = best {
                    <p class="text-sm text-gray-500">
                        {format!("最も削減が進んだ部門: {} ({}%)", best.sector, fixed(best.rate, 1))}
                    </p>
                }
                if props.reductions.is_empty() {
                    <p class="text-center py-8 text-gray-500">{"比較できる部門がありません。"}</p>
                } else {
                    <div ref={container_ref} style={format!("width:100%; height:{}px;", height)}></div>
                }
            </div>
        </div>
    }
}

use common::TrajectoryPoint;
use plotly::common::{DashType, Line, Marker, Mode};
use plotly::{Layout, Scatter};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::common::plot::{draw, Traces};

const HEIGHT: usize = 380;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub div_id: String,
    pub points: Vec<TrajectoryPoint>,
    /// Unit shown under the chart
    pub unit: String,
}

fn series(points: &[TrajectoryPoint], pick: impl Fn(&TrajectoryPoint) -> Option<f64>) -> Vec<Option<f64>> {
    points.iter().map(pick).collect()
}

/// Actual emissions against the required decay curve and the 2030/2050 targets.
#[function_component(TrajectoryChart)]
pub fn trajectory_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.points.clone(), props.div_id.clone()),
        move |(container_ref, points, div_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(div_id);

                let years: Vec<i32> = points.iter().map(|p| p.year).collect();
                let mut traces = Traces::new();

                traces.push(
                    Scatter::new(years.clone(), series(points, |p| p.required))
                        .mode(Mode::Lines)
                        .name("必要ペース")
                        .connect_gaps(true)
                        .line(Line::new().color("#8a8a8a").width(2.0).dash(DashType::Dash)),
                );
                traces.push(
                    Scatter::new(years.clone(), series(points, |p| p.actual))
                        .mode(Mode::LinesMarkers)
                        .name("実績")
                        .connect_gaps(true)
                        .line(Line::new().color("#1a2744").width(3.0)),
                );
                traces.push(
                    Scatter::new(years.clone(), series(points, |p| p.target_2030))
                        .mode(Mode::Markers)
                        .name("2030年目標")
                        .marker(Marker::new().color("#b87020").size(12)),
                );
                traces.push(
                    Scatter::new(years, series(points, |p| p.target_2050))
                        .mode(Mode::Markers)
                        .name("2050年目標")
                        .marker(Marker::new().color("#2d6b45").size(12)),
                );

                let layout = Layout::new().height(HEIGHT).show_legend(true);
                draw(div_id, &traces, &layout);
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title text-lg">{"削減トラジェクトリ"}</h3>
                <p class="text-sm text-gray-500">{format!("単位: {}", props.unit)}</p>
                <div ref={container_ref} style={format!("width:100%; height:{}px;", HEIGHT)}></div>
            </div>
        </div>
    }
}

use common::format::fixed;
use common::PaceStatus;
use yew::prelude::*;

/// Achievement rate at the right edge of the bar.
const SCALE_MAX: f64 = 150.0;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub achievement_rate: f64,
    pub status: PaceStatus,
}

/// Horizontal bar of the pace achievement rate with a marker at 100 %.
#[function_component(PaceBar)]
pub fn pace_bar(props: &Props) -> Html {
    let width = props.achievement_rate.clamp(0.0, SCALE_MAX) / SCALE_MAX * 100.0;
    let target = 100.0 / SCALE_MAX * 100.0;

    html! {
        <div class="flex flex-col gap-1">
            <div class="relative h-4 rounded bg-base-300 overflow-hidden">
                <div
                    class="h-full rounded"
                    style={format!("width: {:.1}%; background-color: {};", width, props.status.color())}
                ></div>
                <div
                    class="absolute top-0 h-full border-l-2 border-dashed border-gray-700"
                    style={format!("left: {:.1}%;", target)}
                    title="必要ペース"
                ></div>
            </div>
            <div class="flex justify-between text-xs text-gray-500">
                <span>{"0%"}</span>
                <span>{format!("達成率 {}%", fixed(props.achievement_rate, 1))}</span>
                <span>{format!("{}%", SCALE_MAX)}</span>
            </div>
        </div>
    }
}

use common::format::{change_marker, fixed, pace, thousands};
use common::MunicipalityRankingRow;
use yew::prelude::*;
use yew_router::prelude::*;

use super::status_badge::StatusBadge;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub row: MunicipalityRankingRow,
}

/// One table row of a prefecture's municipality ranking.
#[function_component(RankingRow)]
pub fn ranking_row(props: &Props) -> Html {
    let row = &props.row;

    html! {
        <tr class="hover">
            <td class="font-mono text-right">{row.rank}</td>
            <td>
                <Link<Route> to={Route::Municipality { city_code: row.city_code.clone() }} classes="link link-hover font-semibold">
                    {&row.name}
                </Link<Route>>
                if row.zero_carbon_declared {
                    <span class="badge badge-outline badge-xs ml-2" title="ゼロカーボンシティ宣言">{"宣言"}</span>
                }
            </td>
            <td class="text-right">{row.population.map(thousands).unwrap_or_else(|| "-".to_string())}</td>
            <td class="text-right">{change_marker(row.reduction_rate)}</td>
            <td class="text-right">{pace(row.actual_pace)}</td>
            <td class="text-right font-semibold">{format!("{}%", fixed(row.pace_achievement_rate, 1))}</td>
            <td><StatusBadge status={row.status} /></td>
        </tr>
    }
}

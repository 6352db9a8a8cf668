use common::format::{fixed, pace};
use common::{MunicipalityRankingRow, PrefectureKpi};
use yew::prelude::*;
use yew_router::prelude::*;

use super::ranking_row::RankingRow;
use super::status_badge::StatusBadge;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MunicipalityRankingProps {
    pub rows: Vec<MunicipalityRankingRow>,
}

/// Municipalities of a prefecture, best pace achievement first.
#[function_component(MunicipalityRanking)]
pub fn municipality_ranking(props: &MunicipalityRankingProps) -> Html {
    if props.rows.is_empty() {
        return html! {
            <div class="alert alert-info">
                <i class="fas fa-info-circle"></i>
                <span>{"公表済みの市区町村データはまだありません。"}</span>
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra table-sm">
                <thead>
                    <tr>
                        <th class="text-right">{"順位"}</th>
                        <th>{"市区町村"}</th>
                        <th class="text-right">{"人口"}</th>
                        <th class="text-right">{"基準年比"}</th>
                        <th class="text-right">{"実績ペース"}</th>
                        <th class="text-right">{"達成率"}</th>
                        <th>{"判定"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.rows.iter().map(|row| html! {
                        <RankingRow key={row.city_code.clone()} row={row.clone()} />
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrefectureRankingProps {
    pub prefectures: Vec<PrefectureKpi>,
}

/// Ranked prefecture list shown on the home page.
#[function_component(PrefectureRanking)]
pub fn prefecture_ranking(props: &PrefectureRankingProps) -> Html {
    html! {
        <ul class="flex flex-col divide-y divide-base-200">
            { for props.prefectures.iter().enumerate().map(|(idx, prefecture)| html! {
                <li key={prefecture.code.clone()} class="flex items-center gap-4 py-2">
                    <span class="w-8 text-right font-mono text-gray-500">{idx + 1}</span>
                    <Link<Route> to={Route::Prefecture { code: prefecture.code.clone() }} classes="flex-1 link link-hover font-semibold">
                        {&prefecture.name}
                    </Link<Route>>
                    <span class="text-sm text-gray-500">{pace(prefecture.actual_pace)}</span>
                    <span class="w-16 text-right">{format!("{}%", fixed(prefecture.pace_achievement_rate, 1))}</span>
                    <StatusBadge status={prefecture.status} />
                </li>
            }) }
        </ul>
    }
}

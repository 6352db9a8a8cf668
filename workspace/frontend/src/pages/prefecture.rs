use common::PrefectureOverview;
use yew::prelude::*;

use crate::api_client::dashboard::fetch_prefecture;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::components::kpi::PrefectureKpiStrip;
use crate::components::layout::breadcrumb::Crumb;
use crate::components::layout::layout::Layout;
use crate::components::pace::{PaceHero, TrajectoryChart};
use crate::components::ranking::MunicipalityRanking;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub code: String,
}

#[function_component(PrefecturePage)]
pub fn prefecture_page(props: &Props) -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(props.code.clone(), fetch_prefecture);

    let title = fetch_state
        .data()
        .map(|overview| overview.prefecture.name.clone())
        .unwrap_or_else(|| format!("都道府県 {}", props.code));
    let crumbs = vec![
        Crumb::new("トップ", Route::Home),
        Crumb::new(title.clone(), Route::Prefecture { code: props.code.clone() }),
    ];

    let render = Callback::from(|overview: PrefectureOverview| {
        let prefecture = overview.prefecture;
        html! {
            <>
                <PaceHero
                    name={prefecture.name.clone()}
                    latest_year={prefecture.latest_year}
                    reduction_rate={prefecture.reduction_rate}
                    actual_pace={prefecture.actual_pace}
                    required_pace={prefecture.required_pace}
                    pace_achievement_rate={prefecture.pace_achievement_rate}
                    status={prefecture.status}
                />
                <PrefectureKpiStrip kpi={prefecture.clone()} />
                <TrajectoryChart
                    div_id={format!("trajectory-pref-{}", prefecture.code)}
                    points={overview.trajectory}
                    unit="千t-CO₂"
                />
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"市区町村ランキング"}</h3>
                        <p class="text-sm text-gray-500">{"ペース達成率の高い順"}</p>
                        <MunicipalityRanking rows={overview.municipalities} />
                    </div>
                </div>
            </>
        }
    });

    html! {
        <Layout title={title} crumbs={crumbs}>
            <FetchRender<PrefectureOverview>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
                not_found_subject={Some(format!("都道府県コード {}", props.code))}
            />
        </Layout>
    }
}

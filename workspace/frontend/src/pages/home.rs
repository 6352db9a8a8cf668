use common::{HomeSummary, PrefectureKpi};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::dashboard::{fetch_home, fetch_prefectures};
use crate::api_client::ApiError;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::components::kpi::PrefectureKpiStrip;
use crate::components::layout::layout::Layout;
use crate::components::pace::PaceHero;
use crate::components::ranking::PrefectureRanking;
use crate::Route;

#[derive(Clone, PartialEq)]
struct HomeData {
    summary: HomeSummary,
    prefectures: Vec<PrefectureKpi>,
}

async fn fetch_home_data(_: ()) -> Result<HomeData, ApiError> {
    let summary = fetch_home().await?;
    let prefectures = fetch_prefectures().await?;
    Ok(HomeData { summary, prefectures })
}

#[function_component(Home)]
pub fn home() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch((), fetch_home_data);

    let render = Callback::from(|data: HomeData| {
        let featured = data.summary.featured;
        html! {
            <>
                <PaceHero
                    name={featured.name.clone()}
                    latest_year={featured.latest_year}
                    reduction_rate={featured.reduction_rate}
                    actual_pace={featured.actual_pace}
                    required_pace={featured.required_pace}
                    pace_achievement_rate={featured.pace_achievement_rate}
                    status={featured.status}
                />
                <PrefectureKpiStrip kpi={featured.clone()} />
                <div class="flex justify-end">
                    <Link<Route> to={Route::Prefecture { code: featured.code.clone() }} classes="btn btn-primary btn-sm">
                        {format!("{}の市区町村ランキング", featured.name)}
                    </Link<Route>>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-lg">
                            {format!("都道府県ランキング ({}件)", data.summary.prefecture_count)}
                        </h3>
                        <PrefectureRanking prefectures={data.prefectures} />
                    </div>
                </div>
            </>
        }
    });

    html! {
        <Layout title="自治体CO₂削減ペース">
            <FetchRender<HomeData>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
                loading_text={Some("全国のデータを読み込み中...".to_string())}
                not_found_subject={Some("注目の都道府県".to_string())}
            />
        </Layout>
    }
}

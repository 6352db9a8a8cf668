use common::MunicipalityDetail;
use yew::prelude::*;

use crate::api_client::dashboard::fetch_municipality;
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::components::charts::{SectorReductionChart, SectorTrendChart};
use crate::components::kpi::{DeviationMeter, MunicipalityKpiStrip};
use crate::components::layout::breadcrumb::Crumb;
use crate::components::layout::layout::Layout;
use crate::components::pace::{PaceHero, TrajectoryChart};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub city_code: String,
}

#[function_component(MunicipalityPage)]
pub fn municipality_page(props: &Props) -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(props.city_code.clone(), fetch_municipality);

    let mut crumbs = vec![Crumb::new("トップ", Route::Home)];
    let title = match fetch_state.data() {
        Some(detail) => {
            crumbs.push(Crumb::new(
                format!("都道府県 {}", detail.kpi.prefecture_code),
                Route::Prefecture { code: detail.kpi.prefecture_code.clone() },
            ));
            detail.kpi.name.clone()
        }
        None => format!("市区町村 {}", props.city_code),
    };
    crumbs.push(Crumb::new(
        title.clone(),
        Route::Municipality { city_code: props.city_code.clone() },
    ));

    let render = Callback::from(|detail: MunicipalityDetail| {
        let kpi = detail.kpi;
        let code = kpi.city_code.clone();
        html! {
            <>
                <PaceHero
                    name={kpi.name.clone()}
                    latest_year={kpi.latest_year}
                    reduction_rate={kpi.reduction_rate}
                    actual_pace={kpi.actual_pace}
                    required_pace={kpi.required_pace}
                    pace_achievement_rate={kpi.pace_achievement_rate}
                    status={kpi.status}
                />
                <MunicipalityKpiStrip kpi={kpi.clone()} peer_count={detail.peer_count} />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2">
                        <TrajectoryChart
                            div_id={format!("trajectory-{}", code)}
                            points={detail.trajectory}
                            unit="千t-CO₂"
                        />
                    </div>
                    <DeviationMeter score={kpi.deviation_score} />
                </div>
                <SectorTrendChart div_id={format!("sector-trend-{}", code)} points={detail.sector_trend} />
                <SectorReductionChart div_id={format!("sector-reduction-{}", code)} reductions={detail.sector_reductions} />
            </>
        }
    });

    html! {
        <Layout title={title} crumbs={crumbs}>
            <FetchRender<MunicipalityDetail>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
                not_found_subject={Some(format!("市区町村コード {}", props.city_code))}
            />
        </Layout>
    }
}

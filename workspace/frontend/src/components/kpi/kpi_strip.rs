use common::format::{change_marker, fixed, thousands};
use common::{MunicipalityKpi, PrefectureKpi};
use yew::prelude::*;

use super::kpi_card::KpiCard;

fn shortfall_class(shortfall: f64) -> Option<AttrValue> {
    (shortfall > 0.0).then(|| AttrValue::from("text-error"))
}

fn rank_text(rank: Option<i32>, of: Option<usize>) -> String {
    match (rank, of) {
        (Some(rank), Some(of)) => format!("{}位 / {}", rank, of),
        (Some(rank), None) => format!("{}位", rank),
        (None, _) => "-".to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct MunicipalityProps {
    pub kpi: MunicipalityKpi,
    pub peer_count: usize,
}

#[function_component(MunicipalityKpiStrip)]
pub fn municipality_kpi_strip(props: &MunicipalityProps) -> Html {
    let kpi = &props.kpi;

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <KpiCard
                title="最新排出量"
                value={format!("{} 千t", fixed(kpi.latest_emission_kt, 1))}
                desc={AttrValue::from(format!("{}年度 / 2013年度 {} 千t", kpi.latest_year, fixed(kpi.base_emission_kt, 1)))}
            />
            <KpiCard
                title="基準年比"
                value={change_marker(kpi.reduction_rate)}
                desc={AttrValue::from("2013年度比")}
            />
            <KpiCard
                title="2030年 不足量"
                value={format!("{} 千t", fixed(kpi.shortfall_2030_kt, 1))}
                desc={AttrValue::from("現ペース継続時の目標超過分")}
                value_class={shortfall_class(kpi.shortfall_2030_kt)}
            />
            <KpiCard
                title="1人あたり排出量"
                value={kpi.emission_per_capita.map(|v| format!("{} t", fixed(v, 2))).unwrap_or_else(|| "-".to_string())}
                desc={AttrValue::from(kpi.population.map(|p| format!("人口 {}人", thousands(p))).unwrap_or_default())}
            />
            <KpiCard
                title="県内順位"
                value={rank_text(kpi.pref_rank, Some(props.peer_count))}
                desc={AttrValue::from("達成率順")}
            />
            <KpiCard
                title="全国順位"
                value={rank_text(kpi.national_rank, None)}
                desc={AttrValue::from("達成率順")}
            />
            <KpiCard
                title="ゼロカーボン宣言"
                value={if kpi.zero_carbon_declared { "宣言済" } else { "未宣言" }}
                desc={kpi.zero_carbon_year.map(|y| AttrValue::from(format!("{}年", y)))}
            />
            <KpiCard
                title="面積"
                value={kpi.area_km2.map(|a| format!("{} km²", fixed(a, 1))).unwrap_or_else(|| "-".to_string())}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PrefectureProps {
    pub kpi: PrefectureKpi,
}

#[function_component(PrefectureKpiStrip)]
pub fn prefecture_kpi_strip(props: &PrefectureProps) -> Html {
    let kpi = &props.kpi;
    let updated = kpi
        .calculated_at
        .map(|at| format!("{} 算出", at.format("%Y-%m-%d")))
        .unwrap_or_default();

    html! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <KpiCard
                title="最新排出量"
                value={format!("{} 百万t", fixed(kpi.latest_emission_mt, 2))}
                desc={AttrValue::from(format!("{}年度 / 2013年度 {} 百万t", kpi.latest_year, fixed(kpi.base_emission_mt, 2)))}
            />
            <KpiCard
                title="基準年比"
                value={change_marker(kpi.reduction_rate)}
                desc={AttrValue::from(updated)}
            />
            <KpiCard
                title="2030年 不足量"
                value={format!("{} 百万t", fixed(kpi.shortfall_2030_mt, 2))}
                value_class={shortfall_class(kpi.shortfall_2030_mt)}
            />
            <KpiCard
                title="市区町村の判定"
                value={format!("{} / {} / {}", kpi.on_track_count, kpi.at_risk_count, kpi.off_track_count)}
                desc={AttrValue::from(format!("On Track / At Risk / Off Track ({}団体)", kpi.municipality_count))}
            />
        </div>
    }
}

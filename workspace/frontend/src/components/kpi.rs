mod deviation_meter;
mod kpi_card;
mod kpi_strip;

pub use deviation_meter::DeviationMeter;
pub use kpi_strip::{MunicipalityKpiStrip, PrefectureKpiStrip};

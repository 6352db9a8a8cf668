mod sector_reduction_chart;
mod sector_trend_chart;

pub use sector_reduction_chart::SectorReductionChart;
pub use sector_trend_chart::SectorTrendChart;

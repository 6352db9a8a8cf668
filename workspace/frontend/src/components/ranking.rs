mod ranking_list;
mod ranking_row;
mod status_badge;

pub use ranking_list::{MunicipalityRanking, PrefectureRanking};
pub use status_badge::StatusBadge;

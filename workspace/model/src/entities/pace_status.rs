use sea_orm::entity::prelude::*;

/// Pace classification as stored in the KPI tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(9))")]
pub enum PaceStatus {
    #[sea_orm(string_value = "on-track")]
    OnTrack,
    #[sea_orm(string_value = "at-risk")]
    AtRisk,
    #[sea_orm(string_value = "off-track")]
    OffTrack,
}

impl From<PaceStatus> for common::PaceStatus {
    fn from(status: PaceStatus) -> Self {
        match status {
            PaceStatus::OnTrack => common::PaceStatus::OnTrack,
            PaceStatus::AtRisk => common::PaceStatus::AtRisk,
            PaceStatus::OffTrack => common::PaceStatus::OffTrack,
        }
    }
}

impl From<common::PaceStatus> for PaceStatus {
    fn from(status: common::PaceStatus) -> Self {
        match status {
            common::PaceStatus::OnTrack => PaceStatus::OnTrack,
            common::PaceStatus::AtRisk => PaceStatus::AtRisk,
            common::PaceStatus::OffTrack => PaceStatus::OffTrack,
        }
    }
}

//! Emission sector catalogue.
//!
//! The inventory reports ten raw sectors under their Japanese names. Charts
//! group them into six display buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// One of the ten raw inventory sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Sector {
    #[serde(rename = "製造業")]
    Manufacturing,
    #[serde(rename = "建設業")]
    Construction,
    #[serde(rename = "農林水産業")]
    AgricultureForestryFisheries,
    #[serde(rename = "業務その他")]
    CommercialOther,
    #[serde(rename = "家庭")]
    Household,
    #[serde(rename = "旅客")]
    Passenger,
    #[serde(rename = "貨物")]
    Freight,
    #[serde(rename = "鉄道")]
    Rail,
    #[serde(rename = "船舶")]
    Shipping,
    #[serde(rename = "廃棄物")]
    Waste,
}

impl Sector {
    /// Every sector in inventory order.
    pub const ALL: [Sector; 10] = [
        Sector::Manufacturing,
        Sector::Construction,
        Sector::AgricultureForestryFisheries,
        Sector::CommercialOther,
        Sector::Household,
        Sector::Passenger,
        Sector::Freight,
        Sector::Rail,
        Sector::Shipping,
        Sector::Waste,
    ];

    /// Name as stored in the `emissions.sector` column.
    pub fn name(&self) -> &'static str {
        match self {
            Sector::Manufacturing => "製造業",
            Sector::Construction => "建設業",
            Sector::AgricultureForestryFisheries => "農林水産業",
            Sector::CommercialOther => "業務その他",
            Sector::Household => "家庭",
            Sector::Passenger => "旅客",
            Sector::Freight => "貨物",
            Sector::Rail => "鉄道",
            Sector::Shipping => "船舶",
            Sector::Waste => "廃棄物",
        }
    }

    /// Looks a sector up by its stored name.
    pub fn from_name(name: &str) -> Option<Sector> {
        Sector::ALL.into_iter().find(|s| s.name() == name.trim())
    }

    pub fn bucket(&self) -> SectorBucket {
        match self {
            Sector::Manufacturing | Sector::Construction | Sector::AgricultureForestryFisheries => {
                SectorBucket::Industry
            }
            Sector::CommercialOther => SectorBucket::Business,
            Sector::Household => SectorBucket::Home,
            Sector::Passenger | Sector::Freight | Sector::Rail | Sector::Shipping => {
                SectorBucket::Transport
            }
            Sector::Waste => SectorBucket::Waste,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sector::from_name(s).ok_or_else(|| format!("unknown sector '{}'", s))
    }
}

/// Display bucket used by the stacked sector chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SectorBucket {
    Industry,
    Business,
    Home,
    Transport,
    Waste,
    Other,
}

impl SectorBucket {
    /// Stacking order of the trend chart, bottom first.
    pub const ALL: [SectorBucket; 6] = [
        SectorBucket::Home,
        SectorBucket::Business,
        SectorBucket::Transport,
        SectorBucket::Industry,
        SectorBucket::Waste,
        SectorBucket::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SectorBucket::Industry => "産業",
            SectorBucket::Business => "業務その他",
            SectorBucket::Home => "家庭",
            SectorBucket::Transport => "運輸",
            SectorBucket::Waste => "廃棄物",
            SectorBucket::Other => "その他",
        }
    }

    /// Chart fill colour.
    pub fn color(&self) -> &'static str {
        match self {
            SectorBucket::Home => "#1a2744",
            SectorBucket::Business => "#3d5a8a",
            SectorBucket::Transport => "#b8962e",
            SectorBucket::Industry => "#2d6b45",
            SectorBucket::Waste => "#c8bfa8",
            SectorBucket::Other => "#e0d8c8",
        }
    }
}

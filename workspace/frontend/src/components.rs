pub mod charts;
pub mod kpi;
pub mod layout;
pub mod pace;
pub mod ranking;

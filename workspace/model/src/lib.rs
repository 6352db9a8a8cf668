//! Storage layer of the dashboard: SeaORM entities over the KPI and
//! emission tables.

pub mod entities;

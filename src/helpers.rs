pub mod converters;
pub mod queries;

pub mod import;
pub mod initdb;
pub mod migrate_and_serve;
pub mod recalc;
pub mod serve;

pub use import::import_dataset;
pub use initdb::init_database;
pub use migrate_and_serve::migrate_and_serve;
pub use recalc::recalculate;
pub use serve::serve;

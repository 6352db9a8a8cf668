pub use sea_orm_migration::prelude::*;

pub mod entity_iden;
mod m20250301_000001_create_emission_tables;
mod m20250302_000001_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_emission_tables::Migration),
            Box::new(m20250302_000001_add_lookup_indexes::Migration),
        ]
    }
}

pub use sea_orm_migration::prelude::*;

mod m20241001_000001_create_destinations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241001_000001_create_destinations::Migration)]
    }
}

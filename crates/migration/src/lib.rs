pub use sea_orm_migration::prelude::*;

mod m20260301_000000_init;

/// Local SQLite file used by the command line tools when `DATABASE_URL` is
/// not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./provisio.db?mode=rwc";

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260301_000000_init::Migration)]
    }
}

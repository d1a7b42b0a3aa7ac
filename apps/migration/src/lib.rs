//! Schema migrations for the Blogfeed content database.

pub use sea_orm_migration::prelude::*;

mod m20261019_000001_create_blogs;
mod m20261019_000002_create_articles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_blogs::Migration),
            Box::new(m20261019_000002_create_articles::Migration),
        ]
    }
}

pub use sea_orm_migration::prelude::*;

mod m20171219_000001_create_scrum_scrum_user_table;
mod m20171219_000002_create_scrum_scrum_user_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20171219_000001_create_scrum_scrum_user_table::Migration),
            Box::new(m20171219_000002_create_scrum_scrum_user_token_table::Migration),
        ]
    }
}

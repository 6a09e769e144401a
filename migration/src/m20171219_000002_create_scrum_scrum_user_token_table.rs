use sea_orm_migration::prelude::*;

use crate::m20171219_000001_create_scrum_scrum_user_table::ScrumScrumUser;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum ScrumScrumUserToken {
    Table,
    Key,
    UserId,
    Client,
    CreatedOn,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FK is declared inline so the same migration runs on SQLite
        m.create_table(
            Table::create()
                .table(ScrumScrumUserToken::Table)
                .if_not_exists()
                .col(ColumnDef::new(ScrumScrumUserToken::Key).string_len(64).not_null().primary_key())
                .col(ColumnDef::new(ScrumScrumUserToken::UserId).uuid().not_null())
                .col(ColumnDef::new(ScrumScrumUserToken::Client).string_len(16).not_null())
                .col(ColumnDef::new(ScrumScrumUserToken::CreatedOn).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_scrum_scrum_user_token_user")
                        .from(ScrumScrumUserToken::Table, ScrumScrumUserToken::UserId)
                        .to(ScrumScrumUser::Table, ScrumScrumUser::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // One token per (user, client)
        m.create_index(
            Index::create()
                .name("idx_scrum_scrum_user_token_user_client")
                .table(ScrumScrumUserToken::Table)
                .col(ScrumScrumUserToken::UserId)
                .col(ScrumScrumUserToken::Client)
                .unique()
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(
            Table::drop()
                .table(ScrumScrumUserToken::Table)
                .if_exists()
                .to_owned(),
        ).await?;
        Ok(())
    }
}

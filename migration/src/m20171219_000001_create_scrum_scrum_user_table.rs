use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScrumScrumUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScrumScrumUser::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::Username)
                            .string_len(150)
                            .not_null()
                            .unique_key()
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::Email)
                            .string_len(254)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::Name)
                            .string_len(255)
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::Password)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::IsSuperuser)
                            .boolean()
                            .not_null()
                            .default(false)
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false)
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::IsActive)
                            .boolean()
                            .not_null()
                            .default(true)
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::LastLogin)
                            .timestamp_with_time_zone()
                            .null()
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(ScrumScrumUser::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(ScrumScrumUser::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum ScrumScrumUser {
    Table,
    Id,
    Username,
    Email,
    Name,
    Password,
    IsSuperuser,
    IsStaff,
    IsActive,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Blogs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Blogs::AuthorId).uuid().not_null())
                    .col(ColumnDef::new(Blogs::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Blogs::Description).text().not_null())
                    .col(ColumnDef::new(Blogs::Category).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Blogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The feed lists blogs newest first.
        manager
            .create_index(
                Index::create()
                    .name("idx_blogs_created_at")
                    .table(Blogs::Table)
                    .col(Blogs::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Blogs {
    Table,
    Id,
    AuthorId,
    Title,
    Description,
    Category,
    CreatedAt,
}

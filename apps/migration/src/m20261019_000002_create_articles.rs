use sea_orm_migration::prelude::*;

use super::m20261019_000001_create_blogs::Blogs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Articles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Articles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Articles::BlogId).uuid().not_null())
                    .col(ColumnDef::new(Articles::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Articles::Content).text().not_null())
                    .col(
                        ColumnDef::new(Articles::Status)
                            .string_len(16)
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(Articles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Articles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_articles_blog_id")
                            .from(Articles::Table, Articles::BlogId)
                            .to(Blogs::Table, Blogs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_articles_blog_id_created_at")
                    .table(Articles::Table)
                    .col(Articles::BlogId)
                    .col(Articles::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Articles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Articles {
    Table,
    Id,
    BlogId,
    Title,
    Content,
    Status,
    CreatedAt,
    UpdatedAt,
}

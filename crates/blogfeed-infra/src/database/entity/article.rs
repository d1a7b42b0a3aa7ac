//! Article entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blogfeed_core::domain::ArticleStatus;

use crate::database::postgres_base::WriteOnceColumns;

/// Stored form of [`ArticleStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

impl From<Status> for ArticleStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => ArticleStatus::Draft,
            Status::Published => ArticleStatus::Published,
        }
    }
}

impl From<ArticleStatus> for Status {
    fn from(status: ArticleStatus) -> Self {
        match status {
            ArticleStatus::Draft => Status::Draft,
            ArticleStatus::Published => Status::Published,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub blog_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: Status,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog::Entity",
        from = "Column::BlogId",
        to = "super::blog::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Blog,
}

impl Related<super::blog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Blog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl WriteOnceColumns for Entity {
    fn write_once_columns() -> Vec<Column> {
        vec![Column::CreatedAt]
    }
}

/// Conversion from SeaORM Model to Domain Article.
impl From<Model> for blogfeed_core::domain::Article {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            blog_id: model.blog_id,
            title: model.title,
            content: model.content,
            status: model.status.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Article to SeaORM ActiveModel.
impl From<blogfeed_core::domain::Article> for ActiveModel {
    fn from(article: blogfeed_core::domain::Article) -> Self {
        Self {
            id: Set(article.id),
            blog_id: Set(article.blog_id),
            title: Set(article.title),
            content: Set(article.content),
            status: Set(article.status.into()),
            created_at: Set(article.created_at.into()),
            updated_at: Set(article.updated_at.into()),
        }
    }
}

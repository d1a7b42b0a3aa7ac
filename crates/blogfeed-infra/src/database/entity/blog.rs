//! Blog entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::database::postgres_base::WriteOnceColumns;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::article::Entity")]
    Article,
}

impl Related<super::article::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Article.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl WriteOnceColumns for Entity {
    fn write_once_columns() -> Vec<Column> {
        vec![Column::CreatedAt]
    }
}

/// Conversion from SeaORM Model to Domain Blog.
impl From<Model> for blogfeed_core::domain::Blog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            description: model.description,
            category: model.category,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Blog to SeaORM ActiveModel.
impl From<blogfeed_core::domain::Blog> for ActiveModel {
    fn from(blog: blogfeed_core::domain::Blog) -> Self {
        Self {
            id: Set(blog.id),
            author_id: Set(blog.author_id),
            title: Set(blog.title),
            description: Set(blog.description),
            category: Set(blog.category),
            created_at: Set(blog.created_at.into()),
        }
    }
}

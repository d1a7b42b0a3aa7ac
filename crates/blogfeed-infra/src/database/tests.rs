#[cfg(test)]
mod tests {
    use crate::database::entity::{article, blog};
    use crate::database::postgres_repo::{
        PostgresArticleRepository, PostgresBlogRepository, PostgresContentStore,
    };
    use blogfeed_core::domain::{Article, ArticleStatus, Blog};
    use blogfeed_core::error::RepoError;
    use blogfeed_core::feed::load_feed;
    use blogfeed_core::ports::{BaseRepository, ContentStore};
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

    fn blog_model(title: &str, age_minutes: i64) -> blog::Model {
        blog::Model {
            id: uuid::Uuid::new_v4(),
            author_id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            description: "description".to_owned(),
            category: "category".to_owned(),
            created_at: (Utc::now() - Duration::minutes(age_minutes)).into(),
        }
    }

    fn article_model(
        blog_id: uuid::Uuid,
        title: &str,
        age_minutes: i64,
        status: article::Status,
    ) -> article::Model {
        let at = Utc::now() - Duration::minutes(age_minutes);
        article::Model {
            id: uuid::Uuid::new_v4(),
            blog_id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            status,
            created_at: at.into(),
            updated_at: at.into(),
        }
    }

    #[tokio::test]
    async fn test_get_blog_maps_model() {
        let model = blog_model("Test Blog", 5);
        let blog_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let store = PostgresContentStore::new(db);
        let blog = store.get_blog(blog_id).await.unwrap().unwrap();

        assert_eq!(blog.id, blog_id);
        assert_eq!(blog.title, "Test Blog");
    }

    #[tokio::test]
    async fn test_get_missing_blog_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let store = PostgresContentStore::new(db);

        assert!(store.get_blog(uuid::Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_articles_maps_status() {
        let blog_id = uuid::Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                article_model(blog_id, "Published", 1, article::Status::Published),
                article_model(blog_id, "Draft", 2, article::Status::Draft),
            ]])
            .into_connection();

        let store = PostgresContentStore::new(db);
        let articles = store.list_articles(blog_id).await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].status, ArticleStatus::Published);
        assert_eq!(articles[1].status, ArticleStatus::Draft);
    }

    #[tokio::test]
    async fn test_load_feed_over_postgres() {
        let newer = blog_model("title2", 1);
        let older = blog_model("title1", 10);
        let newer_id = newer.id;

        // One query for the blogs, then one per blog for its articles.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![newer, older]])
            .append_query_results(vec![vec![
                article_model(newer_id, "Draft", 1, article::Status::Draft),
                article_model(newer_id, "New", 2, article::Status::Published),
                article_model(newer_id, "Old", 3, article::Status::Published),
            ]])
            .append_query_results(vec![Vec::<article::Model>::new()])
            .into_connection();

        let store = PostgresContentStore::new(db);
        let feed = load_feed(&store).await.unwrap();

        assert_eq!(feed.entries.len(), 2);
        assert_eq!(feed.entries[0].blog.title, "title2");
        assert_eq!(
            feed.entries[0].latest_article.as_ref().map(|a| a.title.as_str()),
            Some("New")
        );
        assert_eq!(feed.entries[1].blog.title, "title1");
        assert!(feed.entries[1].latest_article.is_none());
    }

    #[tokio::test]
    async fn test_find_article_by_id() {
        let model = article_model(uuid::Uuid::new_v4(), "Test Article", 1, article::Status::Draft);
        let article_id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let repo = PostgresArticleRepository::new(db);
        let result: Option<Article> = repo.find_by_id(article_id).await.unwrap();

        let article = result.unwrap();
        assert_eq!(article.id, article_id);
        assert_eq!(article.status, ArticleStatus::Draft);
    }

    #[tokio::test]
    async fn test_delete_missing_blog_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let result = BaseRepository::<Blog, uuid::Uuid>::delete(&repo, uuid::Uuid::new_v4()).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_save_existing_article_updates_without_created_at() {
        let stored = article_model(uuid::Uuid::new_v4(), "Stored", 10, article::Status::Draft);
        let mut article: Article = stored.clone().into();
        article.created_at = Utc::now() + Duration::days(365);
        article.publish();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![article::Model {
                status: article::Status::Published,
                ..stored.clone()
            }]])
            .into_connection();

        let repo = PostgresArticleRepository::new(db);
        let saved = BaseRepository::<Article, uuid::Uuid>::save(&repo, article)
            .await
            .unwrap();

        let created_at: chrono::DateTime<Utc> = stored.created_at.into();
        assert_eq!(saved.created_at, created_at);
        assert_eq!(saved.status, ArticleStatus::Published);

        let log = repo.db.into_transaction_log();
        assert_eq!(log.len(), 1);
        let sql = &log[0].statements()[0].sql;
        assert!(sql.starts_with("UPDATE"));
        let set_clause = sql.split(" WHERE ").next().unwrap();
        assert!(set_clause.contains("\"status\""));
        assert!(!set_clause.contains("created_at"));
    }

    #[tokio::test]
    async fn test_save_new_article_falls_back_to_insert() {
        let model = article_model(uuid::Uuid::new_v4(), "Fresh", 1, article::Status::Draft);
        let article_id = model.id;

        // The update matches no row, then the insert returns the new one.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<article::Model>::new(), vec![model.clone()]])
            .into_connection();

        let repo = PostgresArticleRepository::new(db);
        let saved = BaseRepository::<Article, uuid::Uuid>::save(&repo, model.into())
            .await
            .unwrap();

        assert_eq!(saved.id, article_id);

        let log = repo.db.into_transaction_log();
        assert_eq!(log.len(), 2);
        assert!(log[0].statements()[0].sql.starts_with("UPDATE"));
        let insert = &log[1].statements()[0].sql;
        assert!(insert.starts_with("INSERT"));
        assert!(insert.contains("\"created_at\""));
    }

    #[tokio::test]
    async fn test_save_orphan_article_is_constraint_error() {
        let model = article_model(uuid::Uuid::new_v4(), "Orphan", 1, article::Status::Draft);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<article::Model>::new()])
            .append_query_errors(vec![DbErr::Custom(
                "insert or update on table \"articles\" violates foreign key constraint \"fk_articles_blog\""
                    .to_owned(),
            )])
            .into_connection();

        let repo = PostgresArticleRepository::new(db);
        let result = BaseRepository::<Article, uuid::Uuid>::save(&repo, model.into()).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_resave_blog_leaves_created_at_alone() {
        let stored = blog_model("Stored", 30);
        let mut blog: Blog = stored.clone().into();
        blog.title = "Renamed".to_owned();
        blog.created_at = Utc::now();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![blog::Model {
                title: "Renamed".to_owned(),
                ..stored.clone()
            }]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let saved = BaseRepository::<Blog, uuid::Uuid>::save(&repo, blog).await.unwrap();

        let created_at: chrono::DateTime<Utc> = stored.created_at.into();
        assert_eq!(saved.created_at, created_at);
        assert_eq!(saved.title, "Renamed");

        let log = repo.db.into_transaction_log();
        let set_clause = log[0].statements()[0].sql.split(" WHERE ").next().unwrap().to_owned();
        assert!(!set_clause.contains("created_at"));
    }
}

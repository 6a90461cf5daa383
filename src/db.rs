use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::error::AppResult;

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut opts = ConnectOptions::new(database_url);
    if database_url.contains(":memory:") {
        // Every pooled connection would otherwise get its own empty database.
        opts.max_connections(1).min_connections(1);
    }
    opts.sqlx_logging(false);

    let db = Database::connect(opts).await?;

    for pragma in ["PRAGMA foreign_keys=ON", "PRAGMA journal_mode=WAL", "PRAGMA synchronous=NORMAL"] {
        db.execute(Statement::from_string(db.get_database_backend(), pragma.to_string())).await?;
    }

    Migrator::up(&db, None).await?;
    tracing::debug!("migrations applied");
    Ok(db)
}

#[cfg(test)]
pub async fn test_db() -> DatabaseConnection {
    connect_and_migrate("sqlite::memory:").await.expect("in-memory database")
}

#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, Set};

    use super::test_db;
    use crate::entities::{actor, movie};

    fn assert_check_failed(err: sea_orm::DbErr) {
        assert!(err.to_string().contains("CHECK constraint failed"), "{err}");
    }

    #[tokio::test]
    async fn negative_age_is_rejected_by_the_schema() {
        let db = test_db().await;
        let err = actor::ActiveModel {
            name: Set("Nobody".into()),
            age: Set(-1),
            description: Set(String::new()),
            image: Set(String::new()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap_err();
        assert_check_failed(err);
    }

    #[tokio::test]
    async fn negative_money_is_rejected_by_the_schema() {
        let db = test_db().await;
        let row = |budget: i64, fees: i64| movie::ActiveModel {
            title: Set("Broke".into()),
            tagline: Set(String::new()),
            description: Set(String::new()),
            poster: Set(String::new()),
            year: Set(2000),
            country: Set(String::new()),
            world_premiere: Set("2000-01-01".into()),
            budget: Set(budget),
            fees_in_usa: Set(fees),
            fees_in_world: Set(0),
            category_id: Set(None),
            url: Set(format!("broke-{budget}-{fees}")),
            draft: Set(false),
            ..Default::default()
        };

        assert_check_failed(row(-1, 0).insert(&db).await.unwrap_err());
        assert_check_failed(row(0, -1).insert(&db).await.unwrap_err());
        assert!(row(0, 0).insert(&db).await.is_ok());
    }
}

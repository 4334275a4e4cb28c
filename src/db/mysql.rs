use crate::config::Config;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

pub async fn create_mysql_pool(config: &Config) -> Result<DbPool, anyhow::Error> {
    let url = config.mysql_url();
    let db = Database::connect(&url).await?;

    // Create tables if not exists using raw SQL. Table and column names are
    // the on-disk contract. Foreign keys carry no ON DELETE clause, so the
    // engine default (RESTRICT) applies: deleting a row with dependents fails
    // instead of cascading or orphaning.
    let sql = r#"
        CREATE TABLE IF NOT EXISTS `User` (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            username VARCHAR(20) NOT NULL,
            firstname VARCHAR(15) NOT NULL,
            lastname VARCHAR(15) NOT NULL,
            email VARCHAR(255) NOT NULL
        );

        CREATE TABLE IF NOT EXISTS `Follower` (
            user_from_id BIGINT NOT NULL,
            user_to_id BIGINT NOT NULL,
            PRIMARY KEY (user_from_id, user_to_id),
            FOREIGN KEY (user_from_id) REFERENCES `User`(id),
            FOREIGN KEY (user_to_id) REFERENCES `User`(id),
            INDEX idx_user_to_id (user_to_id)
        );

        CREATE TABLE IF NOT EXISTS `Post` (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            user_id BIGINT NOT NULL,
            FOREIGN KEY (user_id) REFERENCES `User`(id),
            INDEX idx_user_id (user_id)
        );

        CREATE TABLE IF NOT EXISTS `Comment` (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            comment_text TEXT NOT NULL,
            author_id BIGINT NOT NULL,
            post_id BIGINT NOT NULL,
            FOREIGN KEY (author_id) REFERENCES `User`(id),
            FOREIGN KEY (post_id) REFERENCES `Post`(id),
            INDEX idx_author_id (author_id),
            INDEX idx_post_id (post_id)
        );

        CREATE TABLE IF NOT EXISTS `Media` (
            id BIGINT AUTO_INCREMENT PRIMARY KEY,
            `type` VARCHAR(16) NOT NULL,
            url VARCHAR(255) NOT NULL,
            post_id BIGINT NOT NULL,
            FOREIGN KEY (post_id) REFERENCES `Post`(id),
            INDEX idx_post_id (post_id)
        );
    "#;

    // Execute schema creation
    for statement in sql.split(';') {
        let statement = statement.trim();
        if !statement.is_empty() {
            let stmt = sea_orm::Statement::from_string(
                sea_orm::DatabaseBackend::MySql,
                statement.to_string(),
            );
            db.execute(stmt).await?;
        }
    }

    Ok(db)
}

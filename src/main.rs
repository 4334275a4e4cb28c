use social_db::config::Config;
use social_db::db::create_mysql_pool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()?;

    log::info!(
        "Connecting to MySQL at {}:{}",
        config.mysql.host,
        config.mysql.port
    );

    let pool = create_mysql_pool(&config).await?;

    log::info!("Database schema ready");

    pool.close().await?;

    Ok(())
}

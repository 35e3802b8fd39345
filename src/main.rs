use diesel_migrations::MigrationHarness;
use warp::Filter;

use plant_inventory::config::Config;
use plant_inventory::{api, build_pool, MIGRATIONS};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("plant_inventory=info,warp=info")),
        )
        .init();

    let config = Config::from_env();
    let pool = build_pool(&config.database_url, config.pool_size)?;

    {
        let mut conn = pool.get()?;
        conn.run_pending_migrations(MIGRATIONS)?;
    }

    tracing::info!(addr = %config.bind_addr, db = %config.database_url, "starting plant inventory server");

    let routes = api::routes(pool).with(warp::trace::request());
    warp::serve(routes).run(config.bind_addr).await;

    Ok(())
}

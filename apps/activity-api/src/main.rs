use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use activity_api::services::activity_service::ActivityService;
use activity_api::{AppState, router};
use activity_db::repositories::activity_repo::ActivityRepository;

#[derive(Parser, Debug)]
#[command(name = "activity-api")]
#[command(about = "CRUD API server for activities", long_about = None)]
struct Cli {
    /// Postgres connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "activity_api=debug,axum=info,tower_http=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = activity_db::connect(&cli.database_url).await?;

    let repo = Arc::new(ActivityRepository::new(pool));
    let state = AppState {
        activities: Arc::new(ActivityService::new(repo)),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

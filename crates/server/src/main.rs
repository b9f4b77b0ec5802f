mod config;
mod doc;
mod dtos;
mod error;
mod routes;
mod state;
mod utils;

use config::Config;
use database::{db::create_connection, services::DbTodoService};
use log::info;
use migration::{Migrator, MigratorTrait};
use state::AppState;
use utils::shutdown::shutdown_signal;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().expect("Failed to load configuration");

    let db = create_connection(&config.database_url, config.max_connections)
        .await
        .expect("Failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        info!("Database migrations applied");
    }

    let app = routes::app(AppState::new(DbTodoService::new(db)));

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

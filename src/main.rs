use actix_web::{middleware::Logger, web, App, HttpServer};
use scrum_scrum::config::EnvConfig;
use scrum_scrum::db::db_service::DbService;
use scrum_scrum::routes::configure_routes;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = EnvConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let addr = format!("0.0.0.0:{}", config.port);

    let db_service = Arc::new(
        DbService::new(&config.db_url)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?,
    );

    info!(
        "Starting server on {} (web tokens expire after {} days)",
        addr, config.token_expiration_days
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&db_service)))
            .app_data(web::Data::new(config.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}

use std::env;

use actix_web::{App, HttpServer, middleware, web};
use catalog_admin::db::{establish_connection_pool, run_migrations};
use catalog_admin::models::config::ServerConfig;
use catalog_admin::repository::DieselRepository;
use catalog_admin::routes::configure;
use config::{Config, Environment, File};

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get().map_err(|e| e.to_string()).and_then(|mut conn| {
        run_migrations(&mut conn).map_err(|e| e.to_string())
    }) {
        Ok(applied) => log::info!("Applied {applied} pending migrations"),
        Err(e) => {
            log::error!("Failed to run migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Starting catalog server on {}:{}",
        server_config.address,
        server_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await
}

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};

use roost::config::Config;
use roost::db::MongoStore;
use roost::routes;
use roost::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();

    // One store client for the whole process, connected before serving.
    let store = Arc::new(MongoStore::connect(&config.mongo_url, &config.db_name).await?);
    let state = AppState {
        store: store.clone(),
        config: config.clone(),
        http: reqwest::Client::new(),
    };

    let addr = format!("0.0.0.0:{}", config.port);
    log::info!("listening on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind(&addr)?
    .run()
    .await?;

    store.close().await;
    Ok(())
}

use actix_web::{middleware::Logger, web, App, HttpServer};

use coursecraft_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("APP_ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config);

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .service(handlers::index)
            .service(handlers::generate_content)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}

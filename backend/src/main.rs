use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use clap::Parser;
use log::info;

use ticking_counter::{Config, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::parse();
    let settings = web::Data::new(config.view_settings());
    info!(
        "serving \"{}\" on {} (tick every {:?})",
        settings.label, config.bind, settings.tick_period
    );

    HttpServer::new(move || {
        let cors = Cors::default().allow_any_origin().allow_any_method().allow_any_header();
        App::new()
            .wrap(cors)
            .wrap(Logger::new("%a %{User-Agent}i %r %s %D"))
            .app_data(settings.clone())
            .configure(routes::configure)
    })
        .bind(config.bind)?
        .run()
        .await
}

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use contribtrack_backend::{db, routes};
use dotenv::dotenv;
use log::info;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let pool = db::create_pool().await;

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}

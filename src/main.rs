use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::env;

use emprest::{db, handlers, EmployeeService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // The data source is wired once, at process start, and handed to the
    // service; nothing past this point reads connection configuration.
    let pool = db::create_pool().await;
    let service = EmployeeService::new(pool);

    let addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Starting server at {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(service.clone()))
            .configure(handlers::configure)
    })
    .bind(addr)?
    .run()
    .await
}

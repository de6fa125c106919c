pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;

use actix_web::web;

/// Route table, shared between the binary and the integration tests.
/// The employee-scoped contribution listing must register before the
/// generic `/contributions/{id}` resource.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/employees")
            .route(web::get().to(handlers::employee::get_employees))
            .route(web::post().to(handlers::employee::create_employee)),
    )
    .service(
        web::resource("/employees/{id}")
            .route(web::get().to(handlers::employee::get_employee))
            .route(web::put().to(handlers::employee::update_employee))
            .route(web::delete().to(handlers::employee::delete_employee)),
    )
    .service(
        web::resource("/contributions")
            .route(web::get().to(handlers::contribution::get_contributions))
            .route(web::post().to(handlers::contribution::create_contribution)),
    )
    .service(
        web::resource("/contributions/employee/{employee_id}")
            .route(web::get().to(handlers::contribution::get_contributions_by_employee)),
    )
    .service(
        web::resource("/contributions/{id}")
            .route(web::get().to(handlers::contribution::get_contribution))
            .route(web::put().to(handlers::contribution::update_contribution))
            .route(web::delete().to(handlers::contribution::delete_contribution)),
    );
}

pub mod health;
pub mod reports;

use actix_web::web;

use crate::middleware::query_error_handler;

/// Register every endpoint of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .configure(health::configure)
        .configure(reports::controllers::configure);
}

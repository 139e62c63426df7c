use std::sync::Arc;

use actix_web::web;

pub mod calculations;
pub mod health;

use calculations::CalculationService;

/// Register shared state and every route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::Data::new(Arc::new(CalculationService::default())))
        .configure(health::controllers::configure)
        .configure(calculations::controllers::configure);
}

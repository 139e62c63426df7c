use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::calculations::models::CalculationForm;
use crate::modules::calculations::services::CalculationService;

/// Calculate profit for a submitted form
/// POST /calculations
pub async fn calculate(
    service: web::Data<Arc<CalculationService>>,
    form: web::Json<CalculationForm>,
) -> Result<HttpResponse, AppError> {
    let response = service.calculate(&form)?;

    Ok(HttpResponse::Ok().json(response))
}

/// Validate a form and return the typed input without calculating
/// POST /calculations/validate
pub async fn validate(
    service: web::Data<Arc<CalculationService>>,
    form: web::Json<CalculationForm>,
) -> Result<HttpResponse, AppError> {
    let input = service.validate(&form)?;

    Ok(HttpResponse::Ok().json(input))
}

/// Default form contents for a new calculation
/// GET /calculations/template
pub async fn template() -> HttpResponse {
    HttpResponse::Ok().json(CalculationForm::template())
}

/// Configure calculation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/calculations")
            .route("", web::post().to(calculate))
            .route("/validate", web::post().to(validate))
            .route("/template", web::get().to(template)),
    );
}

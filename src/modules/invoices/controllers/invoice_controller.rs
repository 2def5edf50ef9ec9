use std::sync::Arc;

use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use serde_json::Value;

use crate::core::error::AppError;
use crate::middleware::request_id::request_id;
use crate::modules::invoices::services::invoice_service::{GenerationStage, InvoiceService};

/// Generate a PDF invoice
/// POST /generate
pub async fn generate_invoice(
    service: web::Data<Arc<InvoiceService>>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let request_id = request_id(&req);
    tracing::debug!(request_id = %request_id, stage = %GenerationStage::Received, "Invoice generation stage");

    let pdf = service.generate_pdf(&body, &request_id).await?;

    // Content-Length is set from the sized body
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .body(pdf))
}

/// Render the invoice as HTML without printing it
/// POST /preview
pub async fn preview_invoice(
    service: web::Data<Arc<InvoiceService>>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let html = service.render_html(&body)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::post().to(generate_invoice))
        .route("/preview", web::post().to(preview_invoice));
}

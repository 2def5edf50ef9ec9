use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::quick_bill::models::{QuickBillRequest, QuickBillResponse};
use crate::modules::quick_bill::services::parse_quick_bill;

/// Turn a free-text sale into a partial invoice draft
/// POST /quick-bill
pub async fn quick_bill(request: web::Json<QuickBillRequest>) -> Result<HttpResponse, AppError> {
    let draft = parse_quick_bill(&request.text);

    tracing::debug!(
        items = draft.items.len(),
        has_buyer = draft.buyer_name.is_some(),
        "Quick bill parsed"
    );

    Ok(HttpResponse::Ok().json(QuickBillResponse::from(draft)))
}

/// Configure quick bill routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/quick-bill", web::post().to(quick_bill));
}

use actix_web::web;

pub mod health;
pub mod invoices;
pub mod pdf;
pub mod quick_bill;

/// Register every HTTP route of the service
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(invoices::configure)
        .configure(quick_bill::configure);
}

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biller::config::{Config, LogFormat};
use biller::invoices::InvoiceService;
use biller::middleware::{json_config, RequestId};
use biller::modules;
use biller::pdf::{PdfExporter, WebDriverLauncher};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    init_tracing(config.app.log_format);

    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting Biller invoice service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());
    tracing::info!(
        webdriver = %config.renderer.webdriver_url,
        max_concurrent = config.renderer.max_concurrent,
        timeout_secs = config.renderer.timeout.as_secs(),
        "PDF renderer configured"
    );

    let launcher = Arc::new(WebDriverLauncher::new(&config.renderer));
    let exporter = Arc::new(PdfExporter::new(launcher, &config.renderer));
    let invoice_service = Arc::new(InvoiceService::new(exporter));

    let max_body_bytes = config.server.max_body_bytes;
    let bind_address = config.server.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .app_data(json_config(max_body_bytes))
            .app_data(web::Data::new(invoice_service.clone()))
            .configure(modules::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "biller=debug,actix_web=info".into());

    let (json, pretty) = match format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json().flatten_event(true)), None),
        LogFormat::Pretty => (None, Some(tracing_subscriber::fmt::layer())),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json)
        .with(pretty)
        .init();
}

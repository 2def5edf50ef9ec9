// Integration tests for the invoice flow
//
// Drives the full route table with a stub browser:
// 1. Validate the body
// 2. Compute totals and render HTML
// 3. Print through the browser and release it
//
// Every browser launched must be closed, whatever the outcome.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::header, test, web, App};
use serde_json::{json, Value};

use biller::middleware::{json_config, RequestId};
use biller::modules;
use helpers::{stub_service, widget_invoice, StubBehaviour};

const BODY_LIMIT: usize = 1024 * 1024;

#[actix_web::test]
async fn test_widget_invoice_generates_pdf() {
    let (service, counters) = stub_service(StubBehaviour::Succeed);
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .app_data(json_config(BODY_LIMIT))
            .app_data(web::Data::new(service))
            .configure(modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(widget_invoice())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert!(!test::read_body(resp).await.is_empty());

    // The printed page carries the computed figures
    let html = counters.last_html().expect("browser received no HTML");
    assert!(html.contains("USD 30.00"), "subtotal");
    assert!(html.contains("USD 3.00"), "tax");
    assert!(html.contains("USD 0.00"), "discount");
    assert!(html.contains("USD 33.00"), "total and balance due");
    assert!(html.contains("#PENDING"));

    assert_eq!(counters.launched(), 1);
    assert_eq!(counters.closed(), 1);
}

#[actix_web::test]
async fn test_empty_items_rejected_without_browser() {
    let (service, counters) = stub_service(StubBehaviour::Succeed);
    let app = test::init_service(
        App::new()
            .app_data(json_config(BODY_LIMIT))
            .app_data(web::Data::new(service))
            .configure(modules::configure),
    )
    .await;

    let mut body = widget_invoice();
    body["items"] = json!([]);

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(counters.launched(), 0);
}

#[actix_web::test]
async fn test_failed_export_releases_browser() {
    for behaviour in [StubBehaviour::FailLoad, StubBehaviour::FailPrint] {
        let (service, counters) = stub_service(behaviour);
        let app = test::init_service(
            App::new()
                .app_data(json_config(BODY_LIMIT))
                .app_data(web::Data::new(service))
                .configure(modules::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(widget_invoice())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Internal Server Error");

        assert_eq!(counters.launched(), 1);
        assert_eq!(counters.closed(), 1, "browser left open after {:?}", behaviour);
    }
}

#[actix_web::test]
async fn test_sequential_requests_each_get_own_browser() {
    let (service, counters) = stub_service(StubBehaviour::Succeed);
    let app = test::init_service(
        App::new()
            .app_data(json_config(BODY_LIMIT))
            .app_data(web::Data::new(service))
            .configure(modules::configure),
    )
    .await;

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(widget_invoice())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    assert_eq!(counters.launched(), 3);
    assert_eq!(counters.closed(), 3);
}

#[actix_web::test]
async fn test_preview_returns_html_without_browser() {
    let (service, counters) = stub_service(StubBehaviour::Succeed);
    let app = test::init_service(
        App::new()
            .app_data(json_config(BODY_LIMIT))
            .app_data(web::Data::new(service))
            .configure(modules::configure),
    )
    .await;

    let mut body = widget_invoice();
    body["invoiceNumber"] = json!("INV-042");
    body["notes"] = json!("Thanks\nSee you soon");

    let req = test::TestRequest::post()
        .uri("/preview")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("#INV-042"));
    assert!(html.contains("Thanks<br>See you soon"));
    assert_eq!(counters.launched(), 0);
}

#[actix_web::test]
async fn test_request_id_is_echoed() {
    let (service, _) = stub_service(StubBehaviour::Succeed);
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .app_data(json_config(BODY_LIMIT))
            .app_data(web::Data::new(service))
            .configure(modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(("X-Request-ID", "flow-1"))
        .set_json(widget_invoice())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("x-request-id").unwrap(), "flow-1");
}

#[actix_web::test]
async fn test_quick_bill_and_health_routes() {
    let (service, _) = stub_service(StubBehaviour::Succeed);
    let app = test::init_service(
        App::new()
            .app_data(json_config(BODY_LIMIT))
            .app_data(web::Data::new(service))
            .configure(modules::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/quick-bill")
        .set_json(json!({ "text": "sale of 10 box at 3000 to Salim" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["items"][0]["quantity"], 10);
    assert_eq!(body["buyerDetails"]["name"], "Salim");

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

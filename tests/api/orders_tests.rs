//! Approved-orders endpoint tests.

use axum::http::StatusCode;
use mongodb::bson::{doc, Document};
use pretty_assertions::assert_eq;

use crate::common::{body_json, live_store_settings, TestApp};
use inventory_server::infrastructure::database;

#[tokio::test]
async fn unreachable_store_maps_to_structured_500() {
    let app = TestApp::new().await;

    let response = app.get("/get/approved_orders").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let detail = json["detail"].as_str().unwrap();
    assert!(
        detail.starts_with("Failed method GET at URL /get/approved_orders."),
        "unexpected detail: {detail}"
    );
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn lists_only_approved_orders() {
    let settings = live_store_settings("inventory_server_orders_it");
    let db = database::connect(&settings.database).await.unwrap();
    db.drop().await.unwrap();
    db.collection::<Document>("orders")
        .insert_many(vec![
            doc! { "status": "APPROVED", "customer": "ACME Press", "paperSize": "A4" },
            doc! { "status": "PENDING", "customer": "Milkyway Prints" },
        ])
        .await
        .unwrap();

    let app = TestApp::with_settings(settings).await;
    let response = app.get("/get/approved_orders").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Approved Orders Fetched Successfully");

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["customer"], "ACME Press");
    assert_eq!(data[0]["paperSize"], "A4");
    assert!(data[0]["_id"].is_string());
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn repeated_reads_are_identical() {
    let settings = live_store_settings("inventory_server_orders_idem_it");
    let db = database::connect(&settings.database).await.unwrap();
    db.drop().await.unwrap();
    db.collection::<Document>("orders")
        .insert_many(vec![
            doc! { "status": "APPROVED", "customer": "ACME Press" },
            doc! { "status": "APPROVED", "customer": "Milkyway Prints" },
        ])
        .await
        .unwrap();

    let app = TestApp::with_settings(settings).await;

    let first = body_json(app.get("/get/approved_orders").await).await;
    let second = body_json(app.get("/get/approved_orders").await).await;

    assert_eq!(first["data"], second["data"]);
}

//! User full-name endpoint tests.

use axum::http::StatusCode;
use mongodb::bson::{doc, oid::ObjectId, Document};
use pretty_assertions::assert_eq;

use crate::common::{body_json, live_store_settings, TestApp};
use inventory_server::infrastructure::database;

#[tokio::test]
async fn malformed_id_returns_structured_500() {
    let app = TestApp::new().await;

    let response = app.get("/get/user/not-an-object-id").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let detail = json["detail"].as_str().unwrap();
    assert!(
        detail.starts_with("Failed method GET at URL /get/user/not-an-object-id."),
        "unexpected detail: {detail}"
    );
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn returns_stored_full_name() {
    let settings = live_store_settings("inventory_server_users_it");
    let db = database::connect(&settings.database).await.unwrap();
    db.drop().await.unwrap();

    let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
    db.collection::<Document>("users")
        .insert_one(doc! {
            "_id": id,
            "fullName": "Jane Doe",
            "password": "hunter2",
            "email": "jane@example.com",
            "status": true,
            "role": "admin",
        })
        .await
        .unwrap();

    let app = TestApp::with_settings(settings).await;
    let response = app.get("/get/user/507f1f77bcf86cd799439011").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User Fetched Successfully");
    assert_eq!(json["data"]["fullName"], "Jane Doe");
    // The rest of the stored document never leaves the service.
    assert!(json["data"].get("password").is_none());
}

#[tokio::test]
#[ignore = "requires a running MongoDB"]
async fn unknown_user_returns_null_full_name() {
    let settings = live_store_settings("inventory_server_users_missing_it");
    let db = database::connect(&settings.database).await.unwrap();
    db.drop().await.unwrap();

    let app = TestApp::with_settings(settings).await;
    let response = app
        .get(&format!("/get/user/{}", ObjectId::new().to_hex()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "User Fetched Successfully");
    assert_eq!(json["data"]["fullName"], serde_json::Value::Null);
}

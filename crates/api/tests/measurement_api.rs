//! HTTP-level integration tests for the measurement record endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};

// ---------------------------------------------------------------------------
// Measurement list
// ---------------------------------------------------------------------------

#[tokio::test]
async fn measurements_for_project_returns_fixture_rows() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/measurement_record/getByProject/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Estrich EG");
    assert_eq!(rows[0]["measurementType"], "AREA");

    // 6.2·4.5 + (3.0·1.4 − 0.8·0.8) = 27.9 + 3.56
    let total = rows[0]["total"].as_f64().unwrap();
    assert!((total - 31.46).abs() < 1e-9);
}

#[tokio::test]
async fn measurements_for_unknown_project_returns_empty_list() {
    let app = common::build_test_app().await;
    let response = get(app, "/api/measurement_record/getByProject/999").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Measurement create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_measurement_returns_201_and_echoes_record() {
    let app = common::build_test_app().await;
    let response = post_json(
        app,
        "/api/measurement_record/create",
        serde_json::json!({
            "name": "Trockenbauwand Flur",
            "notes": "beidseitig beplankt",
            "total": 12.0,
            "measurementType": "AREA",
            "areaUnit": "m²",
            "areaEntries": [
                {"description": "Wand links", "length": 4.0, "width": 3.0, "includeDeduction": false}
            ],
            "projectId": 3,
            "userId": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Trockenbauwand Flur");
    assert_eq!(json["measurementType"], "AREA");
    assert_eq!(json["projectId"], 3);
}

#[tokio::test]
async fn create_measurement_infers_type_from_entries() {
    let app = common::build_test_app().await;

    // No explicit type tag; the populated room entry list decides.
    let response = post_json(
        app,
        "/api/measurement_record/create",
        serde_json::json!({
            "name": "Aushub Keller",
            "roomUnit": "cbm",
            "roomEntries": [
                {"description": "Grube", "length": 5.0, "width": 4.0, "height": 2.2}
            ],
            "projectId": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["measurementType"], "ROOM");
    // Omitted userId falls back to the default account.
    assert_eq!(json["userId"], 1);
}

#[tokio::test]
async fn create_measurement_with_empty_name_returns_400() {
    let app = common::build_test_app().await;
    let response = post_json(
        app,
        "/api/measurement_record/create",
        serde_json::json!({"name": "", "projectId": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_measurement_for_unknown_project_returns_404() {
    let app = common::build_test_app().await;
    let response = post_json(
        app,
        "/api/measurement_record/create",
        serde_json::json!({"name": "Irgendwas", "projectId": 12345}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

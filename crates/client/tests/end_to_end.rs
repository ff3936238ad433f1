//! End-to-end tests: the REST client against a live development backend.
//!
//! Serves the fixture dataset on an ephemeral port and drives the real
//! `reqwest`-backed client at it, so URL construction, query encoding,
//! and the tolerant response decoding are exercised over actual HTTP.

use std::sync::Arc;

use assert_matches::assert_matches;
use axum::Router;

use buildnote_api::state::AppState;
use buildnote_api::{config::ServerConfig, fixtures, routes};
use buildnote_client::{ApiError, BuildnoteApi, ClientConfig};
use buildnote_core::measurement::{AreaEntry, MeasurementDraft, MeasurementType};
use buildnote_core::model::Material;
use buildnote_store::Store;

const NOW: i64 = 1_787_702_400_000; // 2026-08-26T00:00:00Z

/// Start the backend on an ephemeral port and return a client aimed at it.
async fn start_backend() -> BuildnoteApi {
    let store = Store::new();
    fixtures::seed(&store).await;

    let state = AppState {
        store,
        config: Arc::new(ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
        }),
    };

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ClientConfig::with_base_url(format!("http://{addr}/api"));
    BuildnoteApi::new(&config).unwrap()
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_projects_decodes_wire_rows() {
    let api = start_backend().await;
    let projects = api.list_projects(NOW).await.unwrap();

    assert_eq!(projects.len(), 5);

    let alpha = &projects[0];
    assert_eq!(alpha.name, "Projekt Alpha");
    // zip and city arrive separately and get recombined.
    assert_eq!(alpha.city_zip, "12345 Musterstadt");

    // A row without a postal code keeps just the city.
    let delta = projects.iter().find(|p| p.name == "Projekt Delta").unwrap();
    assert_eq!(delta.city_zip, "Egelsbach");
}

// ---------------------------------------------------------------------------
// Materials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn material_round_trip_through_live_server() {
    let api = start_backend().await;

    let created = api
        .create_material(&Material {
            name: "Spachtelmasse".into(),
            number: 4,
            unit: "Eimer".into(),
            project_id: 1,
            price: Some(18.90),
        })
        .await
        .unwrap();
    assert_eq!(created.name, "Spachtelmasse");

    let materials = api.materials_for_project(1).await.unwrap();
    assert!(materials.iter().any(|m| m.name == "Spachtelmasse"));
}

#[tokio::test]
async fn create_material_for_unknown_project_is_a_status_error() {
    let api = start_backend().await;

    let result = api
        .create_material(&Material {
            name: "Kabelkanal".into(),
            number: 1,
            unit: "m".into(),
            project_id: 999,
            price: None,
        })
        .await;

    assert_matches!(result, Err(ApiError::Status { status: 404, .. }));
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_draft_and_read_it_back() {
    let api = start_backend().await;

    let mut draft = MeasurementDraft {
        name: "Wand Küche".into(),
        measurement_type: MeasurementType::Area,
        ..MeasurementDraft::default()
    };
    draft.add_area_entry(AreaEntry {
        description: "Nordwand".into(),
        length: Some(3.5),
        width: Some(2.6),
        include_deduction: false,
        deduction_length: None,
        deduction_width: None,
    });
    let record = draft.into_record(2, 1);

    api.create_measurement(&record).await.unwrap();

    let records = api.measurements_for_project(2).await.unwrap();
    let stored = records.iter().find(|r| r.name == "Wand Küche").unwrap();
    assert_eq!(stored.measurement_type, MeasurementType::Area);
    assert!((stored.total - 9.1).abs() < 1e-9);
    assert_eq!(stored.project_id, 2);
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn appointments_query_is_encoded_and_decoded() {
    let api = start_backend().await;

    let appointments = api
        .appointments_by_date_and_employee("2026-08-24", 1)
        .await
        .unwrap();

    assert_eq!(appointments.len(), 2);
    assert_eq!(appointments[0].name, "Baustellenbesprechung");
    assert_eq!(appointments[0].employee_ids, vec![1, 2]);

    let free_day = api
        .appointments_by_date_and_employee("2026-12-24", 1)
        .await
        .unwrap();
    assert!(free_day.is_empty());
}

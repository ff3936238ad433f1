pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /project                                 project list (GET)
///
/// /material/project/{id}                   materials for a project (GET)
/// /material                                create material (POST)
///
/// /measurement_record/getByProject/{id}    measurements for a project (GET)
/// /measurement_record/create               create measurement (POST)
///
/// /getByDateAndEmployee?date&employeeId    appointments for a day (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/project", get(handlers::project::list))
        .route(
            "/material/project/{id}",
            get(handlers::material::list_by_project),
        )
        .route("/material", post(handlers::material::create))
        .route(
            "/measurement_record/getByProject/{id}",
            get(handlers::measurement::list_by_project),
        )
        .route(
            "/measurement_record/create",
            post(handlers::measurement::create),
        )
        .route(
            "/getByDateAndEmployee",
            get(handlers::appointment::by_date_and_employee),
        )
}

//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use tracing::{debug, warn};

use super::AppState;
use super::types::{ErrorResponse, HealthResponse};
use crate::config::validate_workshop_totals;
use crate::equipment::{CalculatedEquipment, EquipmentRecord, calculate_equipment_values};
use crate::io::import::CalculationRequest;
use crate::load::{WorkshopResult, evaluate};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ApiError {
    let message = message.into();
    warn!(%message, "rejected request");
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}

fn rejected(rejection: JsonRejection) -> ApiError {
    bad_request(format!("invalid request body: {}", rejection.body_text()))
}

/// Calculates the workshop result for an equipment list.
///
/// `POST /api/calculate` → 200 + `WorkshopResult` JSON
/// Malformed body or invalid `workshopTotals` → 400 + `ErrorResponse`
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<WorkshopResult>, ApiError> {
    let Json(request) = body.map_err(rejected)?;

    let workshop = match request.workshop_totals {
        Some(totals) => {
            let errors = validate_workshop_totals(&totals, "workshopTotals");
            if !errors.is_empty() {
                let message = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(bad_request(message));
            }
            totals
        }
        None => state.workshop,
    };

    debug!(records = request.equipment_list.len(), "calculating workshop");
    let evaluation = evaluate(request.equipment_list, &workshop);
    Ok(Json(evaluation.result))
}

/// Derives the values of a single equipment record.
///
/// `POST /api/equipment` → 200 + record with `calculatedValues`
pub async fn equipment(
    body: Result<Json<EquipmentRecord>, JsonRejection>,
) -> Result<Json<CalculatedEquipment>, ApiError> {
    let Json(record) = body.map_err(rejected)?;
    Ok(Json(calculate_equipment_values(record)))
}

/// `GET /health` → 200 + `{"status": "ok"}`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

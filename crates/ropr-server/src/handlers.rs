//! Request handlers.
//!
//! Every handler is stateless: it builds the model inputs from the request,
//! calls the pure model and serializes the result.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use ropr_core::sensitivity::{break_even_effectiveness, sweep, SensitivityPoint, SweepSpec};
use ropr_core::{compute, RiskModelInputs, RiskModelOutputs, RoprError};
use ropr_dashboard::controls::CONTROLS_HEADER;
use ropr_dashboard::{ControlId, ControlSpec, Controls, Dashboard};

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Handler error.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl From<RoprError> for ApiError {
    fn from(err: RoprError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::new(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Widget catalogue.
#[derive(Serialize)]
pub struct ControlsResponse {
    header: &'static str,
    controls: Vec<ControlSpec>,
    defaults: Controls,
}

/// List the input widgets and their defaults.
pub async fn controls() -> Json<ControlsResponse> {
    Json(ControlsResponse {
        header: CONTROLS_HEADER,
        controls: ControlId::specs(),
        defaults: Controls::default(),
    })
}

/// Run the model on absolute inputs. No clamping is applied.
pub async fn compute_outputs(Json(inputs): Json<RiskModelInputs>) -> Json<RiskModelOutputs> {
    debug!(?inputs, "compute");
    Json(compute(inputs))
}

/// Dashboard from query-string controls; missing controls take their defaults.
pub async fn dashboard_query(Query(controls): Query<Controls>) -> Json<Dashboard> {
    debug!(?controls, "dashboard");
    Json(Dashboard::build(&controls))
}

/// Dashboard from a JSON body of controls.
pub async fn dashboard_body(Json(controls): Json<Controls>) -> Json<Dashboard> {
    debug!(?controls, "dashboard");
    Json(Dashboard::build(&controls))
}

/// Sensitivity request.
#[derive(Debug, Deserialize)]
pub struct SensitivityRequest {
    /// Base inputs; defaults to the widget defaults.
    #[serde(default = "default_inputs")]
    pub inputs: RiskModelInputs,
    /// Range to sweep.
    pub sweep: SweepSpec,
}

fn default_inputs() -> RiskModelInputs {
    Controls::default().to_inputs()
}

/// Sensitivity response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityResponse {
    sweep: SweepSpec,
    points: Vec<SensitivityPoint>,
    break_even_effectiveness: Option<f64>,
}

/// Sweep one percentage input.
pub async fn sensitivity(
    Json(request): Json<SensitivityRequest>,
) -> Result<Json<SensitivityResponse>, ApiError> {
    let points = sweep(request.inputs, &request.sweep)?;
    debug!(points = points.len(), axis = %request.sweep.axis, "sensitivity");

    Ok(Json(SensitivityResponse {
        sweep: request.sweep,
        points,
        break_even_effectiveness: break_even_effectiveness(&request.inputs),
    }))
}

use atelier_core::DataType;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension,
};
use serde_json::Value;

use super::{ApiError, AppState};
use crate::middleware::RequestId;

const TYPE_REQUIRED: &str = "Type field is required in the request body";

/// `POST /api/importData` with `{"type": "fabric" | "color" | "product"}`.
///
/// The body is parsed by hand rather than through `Json` so that a malformed
/// payload is reported as a 500 with `details`, not axum's default rejection.
pub(super) async fn import_data(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!(request_id = %req_id.0, error = %e, "unreadable import request body");
        ApiError::internal("Failed to process request", e.to_string())
    })?;

    let data_type = requested_type(&request).inspect_err(|e| {
        tracing::warn!(request_id = %req_id.0, error = %e.error, "rejected import request");
    })?;

    tracing::info!(
        request_id = %req_id.0,
        data_type = %data_type,
        records = state.datasets.len(data_type),
        "serving dataset"
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        state.datasets.body(data_type),
    )
        .into_response())
}

/// Missing, null and empty `type` all count as absent. Anything else that is
/// not a known name, including non-strings, is echoed back in the error.
fn requested_type(request: &Value) -> Result<DataType, ApiError> {
    match request.get("type") {
        None | Some(Value::Null) => Err(ApiError::bad_request(TYPE_REQUIRED)),
        Some(Value::String(raw)) if raw.is_empty() => Err(ApiError::bad_request(TYPE_REQUIRED)),
        Some(Value::String(raw)) => DataType::parse(raw)
            .ok_or_else(|| ApiError::bad_request(format!("Invalid type: {raw}"))),
        Some(other) => Err(ApiError::bad_request(format!("Invalid type: {other}"))),
    }
}

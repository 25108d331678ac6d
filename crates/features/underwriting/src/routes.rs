use crate::Underwriting;
use crate::models::{CoverageRequest, RequestSummary};
use axum::{Json, extract::State};
use qhub_domain::constants::UNDERWRITING_TAG;
use qhub_kernel::server::{ApiState, Envelope};
use tracing::error;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Confirmation returned by a successful intake.
pub const SAVED_MESSAGE: &str = "Request has been saved successfully.";
/// Confirmation returned by a successful listing.
pub const LOADED_MESSAGE: &str = "Request list has been loaded successfully.";

/// Routes of the underwriting slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(create_request_handler, list_requests_handler))
}

#[utoipa::path(
    post,
    path = "/api/requests",
    request_body = CoverageRequest,
    responses((status = OK, description = "Intake outcome envelope", body = Envelope)),
    tag = UNDERWRITING_TAG,
)]
async fn create_request_handler(
    State(state): State<ApiState>,
    Json(payload): Json<CoverageRequest>,
) -> Json<Envelope> {
    let envelope = match state.try_get_slice::<Underwriting>() {
        Ok(slice) => match slice.service.create_request(&payload).await {
            Ok(_) => Envelope::success(SAVED_MESSAGE),
            Err(e) => Envelope::failure(e.to_string()),
        },
        Err(e) => {
            error!("{e}");
            Envelope::failure(e.to_string())
        }
    };

    Json(envelope)
}

#[utoipa::path(
    get,
    path = "/api/requests",
    responses((
        status = OK,
        description = "Envelope carrying all stored requests with premium summaries",
        body = Envelope<Vec<RequestSummary>>,
    )),
    tag = UNDERWRITING_TAG,
)]
async fn list_requests_handler(State(state): State<ApiState>) -> Json<Envelope<Vec<RequestSummary>>> {
    let envelope = match state.try_get_slice::<Underwriting>() {
        Ok(slice) => match slice.service.get_requests().await {
            Ok(list) => Envelope::success_with(LOADED_MESSAGE, list),
            Err(e) => Envelope::failure(e.to_string()),
        },
        Err(e) => {
            error!("{e}");
            Envelope::failure(e.to_string())
        }
    };

    Json(envelope)
}

use crate::updater::UpdateOutcome;
use axum::http::header;
use axum::response::{IntoResponse, Response};

/// HTTP rendering of a successful update: status 200, the outcome's body and content type.
pub(super) struct UpdateRecordResult(pub UpdateOutcome);

impl IntoResponse for UpdateRecordResult {
    fn into_response(self) -> Response {
        let UpdateOutcome { body, content_type } = self.0;
        ([(header::CONTENT_TYPE, content_type)], body).into_response()
    }
}

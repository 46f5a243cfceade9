use axum::extract::State;
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::LogView;
use crate::error::ApiResult;

/// GET /log
pub async fn list_log_entries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<DataResponse<LogView>> {
    let log_entries = state.store.list_log_entries().await?;
    Ok(DataResponse::new(LogView { log_entries }))
}

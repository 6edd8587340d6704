//! HTTP route handlers for the viewer.
//!
//! Handlers are kept thin: records come from the store, views from
//! `tomo-core`, and every relationship web change goes through the shared
//! [`ViewController`](tomo_core::ViewController).

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use tomo_core::detail::{DetailOptions, DetailView};
use tomo_core::gallery::{self, GalleryQuery, GalleryView};
use tomo_core::personality::{PersonalityGroup, PERSONALITY_GROUPS};
use tomo_core::records::{Character, RecordError};
use tomo_core::web::TypeMask;
use tomo_core::{RenderOutcome, WebError};

use super::models::{ErrorBody, FilterRequest, GalleryParams, WebResponse};
use super::templates;
use super::AppState;

// =============================================================================
// Errors
// =============================================================================

/// Record errors mapped onto HTTP statuses.
pub struct ApiError(RecordError);

impl From<RecordError> for ApiError {
    fn from(e: RecordError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RecordError::NotFound(_) => StatusCode::NOT_FOUND,
            RecordError::Http { .. } | RecordError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(%status, "{}", self.0);
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Page Handlers
// =============================================================================

/// GET `/` - Gallery, detail modal and relationship web.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(templates::render_page(&state.asset_base()))
}

// =============================================================================
// Gallery and Detail
// =============================================================================

/// GET `/api/miis` - Filtered gallery.
///
/// Query parameters:
/// - `q`: nickname search term
/// - `personality`: subtype value such as `easygoing dreamer`, or `all`
pub async fn api_miis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GalleryParams>,
) -> Result<Json<GalleryView>, ApiError> {
    let summaries = state.store.summaries().await?;
    let query = GalleryQuery::new(params.q, params.personality);
    Ok(Json(gallery::filter(
        &summaries,
        &query,
        &state.config.data.face_image,
        &state.asset_base(),
    )))
}

/// GET `/api/miis/{index}` - Detail view of one character.
pub async fn api_mii(
    State(state): State<Arc<AppState>>,
    Path(index): Path<i64>,
) -> Result<Json<DetailView>, ApiError> {
    let summaries = state.store.summaries().await?;
    let summary = summaries
        .into_iter()
        .find(|s| s.index == index)
        .ok_or_else(|| RecordError::NotFound(index.to_string()))?;
    let detail = state.store.detail(&summary).await?;

    let character = Character { summary, detail };
    let asset_base = state.asset_base();
    let data = &state.config.data;
    let options = DetailOptions {
        face_image: &data.face_image,
        body_image: &data.body_image,
        asset_prefix: &asset_base,
        top: state.config.detail.top_relationships,
    };
    Ok(Json(DetailView::new(&character, options)))
}

/// GET `/api/personalities` - Personality groups for the filter dropdown.
pub async fn api_personalities() -> Json<&'static [PersonalityGroup]> {
    Json(PERSONALITY_GROUPS)
}

// =============================================================================
// Relationship Web
// =============================================================================

/// GET `/api/web` - Current relationship web, if activated.
pub async fn api_web(State(state): State<Arc<AppState>>) -> Json<WebResponse> {
    let controller = state.controller.read().await;
    let response = match controller.context() {
        Some(context) => WebResponse::new(context.outcome.clone(), &context.mask),
        None => WebResponse::new(
            RenderOutcome::failed(WebError::NotActivated.to_string()),
            &TypeMask::all(),
        ),
    };
    Json(response)
}

/// POST `/api/web/activate` - Reload records and rebuild the web.
pub async fn api_web_activate(State(state): State<Arc<AppState>>) -> Json<WebResponse> {
    let mut controller = state.controller.write().await;
    let outcome = controller.activate(&state.store).await;
    Json(WebResponse::new(outcome, &TypeMask::all()))
}

/// POST `/api/web/filter` - Apply the enabled relationship types.
///
/// Request body: `{"types": [4, 2, 12]}`
pub async fn api_web_filter(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FilterRequest>,
) -> Json<WebResponse> {
    let mask = request.mask();
    let mut controller = state.controller.write().await;
    let outcome = controller.on_filter_changed(mask.clone());
    Json(WebResponse::new(outcome, &mask))
}

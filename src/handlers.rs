use crate::errors::AppError;
use crate::models::{ChannelQuery, ChannelReport, VideoQuery, VideoReport};
use crate::reference::{channel_input, resolve};
use crate::report::{channel_report, video_report};
use crate::session::Session;
use crate::state::AppState;
use crate::ui::{render_page, Page, NOT_FOUND_HTML};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(session: Session, State(state): State<AppState>) -> Html<String> {
    Html(render_page(Page::Home, &session, &state.config.sign_out_url))
}

pub async fn channel_page(session: Session, State(state): State<AppState>) -> Html<String> {
    Html(render_page(Page::Channel, &session, &state.config.sign_out_url))
}

pub async fn video_page(session: Session, State(state): State<AppState>) -> Html<String> {
    Html(render_page(Page::Video, &session, &state.config.sign_out_url))
}

pub async fn lookup_channel(
    _session: Session,
    State(state): State<AppState>,
    Query(query): Query<ChannelQuery>,
) -> Result<Json<ChannelReport>, AppError> {
    let input = channel_input(&query.channel_input)?;
    info!(channel = input, "channel lookup");

    let insights = state.backend.channel(input).await?;
    Ok(Json(channel_report(insights)?))
}

pub async fn lookup_video(
    _session: Session,
    State(state): State<AppState>,
    Query(query): Query<VideoQuery>,
) -> Result<Json<VideoReport>, AppError> {
    let id = resolve(&query.video)?;
    info!(video = %id, "video lookup");

    let insights = state.backend.video(&id).await?;
    Ok(Json(video_report(&id, insights)))
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML))
}

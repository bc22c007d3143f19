use crate::day::DayKey;
use crate::deriver::derive_daily_state;
use crate::errors::AppError;
use crate::models::{AppState, DailyCatResponse, ShareResponse, VisitRequest};
use crate::state::SharedState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use tracing::info;

pub async fn index() -> Html<String> {
    Html(render_index(DayKey::today()))
}

pub async fn visit(
    State(state): State<SharedState>,
    Json(payload): Json<VisitRequest>,
) -> Result<Json<DailyCatResponse>, AppError> {
    let session_id = payload.session_id.trim();
    if session_id.is_empty() {
        return Err(AppError::bad_request("session_id must not be empty"));
    }

    let today = DayKey::today();
    let store = state.store.lock().await;
    let prior = store.load().await;
    let next = derive_daily_state(prior.as_ref(), today, session_id, state.picker.as_ref()).await;
    store.save(&next).await?;

    info!(%today, streak = next.streak, visits = next.total_visits, "recorded visit");
    Ok(Json(to_response(&next)))
}

pub async fn get_today(State(state): State<SharedState>) -> Result<Json<DailyCatResponse>, AppError> {
    let store = state.store.lock().await;
    let current = store.load().await.unwrap_or_default();
    Ok(Json(to_response(&current)))
}

pub async fn toggle_favorite(
    State(state): State<SharedState>,
) -> Result<Json<DailyCatResponse>, AppError> {
    let updated = apply_toggle(&state).await?;
    Ok(Json(to_response(&updated)))
}

pub async fn toggle_favorite_form(State(state): State<SharedState>) -> Result<Redirect, AppError> {
    apply_toggle(&state).await?;
    Ok(Redirect::to("/"))
}

pub async fn share(State(state): State<SharedState>) -> Result<Json<ShareResponse>, AppError> {
    let store = state.store.lock().await;
    let current = store.load().await.unwrap_or_default();
    let cat = current
        .current_cat
        .ok_or_else(|| AppError::conflict("no cat has been chosen yet"))?;

    Ok(Json(ShareResponse {
        title: format!("Daily Cat: {}", cat.display_name),
        text: format!("Meet today's cat, {}! {}", cat.display_name, cat.fact),
        url: cat.image_url,
    }))
}

async fn apply_toggle(state: &SharedState) -> Result<AppState, AppError> {
    let store = state.store.lock().await;
    let mut current = store.load().await.unwrap_or_default();
    let favorite = current
        .toggle_favorite()
        .ok_or_else(|| AppError::conflict("no cat has been chosen yet"))?;

    store.save(&current).await?;
    info!(favorite, count = current.favorite_ids.len(), "toggled favorite");
    Ok(current)
}

/// Labels the response with the day its cat belongs to, falling back to today.
fn to_response(state: &AppState) -> DailyCatResponse {
    let day = state.daily_cat_date.unwrap_or_else(DayKey::today);
    DailyCatResponse {
        date: day.to_string(),
        date_display: day.long_display(),
        streak: state.streak,
        total_visits: state.total_visits,
        favorite_count: state.favorite_ids.len(),
        is_favorite: state.is_favorite(),
        cat: state.current_cat.clone(),
    }
}

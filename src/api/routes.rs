//! # Route Handlers
//!
//! The five operations of the API surface. Each handler is a single-pass
//! request → store → response pipeline: validate the input, run the store
//! operations, shape the result.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::Utc;
use uuid::Uuid;

use crate::model::NewExercise;
use crate::store::{DynStore, LogQuery};

use super::errors::{ApiError, ApiResult};
use super::request::{
    non_empty, parse_date, parse_duration, parse_limit, AddExerciseForm, CreateUserForm, LogParams,
};
use super::response::{ExerciseResponse, LogResponse, UserResponse};

/// State shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
}

impl AppState {
    pub fn new(store: DynStore) -> Self {
        Self { store }
    }
}

/// Builds the `/api` router.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route("/users/:id/exercises", post(add_exercise))
        .route("/users/:id/logs", get(get_log))
        .with_state(state)
}

/// Resolves a path id to a user.
///
/// A syntactically invalid id cannot match any user, so it reports the
/// same way as an unknown one.
async fn lookup_user(state: &AppState, id: &str) -> ApiResult<crate::model::User> {
    let id: Uuid = id.parse().map_err(|_| ApiError::UserNotFound)?;
    state
        .store
        .find_user(id)
        .await?
        .ok_or(ApiError::UserNotFound)
}

/// `POST /api/users`
async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> ApiResult<Json<UserResponse>> {
    let username = non_empty(form.username).ok_or(ApiError::MissingUsername)?;

    let user = state.store.insert_user(&username).await?;
    Ok(Json(user.into()))
}

/// `GET /api/users`
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.store.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// `POST /api/users/:id/exercises`
async fn add_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<AddExerciseForm>,
) -> ApiResult<Json<ExerciseResponse>> {
    // Field validation comes before the user lookup; missing fields win
    // over an unknown user.
    let description =
        non_empty(form.description).ok_or(ApiError::MissingExerciseFields)?;
    let duration_raw = non_empty(form.duration).ok_or(ApiError::MissingExerciseFields)?;

    let duration = parse_duration(&duration_raw)?;
    let date = match non_empty(form.date) {
        Some(raw) => parse_date(&raw)?,
        None => Utc::now().date_naive(),
    };

    let user = lookup_user(&state, &id).await?;

    let exercise = state
        .store
        .insert_exercise(NewExercise {
            user_id: user.id,
            username: user.username.clone(),
            description,
            duration,
            date,
        })
        .await?;

    Ok(Json(ExerciseResponse::new(&user, &exercise)))
}

/// `GET /api/users/:id/logs`
async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LogParams>,
) -> ApiResult<Json<LogResponse>> {
    let user = lookup_user(&state, &id).await?;

    let mut query = LogQuery::for_user(user.id);
    if let Some(raw) = non_empty(params.from) {
        query.from = Some(parse_date(&raw)?);
    }
    if let Some(raw) = non_empty(params.to) {
        query.to = Some(parse_date(&raw)?);
    }
    if let Some(raw) = non_empty(params.limit) {
        query.limit = Some(parse_limit(&raw)?);
    }

    let exercises = state.store.find_exercises(&query).await?;
    Ok(Json(LogResponse::new(&user, exercises)))
}

//! Axum route handlers for the quotebook API.

use std::sync::Arc;

use axum::{
    extract::{
        path::ErrorKind,
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::{SecondsFormat, Utc};
use quotebook_core::{geometry, Measurements, Quote, QuoteStore};
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Store = Arc<QuoteStore>;

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub ok: bool,
    pub msg: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    pub current_time: String,
}

/// Body of `POST /quotebook/quote/new/`.
///
/// Every field is optional at the decoding stage so that a missing field, a
/// `null` and an empty string are all rejected the same way by the store.
#[derive(Debug, Default, Deserialize)]
pub struct NewQuoteBody {
    pub category: Option<String>,
    pub quote: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuoteResponse {
    pub message: String,
    pub new_quote: Quote,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router around the given quote store.
pub fn create_router(store: Store) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/time", get(current_time))
        .route("/math/circle/{r}", get(circle))
        .route("/math/rectangle/{width}/{height}", get(rectangle))
        .route("/quotebook/categories", get(list_categories))
        .route("/quotebook/quote/{category}", get(random_quote))
        .route("/quotebook/quote/new", get(random_quote_new).post(add_quote))
        .route("/quotebook/quote/new/", get(random_quote_new).post(add_quote))
        .with_state(store)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /`: fixed greeting.
pub async fn root() -> Json<Greeting> {
    Json(Greeting { ok: true, msg: "Hello from the quotebook gateway!", name: env!("CARGO_PKG_NAME") })
}

/// `GET /health`: liveness probe, plain text.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "healthy")
}

/// `GET /api/time`: current UTC time in ISO-8601 with millisecond precision.
pub async fn current_time() -> Json<TimeResponse> {
    Json(TimeResponse { current_time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true) })
}

/// `GET /math/circle/:r`: area and circumference of a circle.
///
/// # Errors
/// Returns [`GatewayError::InvalidNumeric`] if `r` is not a number.
pub async fn circle(
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Measurements>, GatewayError> {
    let Path(r) = path.map_err(|e| numeric_rejection(&e, "radius"))?;
    let radius = geometry::parse_dimension("radius", &r)?;
    Ok(Json(geometry::circle(radius)))
}

/// `GET /math/rectangle/:width/:height`: area and perimeter of a rectangle.
///
/// # Errors
/// Returns [`GatewayError::InvalidNumeric`] if either dimension is not a number.
pub async fn rectangle(
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Measurements>, GatewayError> {
    let Path((width, height)) = path.map_err(|e| numeric_rejection(&e, "dimension"))?;
    let width = geometry::parse_dimension("width", &width)?;
    let height = geometry::parse_dimension("height", &height)?;
    Ok(Json(geometry::rectangle(width, height)))
}

/// `GET /quotebook/categories`: plain-text listing of the category names.
pub async fn list_categories(State(store): State<Store>) -> impl IntoResponse {
    let listing = store
        .list_categories()
        .iter()
        .map(|c| format!("A possible category is {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    (StatusCode::OK, listing)
}

/// `GET /quotebook/quote/:category`: one random quote from the category.
///
/// # Errors
/// Returns [`GatewayError::UnknownCategory`] for a name outside the fixed set,
/// or [`GatewayError::EmptyCategory`] if the category holds no quotes.
pub async fn random_quote(
    State(store): State<Store>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Quote>, GatewayError> {
    let Path(category) = path.map_err(|e| GatewayError::UnknownCategory(e.body_text()))?;
    let quote = store.random_quote(&category)?;
    Ok(Json(quote))
}

/// `GET /quotebook/quote/new`: `new` is not a category.
///
/// The static submission route shadows the `:category` route for this name,
/// so it is answered here the way any other unknown name would be.
///
/// # Errors
/// Always returns [`GatewayError::UnknownCategory`].
pub async fn random_quote_new() -> Result<Json<Quote>, GatewayError> {
    Err(GatewayError::UnknownCategory("new".to_owned()))
}

/// `POST /quotebook/quote/new/`: add a quote to a category.
///
/// # Errors
/// - [`GatewayError::InvalidInput`] if the body cannot be decoded or any
///   field is missing or empty.
/// - [`GatewayError::CategoryNotFound`] if the category is not known.
/// - [`GatewayError::DuplicateQuote`] if the exact quote already exists.
pub async fn add_quote(
    State(store): State<Store>,
    payload: Result<Json<NewQuoteBody>, JsonRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    let Json(body) = payload.map_err(|e| GatewayError::InvalidInput { reason: e.body_text() })?;

    let new_quote = store
        .add_quote(body.category.as_deref(), body.quote.as_deref(), body.author.as_deref())
        .map_err(GatewayError::on_write)?;

    let category = body.category.unwrap_or_default();
    Ok((
        StatusCode::CREATED,
        Json(NewQuoteResponse { message: format!("Quote added successfully to {category}."), new_quote }),
    ))
}

// ── Extractor rejections ─────────────────────────────────────────────────────

/// Report a path segment that could not be extracted (e.g. invalid UTF-8) as
/// a non-numeric parameter, naming the offending key when axum reports it.
fn numeric_rejection(rejection: &PathRejection, fallback: &str) -> GatewayError {
    let param = match rejection {
        PathRejection::FailedToDeserializePathParams(e) => match e.kind() {
            ErrorKind::InvalidUtf8InPathParam { key, .. } => key.clone(),
            _ => fallback.to_owned(),
        },
        _ => fallback.to_owned(),
    };
    GatewayError::InvalidNumeric { param, value: rejection.body_text() }
}

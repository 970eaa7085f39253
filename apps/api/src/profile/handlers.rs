//! Axum route handlers for the profile API.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::profile::generator::{build_profile, regenerate_headline};
use crate::profile::models::ProfileBundle;
use crate::profile::validation::sanitize_pair;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Shared by the JSON body and the query string. Fields are optional so a
/// missing value gets the same length message as an empty one.
#[derive(Debug, Deserialize)]
pub struct BusinessQuery {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HeadlineResponse {
    pub headline: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/business-data
///
/// Classifies the business and returns a freshly generated profile bundle.
pub async fn handle_business_data(
    payload: Result<Json<BusinessQuery>, JsonRejection>,
) -> Result<Json<ProfileBundle>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let (name, location) = sanitize_pair(request.name.as_deref(), request.location.as_deref())?;

    let bundle = build_profile(&mut rand::thread_rng(), &name, &location)?;

    Ok(Json(bundle))
}

/// GET /api/regenerate-headline?name=&location=
///
/// Rerolls only the headline. Independent of any earlier bundle.
pub async fn handle_regenerate_headline(
    query: Result<Query<BusinessQuery>, QueryRejection>,
) -> Result<Json<HeadlineResponse>, AppError> {
    let Query(request) = query.map_err(|e| AppError::Validation(e.body_text()))?;
    let (name, location) = sanitize_pair(request.name.as_deref(), request.location.as_deref())?;

    let headline = regenerate_headline(&mut rand::thread_rng(), &name, &location)?;

    Ok(Json(HeadlineResponse { headline }))
}

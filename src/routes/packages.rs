//! Package price list endpoint

use axum::{extract::State, Json};

use crate::pricing::responses::PackageResponse;
use crate::AppState;

/// List every package with its seasonal price
pub async fn list(State(state): State<AppState>) -> Json<Vec<PackageResponse>> {
    let packages = state
        .catalog
        .packages()
        .iter()
        .map(PackageResponse::from)
        .collect();

    Json(packages)
}

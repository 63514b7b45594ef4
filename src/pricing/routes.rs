//! HTTP routes for the pricing API.

use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::models::FormState;
use crate::AppState;

use super::calculators::estimate;
use super::requests::EstimateRequest;
use super::responses::EstimateResponse;

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new().route("/estimate", post(estimate_booking))
}

/// Estimate a booking from raw form values.
///
/// Field contents never fail the request; only a body that is not a JSON
/// object is rejected.
async fn estimate_booking(
    State(state): State<AppState>,
    body: std::result::Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimateResponse>> {
    let Json(req) = body?;
    let form = FormState::from(req);
    let result = estimate(&state.catalog, &form);

    tracing::debug!(
        package = %form.package_id,
        guests = %form.guests,
        total = %result.total,
        is_valid = result.is_valid,
        "Estimated booking"
    );

    Ok(Json(EstimateResponse::from(result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router().with_state(AppState::for_tests())
    }

    async fn post_json(body: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::post("/estimate")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_estimate_full_booking() {
        let (status, json) = post_json(
            r#"{
                "name": "Ada",
                "email": "ada@example.com",
                "start_date": "2026-06-01",
                "end_date": "2026-06-08",
                "package_id": "beach",
                "guests": 3,
                "promo_code": " EarlyBird "
            }"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["display"], "$2700.00");
        assert_eq!(json["total"]["currency"], "USD");
        assert_eq!(json["is_valid"], true);
    }

    #[tokio::test]
    async fn test_estimate_empty_form() {
        let (status, json) = post_json("{}").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["display"], "$0.00");
        assert_eq!(json["is_valid"], false);
    }

    #[tokio::test]
    async fn test_estimate_odd_field_values_degrade() {
        let bodies = [
            r#"{"package_id":"beach","guests":2.5,"promo_code":null}"#,
            r#"{"package_id":"beach","guests":null}"#,
            r#"{"package_id":"beach","guests":true}"#,
            r#"{"package_id":"beach","guests":"2","promo_code":null}"#,
        ];

        for body in bodies {
            let (status, json) = post_json(body).await;
            assert_eq!(status, StatusCode::OK, "body {}", body);
            assert_eq!(json["is_valid"], false, "body {}", body);
        }

        let (_, json) = post_json(bodies[0]).await;
        assert_eq!(json["display"], "$0.00");

        let (_, json) = post_json(bodies[3]).await;
        assert_eq!(json["display"], "$2500.00");
    }

    #[tokio::test]
    async fn test_estimate_rejects_malformed_json() {
        let (status, json) = post_json("{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error_type"], "invalid_json");
    }
}

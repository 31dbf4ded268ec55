use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::user_controller::UserController;
use crate::dto::auth_dto::{LoginRequest, RegisterRequest};
use crate::dto::response::Response;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    controller.register(request).await
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    controller.login(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::routes::tests::test_state;

    #[tokio::test]
    async fn test_register_rejects_invalid_email_with_envelope() {
        let state = test_state();
        let app = create_auth_router().with_state(state);

        let body = serde_json::json!({
            "name": "Ana",
            "email": "not-an-email",
            "phoneNumber": "5551234567",
            "password": "secret123"
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/register")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let envelope: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(envelope["statusCode"], 400);
        assert!(envelope["message"].is_string());
    }
}

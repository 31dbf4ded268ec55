use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::CreateBookingRequest;
use crate::dto::response::Response;
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/all", get(get_all_bookings))
        .layer(middleware::from_fn(admin_only_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let user_routes = Router::new()
        .route("/book-vehicle/:vehicle_id/:user_id", post(save_booking))
        .route("/cancel/:booking_id", delete(cancel_booking))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    let public_routes = Router::new().route(
        "/get-by-confirmation-code/:confirmation_code",
        get(get_booking_by_confirmation_code),
    );

    admin_routes.merge(user_routes).merge(public_routes)
}

async fn save_booking(
    State(state): State<AppState>,
    Path((vehicle_id, user_id)): Path<(i64, i64)>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Response, AppError> {
    let controller = BookingController::new(state.pool.clone());
    controller.create(vehicle_id, user_id, request).await
}

async fn get_all_bookings(State(state): State<AppState>) -> Result<Response, AppError> {
    let controller = BookingController::new(state.pool.clone());
    controller.get_all().await
}

async fn get_booking_by_confirmation_code(
    State(state): State<AppState>,
    Path(confirmation_code): Path<String>,
) -> Result<Response, AppError> {
    let controller = BookingController::new(state.pool.clone());
    controller.find_by_confirmation_code(&confirmation_code).await
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Response, AppError> {
    let controller = BookingController::new(state.pool.clone());
    controller.cancel(booking_id).await
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::routes::tests::test_state;

    #[tokio::test]
    async fn test_list_all_requires_token() {
        let state = test_state();
        let app = create_booking_router(state.clone()).with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/all").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_book_vehicle_requires_token() {
        let state = test_state();
        let app = create_booking_router(state.clone()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/book-vehicle/1/1")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_cancel_requires_token() {
        let state = test_state();
        let app = create_booking_router(state.clone()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/cancel/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

use axum::{
    extract::{Extension, Path, State},
    middleware,
    routing::{delete, get},
    Router,
};

use crate::controllers::user_controller::UserController;
use crate::dto::response::Response;
use crate::middleware::auth::{admin_only_middleware, auth_middleware, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/all", get(get_all_users))
        .route("/delete/:user_id", delete(delete_user))
        .layer(middleware::from_fn(admin_only_middleware))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    let user_routes = Router::new()
        .route("/get-by-id/:user_id", get(get_user_by_id))
        .route("/get-logged-in-profile-info", get(get_logged_in_profile_info))
        .route("/get-user-bookings/:user_id", get(get_user_bookings))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    admin_routes.merge(user_routes)
}

async fn get_all_users(State(state): State<AppState>) -> Result<Response, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    controller.get_all().await
}

async fn get_user_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    controller.get_by_id(user_id).await
}

async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    controller.delete(user_id).await
}

/// Perfil del usuario dueño del token
async fn get_logged_in_profile_info(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Response, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    controller.get_my_info(user.user_id).await
}

async fn get_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Response, AppError> {
    let controller = UserController::new(state.pool.clone(), &state.config);
    controller.get_booking_history(user_id).await
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::routes::tests::test_state;

    #[tokio::test]
    async fn test_list_users_requires_token() {
        let state = test_state();
        let app = create_user_router(state.clone()).with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/all").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_profile_info_requires_token() {
        let state = test_state();
        let app = create_user_router(state.clone()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/get-logged-in-profile-info")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

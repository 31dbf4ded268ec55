use axum::{
    extract::{Multipart, Path, Query, State},
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::response::Response;
use crate::dto::vehicle_dto::{AvailabilityQuery, UploadedPhoto, VehicleForm};
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/add", post(add_vehicle))
        .route("/update/:vehicle_id", put(update_vehicle))
        .route("/delete/:vehicle_id", delete(delete_vehicle))
        .layer(middleware::from_fn(admin_only_middleware))
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    let public_routes = Router::new()
        .route("/all", get(get_all_vehicles))
        .route("/types", get(get_vehicle_types))
        .route("/vehicle-by-id/:vehicle_id", get(get_vehicle_by_id))
        .route("/all-available-vehicles", get(get_all_available_vehicles))
        .route(
            "/available-vehicles-by-date-and-type",
            get(get_available_vehicles_by_date_and_type),
        );

    admin_routes.merge(public_routes)
}

/// Extraer los campos del formulario multipart de vehículo
async fn parse_vehicle_form(mut multipart: Multipart) -> Result<VehicleForm, AppError> {
    let mut form = VehicleForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Formulario multipart inválido: {}", e)))?
    {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("photo") => {
                let filename = field.file_name().unwrap_or("photo").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Error leyendo la foto: {}", e)))?
                    .to_vec();

                if !bytes.is_empty() {
                    form.photo = Some(UploadedPhoto {
                        filename,
                        content_type,
                        bytes,
                    });
                }
            }
            Some("vehicleType") => {
                form.vehicle_type = Some(read_text_field(field).await?);
            }
            Some("vehiclePrice") => {
                let text = read_text_field(field).await?;
                let price = text.trim().parse().map_err(|_| {
                    AppError::BadRequest("vehiclePrice must be a valid number".to_string())
                })?;
                form.vehicle_price = Some(price);
            }
            Some("vehicleDescription") => {
                form.vehicle_description = Some(read_text_field(field).await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Campo de formulario inválido: {}", e)))
}

async fn add_vehicle(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = parse_vehicle_form(multipart).await?;
    let controller =
        VehicleController::new(state.pool.clone(), state.http_client.clone(), &state.config);
    controller.add(form).await
}

async fn get_all_vehicles(State(state): State<AppState>) -> Result<Response, AppError> {
    let controller =
        VehicleController::new(state.pool.clone(), state.http_client.clone(), &state.config);
    controller.get_all().await
}

/// Lista plana de tipos de vehículo, sin envelope
async fn get_vehicle_types(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let controller =
        VehicleController::new(state.pool.clone(), state.http_client.clone(), &state.config);
    let types = controller.get_types().await?;
    Ok(Json(types))
}

async fn get_vehicle_by_id(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<Response, AppError> {
    let controller =
        VehicleController::new(state.pool.clone(), state.http_client.clone(), &state.config);
    controller.get_by_id(vehicle_id).await
}

async fn get_all_available_vehicles(State(state): State<AppState>) -> Result<Response, AppError> {
    let controller =
        VehicleController::new(state.pool.clone(), state.http_client.clone(), &state.config);
    controller.get_all_available().await
}

async fn get_available_vehicles_by_date_and_type(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Response, AppError> {
    let controller =
        VehicleController::new(state.pool.clone(), state.http_client.clone(), &state.config);
    controller.get_available_by_date_and_type(query).await
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let form = parse_vehicle_form(multipart).await?;
    let controller =
        VehicleController::new(state.pool.clone(), state.http_client.clone(), &state.config);
    controller.update(vehicle_id, form).await
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(vehicle_id): Path<i64>,
) -> Result<Response, AppError> {
    let controller =
        VehicleController::new(state.pool.clone(), state.http_client.clone(), &state.config);
    controller.delete(vehicle_id).await
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::routes::tests::test_state;

    #[tokio::test]
    async fn test_add_vehicle_requires_token() {
        let state = test_state();
        let app = create_vehicle_router(state.clone()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/add")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_availability_search_with_missing_params_returns_400() {
        let state = test_state();
        let app = create_vehicle_router(state.clone()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/available-vehicles-by-date-and-type?vehicleType=SUV")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_vehicle_requires_token() {
        let state = test_state();
        let app = create_vehicle_router(state.clone()).with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/delete/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

//! Registro, login y administración de usuarios

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{LoginRequest, RegisterRequest};
use crate::dto::booking_dto::BookingDto;
use crate::dto::response::Response;
use crate::dto::user_dto::UserDto;
use crate::dto::vehicle_dto::VehicleDto;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};

const DEFAULT_ROLE: &str = "USER";

pub struct UserController {
    users: UserRepository,
    bookings: BookingRepository,
    vehicles: VehicleRepository,
    jwt_config: JwtConfig,
}

impl UserController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
            jwt_config: JwtConfig::from(config),
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<Response, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let role = match request.role {
            Some(role) if !role.trim().is_empty() => role,
            _ => DEFAULT_ROLE.to_string(),
        };

        if self.users.exists_by_email(&request.email).await? {
            return Err(AppError::BadRequest(format!(
                "{} Already Exists",
                request.email
            )));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hasheando password: {}", e)))?;

        let user = self
            .users
            .create(
                request.name,
                request.email,
                request.phone_number,
                password_hash,
                role,
            )
            .await?;

        Ok(Response::success("Successful").with_user(UserDto::from(user)))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<Response, AppError> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User Not Found".to_string()))?;

        let password_valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verificando password: {}", e)))?;

        if !password_valid {
            return Err(AppError::Unauthorized("Invalid Credentials".to_string()));
        }

        let token = generate_token(user.id, &user.role, &self.jwt_config)?;

        Ok(Response::success("Successful").with_token(token, user.role, "7 Days"))
    }

    pub async fn get_all(&self) -> Result<Response, AppError> {
        let users = self.users.find_all().await?;
        let user_list = users.into_iter().map(UserDto::from).collect();

        Ok(Response::success("Successful").with_user_list(user_list))
    }

    pub async fn get_by_id(&self, user_id: i64) -> Result<Response, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User Not Found".to_string()))?;

        Ok(Response::success("Successful").with_user(UserDto::from(user)))
    }

    pub async fn delete(&self, user_id: i64) -> Result<Response, AppError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User Not Found".to_string()))?;

        self.users.delete(user_id).await?;

        Ok(Response::success("Successful"))
    }

    /// Perfil del usuario autenticado
    pub async fn get_my_info(&self, user_id: i64) -> Result<Response, AppError> {
        self.get_by_id(user_id).await
    }

    /// Usuario con su historial de reservas; cada reserva incluye el
    /// vehículo reservado
    pub async fn get_booking_history(&self, user_id: i64) -> Result<Response, AppError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User Not Found".to_string()))?;

        let bookings = self.bookings.find_by_user(user.id).await?;

        let mut booking_dtos = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let mut dto = BookingDto::from(booking.clone());
            if let Some(vehicle) = self.vehicles.find_by_id(booking.vehicle_id).await? {
                dto = dto.with_vehicle(VehicleDto::from(vehicle));
            }
            booking_dtos.push(dto);
        }

        let user_dto = UserDto::from(user).with_bookings(booking_dtos);

        Ok(Response::success("Successful").with_user(user_dto))
    }
}

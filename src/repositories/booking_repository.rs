use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::booking::Booking;
use crate::utils::errors::{is_unique_violation, AppError};

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar una reserva. Una colisión del código de confirmación
    /// (constraint UNIQUE) se reporta como Conflict para que el cliente
    /// pueda reintentar; nunca se pisa una reserva existente.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_id: i64,
        user_id: i64,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        num_of_passengers: i32,
        num_of_miles: i32,
        booking_confirmation_code: String,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (check_in_date, check_out_date, num_of_passengers, num_of_miles,
                 booking_confirmation_code, user_id, vehicle_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(check_in_date)
        .bind(check_out_date)
        .bind(num_of_passengers)
        .bind(num_of_miles)
        .bind(booking_confirmation_code)
        .bind(user_id)
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(
                    "Booking confirmation code already in use, please retry".to_string(),
                )
            } else {
                AppError::Database(e)
            }
        })?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(booking)
    }

    pub async fn find_by_confirmation_code(
        &self,
        confirmation_code: &str,
    ) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE booking_confirmation_code = $1",
        )
        .bind(confirmation_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(booking)
    }

    pub async fn find_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<Booking>, AppError> {
        let bookings =
            sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE vehicle_id = $1")
                .bind(vehicle_id)
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(bookings)
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(bookings)
    }

    /// Todas las reservas, las más recientes primero
    pub async fn find_all(&self) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(bookings)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_type: String,
        vehicle_price: Decimal,
        vehicle_photo_url: String,
        vehicle_description: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (vehicle_type, vehicle_price, vehicle_photo_url, vehicle_description)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(vehicle_type)
        .bind(vehicle_price)
        .bind(vehicle_photo_url)
        .bind(vehicle_description)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(vehicle)
    }

    /// Todos los vehículos, los más recientes primero
    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(vehicles)
    }

    pub async fn find_distinct_types(&self) -> Result<Vec<String>, AppError> {
        let types: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT vehicle_type FROM vehicles")
                .fetch_all(&self.pool)
                .await
                .map_err(AppError::Database)?;

        Ok(types.into_iter().map(|(t,)| t).collect())
    }

    /// Vehículos del tipo pedido sin ninguna reserva que pise el rango de
    /// fechas (sub-query de exclusión sobre bookings)
    pub async fn find_available_by_dates_and_type(
        &self,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        vehicle_type: &str,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles v
            WHERE v.vehicle_type LIKE '%' || $3 || '%'
            AND v.id NOT IN (
                SELECT bk.vehicle_id FROM bookings bk
                WHERE bk.check_in_date <= $2 AND bk.check_out_date >= $1
            )
            ORDER BY v.id DESC
            "#,
        )
        .bind(check_in_date)
        .bind(check_out_date)
        .bind(vehicle_type)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(vehicles)
    }

    /// Vehículos sin ninguna reserva registrada
    pub async fn find_all_without_bookings(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles v
            WHERE v.id NOT IN (SELECT b.vehicle_id FROM bookings b)
            ORDER BY v.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(vehicles)
    }

    /// Actualización parcial: los campos en None conservan su valor actual
    pub async fn update(
        &self,
        id: i64,
        vehicle_type: Option<String>,
        vehicle_price: Option<Decimal>,
        vehicle_photo_url: Option<String>,
        vehicle_description: Option<String>,
    ) -> Result<Vehicle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle Not Found".to_string()))?;

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET vehicle_type = $2, vehicle_price = $3, vehicle_photo_url = $4, vehicle_description = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_type.unwrap_or(current.vehicle_type))
        .bind(vehicle_price.unwrap_or(current.vehicle_price))
        .bind(vehicle_photo_url.unwrap_or(current.vehicle_photo_url))
        .bind(vehicle_description.or(current.vehicle_description))
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(())
    }
}

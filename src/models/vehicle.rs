//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle que mapea exactamente a la tabla
//! `vehicles`. Un vehículo puede existir sin reservas.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub vehicle_type: String,
    pub vehicle_price: Decimal,
    pub vehicle_photo_url: String,
    pub vehicle_description: Option<String>,
}

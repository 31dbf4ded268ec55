//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking que mapea exactamente a la tabla
//! `bookings`. El código de confirmación es UNIQUE y se asigna una sola vez
//! al crear la reserva; las reservas nunca se mutan, solo se cancelan
//! (borrado físico).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Booking principal - mapea exactamente a la tabla bookings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_of_passengers: i32,
    pub num_of_miles: i32,
    pub booking_confirmation_code: String,
    pub user_id: i64,
    pub vehicle_id: i64,
}

//! DTOs de Vehicle

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dto::booking_dto::BookingDto;
use crate::models::vehicle::Vehicle;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub id: i64,
    pub vehicle_type: String,
    pub vehicle_price: Decimal,
    pub vehicle_photo_url: String,
    pub vehicle_description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<BookingDto>>,
}

impl From<Vehicle> for VehicleDto {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            vehicle_type: vehicle.vehicle_type,
            vehicle_price: vehicle.vehicle_price,
            vehicle_photo_url: vehicle.vehicle_photo_url,
            vehicle_description: vehicle.vehicle_description,
            bookings: None,
        }
    }
}

impl VehicleDto {
    /// Variante con las reservas del vehículo incluidas
    pub fn with_bookings(mut self, bookings: Vec<BookingDto>) -> Self {
        self.bookings = Some(bookings);
        self
    }
}

/// Query params para la búsqueda de disponibilidad por fechas y tipo.
/// Todos opcionales a nivel de extractor; el controller valida presencia.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub check_in_date: Option<NaiveDate>,
    pub check_out_date: Option<NaiveDate>,
    pub vehicle_type: Option<String>,
}

/// Campos del formulario multipart de alta/actualización de vehículo,
/// ya extraídos por la capa de rutas.
#[derive(Debug, Default)]
pub struct VehicleForm {
    pub photo: Option<UploadedPhoto>,
    pub vehicle_type: Option<String>,
    pub vehicle_price: Option<Decimal>,
    pub vehicle_description: Option<String>,
}

/// Imagen subida en el formulario
#[derive(Debug)]
pub struct UploadedPhoto {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

//! DTOs de Booking

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::user_dto::UserDto;
use crate::dto::vehicle_dto::VehicleDto;
use crate::models::booking::Booking;

/// Booking para la API. `user` y `vehicle` solo se incluyen en las vistas
/// que los necesitan (lookup por código de confirmación, historial).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub num_of_passengers: i32,
    pub num_of_miles: i32,
    pub booking_confirmation_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Box<UserDto>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<Box<VehicleDto>>,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            num_of_passengers: booking.num_of_passengers,
            num_of_miles: booking.num_of_miles,
            booking_confirmation_code: booking.booking_confirmation_code,
            user: None,
            vehicle: None,
        }
    }
}

impl BookingDto {
    pub fn with_user(mut self, user: UserDto) -> Self {
        self.user = Some(Box::new(user));
        self
    }

    pub fn with_vehicle(mut self, vehicle: VehicleDto) -> Self {
        self.vehicle = Some(Box::new(vehicle));
        self
    }
}

/// Request para crear una reserva
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub check_in_date: NaiveDate,

    pub check_out_date: NaiveDate,

    #[validate(range(min = 1, message = "Number of passengers must not be less than 1"))]
    pub num_of_passengers: i32,

    #[validate(range(min = 0, message = "Number of miles must not be less than 0"))]
    pub num_of_miles: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_booking_request_deserializes_camel_case() {
        let request: CreateBookingRequest = serde_json::from_str(
            r#"{
                "checkInDate": "2024-01-10",
                "checkOutDate": "2024-01-15",
                "numOfPassengers": 4,
                "numOfMiles": 120
            }"#,
        )
        .unwrap();

        assert_eq!(request.check_in_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        assert_eq!(request.check_out_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(request.num_of_passengers, 4);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_booking_request_rejects_zero_passengers() {
        let request: CreateBookingRequest = serde_json::from_str(
            r#"{
                "checkInDate": "2024-01-10",
                "checkOutDate": "2024-01-15",
                "numOfPassengers": 0,
                "numOfMiles": 0
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_err());
    }
}

//! Envelope uniforme de la API
//!
//! Todas las respuestas viajan como `{statusCode, message, ...payload}` en
//! camelCase; los campos sin valor se omiten del JSON. El status HTTP refleja
//! el `statusCode` del envelope.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::dto::booking_dto::BookingDto;
use crate::dto::user_dto::UserDto;
use crate::dto::vehicle_dto::VehicleDto;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_confirmation_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleDto>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingDto>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_list: Option<Vec<UserDto>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_list: Option<Vec<VehicleDto>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_list: Option<Vec<BookingDto>>,
}

impl Response {
    /// Envelope de éxito con mensaje
    pub fn success(message: &str) -> Self {
        Self {
            status_code: 200,
            message: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: UserDto) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_vehicle(mut self, vehicle: VehicleDto) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn with_booking(mut self, booking: BookingDto) -> Self {
        self.booking = Some(booking);
        self
    }

    pub fn with_user_list(mut self, users: Vec<UserDto>) -> Self {
        self.user_list = Some(users);
        self
    }

    pub fn with_vehicle_list(mut self, vehicles: Vec<VehicleDto>) -> Self {
        self.vehicle_list = Some(vehicles);
        self
    }

    pub fn with_booking_list(mut self, bookings: Vec<BookingDto>) -> Self {
        self.booking_list = Some(bookings);
        self
    }

    pub fn with_confirmation_code(mut self, code: String) -> Self {
        self.booking_confirmation_code = Some(code);
        self
    }

    pub fn with_token(mut self, token: String, role: String, expiration_time: &str) -> Self {
        self.token = Some(token);
        self.role = Some(role);
        self.expiration_time = Some(expiration_time.to_string());
        self
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serializes_camel_case_and_skips_nulls() {
        let response = Response::success("successful")
            .with_confirmation_code("AB12CD34EF".to_string());

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["message"], "successful");
        assert_eq!(value["bookingConfirmationCode"], "AB12CD34EF");
        // Los campos vacíos no aparecen en el JSON
        assert!(value.get("token").is_none());
        assert!(value.get("userList").is_none());
    }

    #[test]
    fn test_login_envelope_shape() {
        let response = Response::success("Successful").with_token(
            "token".to_string(),
            "USER".to_string(),
            "7 Days",
        );

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["token"], "token");
        assert_eq!(value["role"], "USER");
        assert_eq!(value["expirationTime"], "7 Days");
    }
}

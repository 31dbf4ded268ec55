//! DTOs de User
//!
//! El DTO nunca incluye el hash del password.

use serde::Serialize;

use crate::dto::booking_dto::BookingDto;
use crate::models::user::User;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub role: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookings: Option<Vec<BookingDto>>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
            role: user.role,
            bookings: None,
        }
    }
}

impl UserDto {
    /// Variante con historial de reservas (cada reserva con su vehículo)
    pub fn with_bookings(mut self, bookings: Vec<BookingDto>) -> Self {
        self.bookings = Some(bookings);
        self
    }
}

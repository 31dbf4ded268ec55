//! DTOs de la API
//!
//! Requests de entrada, DTOs de salida y el envelope uniforme de respuesta.

pub mod auth_dto;
pub mod booking_dto;
pub mod response;
pub mod user_dto;
pub mod vehicle_dto;

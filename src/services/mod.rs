//! Services module
//!
//! Este módulo contiene la lógica de negocio pura y las integraciones
//! externas: el predicado de disponibilidad y el cliente de almacenamiento
//! de imágenes.

pub mod availability;
pub mod storage_service;

pub use availability::*;
pub use storage_service::*;

//! Controllers
//!
//! Lógica de negocio por recurso; reciben sus dependencias por constructor.

pub mod booking_controller;
pub mod user_controller;
pub mod vehicle_controller;

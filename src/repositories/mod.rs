//! Acceso a datos
//!
//! Un repositorio por agregado, con queries SQLx en runtime.

pub mod booking_repository;
pub mod user_repository;
pub mod vehicle_repository;

//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, JWT
//! y generación de códigos de confirmación.

pub mod codes;
pub mod errors;
pub mod jwt;

//! Modelo de User
//!
//! Este módulo contiene el struct User que mapea exactamente a la tabla
//! `users`. El campo `role` es uno de USER | ADMIN (default USER).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: String,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

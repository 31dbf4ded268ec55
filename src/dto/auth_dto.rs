//! DTOs de autenticación

use serde::Deserialize;
use validator::Validate;

/// Request de registro
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 5, max = 30))]
    pub phone_number: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    /// USER por defecto cuando viene vacío
    pub role: Option<String>,
}

/// Request de login
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,
}

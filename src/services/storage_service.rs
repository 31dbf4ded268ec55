//! Servicio de almacenamiento de imágenes
//!
//! Sube las fotos de vehículos a un bucket compatible con S3 vía HTTP PUT y
//! devuelve la URL pública. Solo acepta JPEG/PNG.

use reqwest::Client;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::utils::errors::AppError;

const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// Cliente del object store
#[derive(Clone)]
pub struct ImageStorageService {
    client: Client,
    endpoint: String,
    bucket: String,
    access_key: String,
}

impl ImageStorageService {
    pub fn new(client: Client, config: &EnvironmentConfig) -> Self {
        Self {
            client,
            endpoint: config.storage_endpoint.trim_end_matches('/').to_string(),
            bucket: config.storage_bucket.clone(),
            access_key: config.storage_access_key.clone(),
        }
    }

    /// Subir una imagen y devolver su URL pública.
    ///
    /// El nombre del objeto se aleatoriza con UUID para que dos uploads con el
    /// mismo nombre de archivo no se pisen.
    pub async fn upload_image(
        &self,
        original_filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        if !is_allowed_image_type(content_type) {
            return Err(AppError::Validation(
                "Invalid file type. Only JPEG, JPG, and PNG are allowed.".to_string(),
            ));
        }

        let key = object_key(original_filename);
        let url = format!("{}/{}/{}", self.endpoint, self.bucket, key);

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.access_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::ExternalApi(format!("Error subiendo imagen: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "El object store respondió {} al subir la imagen",
                response.status()
            )));
        }

        Ok(url)
    }
}

fn is_allowed_image_type(content_type: &str) -> bool {
    ALLOWED_IMAGE_TYPES.contains(&content_type)
}

/// Clave del objeto: UUID + extensión original (si la hay)
fn object_key(original_filename: &str) -> String {
    match original_filename.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => {
            format!("{}.{}", Uuid::new_v4(), extension.to_lowercase())
        }
        _ => Uuid::new_v4().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_image_types() {
        assert!(is_allowed_image_type("image/jpeg"));
        assert!(is_allowed_image_type("image/jpg"));
        assert!(is_allowed_image_type("image/png"));
        assert!(!is_allowed_image_type("image/gif"));
        assert!(!is_allowed_image_type("application/pdf"));
    }

    #[test]
    fn test_object_key_keeps_extension() {
        let key = object_key("mi-auto.PNG");
        assert!(key.ends_with(".png"));
        assert_ne!(object_key("a.png"), object_key("a.png"));
    }

    #[test]
    fn test_object_key_without_extension() {
        let key = object_key("sin-extension");
        assert!(!key.contains('.'));
    }
}

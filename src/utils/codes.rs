//! Generación de códigos de confirmación de reservas

use rand::rngs::OsRng;
use rand::Rng;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generar un código alfanumérico aleatorio de `length` caracteres.
///
/// Usa `OsRng` como fuente de entropía. La unicidad NO está garantizada por
/// construcción; el constraint UNIQUE de la tabla `bookings` la impone al
/// momento de persistir (una colisión se reporta como Conflict reintentable).
pub fn generate_confirmation_code(length: usize) -> String {
    let mut rng = OsRng;

    (0..length)
        .map(|_| {
            let index = rng.gen_range(0..ALPHANUMERIC.len());
            ALPHANUMERIC[index] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_has_exact_length() {
        for length in [1, 5, 10, 32] {
            assert_eq!(generate_confirmation_code(length).len(), length);
        }
    }

    #[test]
    fn test_generated_code_uses_allowed_alphabet() {
        let code = generate_confirmation_code(200);
        assert!(code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_zero_length_yields_empty_string() {
        assert_eq!(generate_confirmation_code(0), "");
    }
}

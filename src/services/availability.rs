//! Chequeo de disponibilidad de vehículos
//!
//! Predicado puro sobre fechas de calendario: un rango candidato entra en
//! conflicto con una reserva existente según las reglas de negocio vigentes.
//! No toca la base de datos; el controller le pasa las reservas existentes.

use chrono::NaiveDate;

use crate::models::booking::Booking;

/// Par check-in / check-out de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingDates {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl BookingDates {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self { check_in, check_out }
    }

    /// Reglas de conflicto entre el rango candidato (`self`) y una reserva
    /// existente. Cualquier regla que aplique marca el candidato como no
    /// disponible.
    // TODO: revisar con producto la regla del check-out anterior: hoy rechaza
    // candidatos que terminan antes de que la reserva existente termine aunque
    // los rangos ni se toquen. Cambiarla altera qué reservas se aceptan.
    fn conflicts_with(&self, existing: &BookingDates) -> bool {
        self.check_in == existing.check_in
            || self.check_out < existing.check_out
            || (self.check_in > existing.check_in && self.check_in < existing.check_out)
            || (self.check_in < existing.check_in && self.check_out == existing.check_out)
            || (self.check_in < existing.check_in && self.check_out > existing.check_out)
            || (self.check_in == existing.check_out && self.check_out == existing.check_in)
            || (self.check_in == existing.check_out && self.check_out == self.check_in)
    }
}

impl From<&Booking> for BookingDates {
    fn from(booking: &Booking) -> Self {
        Self {
            check_in: booking.check_in_date,
            check_out: booking.check_out_date,
        }
    }
}

/// true si el candidato no entra en conflicto con ninguna reserva existente.
/// Sin reservas existentes el vehículo siempre está disponible.
pub fn is_vehicle_available(candidate: &BookingDates, existing: &[BookingDates]) -> bool {
    existing
        .iter()
        .all(|booking| !candidate.conflicts_with(booking))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn existing_jan_10_to_15() -> Vec<BookingDates> {
        vec![BookingDates::new(date(2024, 1, 10), date(2024, 1, 15))]
    }

    #[test]
    fn test_no_existing_bookings_always_available() {
        let candidate = BookingDates::new(date(2024, 1, 10), date(2024, 1, 20));
        assert!(is_vehicle_available(&candidate, &[]));
    }

    #[test]
    fn test_shared_check_in_conflicts() {
        let candidate = BookingDates::new(date(2024, 1, 10), date(2024, 1, 20));
        assert!(!is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_later_range_ending_after_existing_is_available() {
        // Empieza después del check-out existente y termina después: ninguna
        // regla aplica.
        let candidate = BookingDates::new(date(2024, 1, 16), date(2024, 1, 18));
        assert!(is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_earlier_non_touching_range_still_conflicts() {
        // Termina antes de que el existente termine, aunque los rangos ni se
        // tocan: la regla del check-out anterior lo rechaza igual.
        let candidate = BookingDates::new(date(2024, 1, 5), date(2024, 1, 8));
        assert!(!is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_check_in_inside_existing_range_conflicts() {
        let candidate = BookingDates::new(date(2024, 1, 12), date(2024, 1, 20));
        assert!(!is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_same_check_out_starting_earlier_conflicts() {
        let candidate = BookingDates::new(date(2024, 1, 8), date(2024, 1, 15));
        assert!(!is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_enveloping_range_conflicts() {
        let candidate = BookingDates::new(date(2024, 1, 5), date(2024, 1, 20));
        assert!(!is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_exact_swap_conflicts() {
        let candidate = BookingDates::new(date(2024, 1, 15), date(2024, 1, 10));
        assert!(!is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_single_day_candidate_on_existing_check_out_conflicts() {
        let candidate = BookingDates::new(date(2024, 1, 15), date(2024, 1, 15));
        assert!(!is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_identical_range_conflicts() {
        let candidate = BookingDates::new(date(2024, 1, 10), date(2024, 1, 15));
        assert!(!is_vehicle_available(&candidate, &existing_jan_10_to_15()));
    }

    #[test]
    fn test_conflict_against_any_of_multiple_bookings() {
        let existing = vec![
            BookingDates::new(date(2024, 2, 1), date(2024, 2, 5)),
            BookingDates::new(date(2024, 3, 1), date(2024, 3, 5)),
        ];
        // Comparte check-in con la segunda reserva
        let candidate = BookingDates::new(date(2024, 3, 1), date(2024, 3, 10));
        assert!(!is_vehicle_available(&candidate, &existing));
    }
}

//! Client-side validation helpers for form drafts.
//!
//! These checks are a UX nicety only: the API remains the authority on
//! every invariant. First violation wins; messages are user-facing.

/// Required-presence check for a text field.
pub fn required(value: &str, field_label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("El campo {} es obligatorio", field_label));
    }
    Ok(())
}

/// Maximum length check for a text field.
pub fn max_length(value: &str, max: usize, field_label: &str) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!(
            "El campo {} no debe superar {} caracteres",
            field_label, max
        ));
    }
    Ok(())
}

/// Loose email shape check: one '@', non-empty local part, dotted domain.
/// Deliberately not a full RFC parser; the server re-validates.
pub fn email(value: &str, field_label: &str) -> Result<(), String> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(format!("El campo {} no es un correo valido", field_label));
    }
    Ok(())
}

/// Phone check: digits only, sensible length.
pub fn phone(value: &str, field_label: &str) -> Result<(), String> {
    let digits = value.chars().all(|c| c.is_ascii_digit());
    let len = value.len();
    if !digits || !(6..=15).contains(&len) {
        return Err(format!(
            "El campo {} debe contener solo digitos (6 a 15)",
            field_label
        ));
    }
    Ok(())
}

/// Amounts (prices, salaries, totals) must not be negative.
pub fn non_negative(value: f64, field_label: &str) -> Result<(), String> {
    if value < 0.0 {
        return Err(format!("El campo {} no puede ser negativo", field_label));
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` wire date.
pub fn parse_date(value: &str, field_label: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("El campo {} no es una fecha valida", field_label))
}

/// Reservation-style range check: the end date must not precede the start.
pub fn date_range(start: &str, end: &str) -> Result<(), String> {
    let desde = parse_date(start, "fecha inicio")?;
    let hasta = parse_date(end, "fecha fin")?;
    if hasta < desde {
        return Err("La fecha fin no puede ser anterior a la fecha inicio".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("Ana", "nombre").is_ok());
        assert!(required("", "nombre").is_err());
        assert!(required("   ", "nombre").is_err());
    }

    #[test]
    fn test_email() {
        assert!(email("ana@hotel.com", "correo").is_ok());
        assert!(email("ana@hotel", "correo").is_err());
        assert!(email("@hotel.com", "correo").is_err());
        assert!(email("ana.hotel.com", "correo").is_err());
        assert!(email("ana@.com", "correo").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(phone("987654321", "telefono").is_ok());
        assert!(phone("98-76", "telefono").is_err());
        assert!(phone("123", "telefono").is_err());
        assert!(phone("1234567890123456", "telefono").is_err());
    }

    #[test]
    fn test_date_range() {
        assert!(date_range("2026-08-01", "2026-08-05").is_ok());
        assert!(date_range("2026-08-05", "2026-08-05").is_ok());
        assert!(date_range("2026-08-05", "2026-08-01").is_err());
        assert!(date_range("not-a-date", "2026-08-01").is_err());
    }

    #[test]
    fn test_non_negative() {
        assert!(non_negative(0.0, "precio").is_ok());
        assert!(non_negative(120.5, "precio").is_ok());
        assert!(non_negative(-1.0, "precio").is_err());
    }
}

//! Numeric cleanup for currency-formatted fields.

/// Strip everything except ASCII digits and `.` and parse what remains.
///
/// Currency symbols, thousands separators and signs are discarded, so
/// `"$1,500.50"` parses to `1500.5` and `"-500"` to `500`. Text that leaves
/// nothing parseable yields `None`.
pub fn clean_price(raw: &str) -> Option<f64> {
    let kept: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect();
    if kept.is_empty() {
        return None;
    }
    kept.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_formatting() {
        assert_eq!(clean_price("$1,500.50"), Some(1500.5));
        assert_eq!(clean_price("USD 250000"), Some(250_000.0));
        assert_eq!(clean_price("50000"), Some(50_000.0));
        assert_eq!(clean_price("50000.0"), Some(50_000.0));
    }

    #[test]
    fn sign_is_discarded() {
        assert_eq!(clean_price("-500"), Some(500.0));
    }

    #[test]
    fn unparseable_becomes_none() {
        assert_eq!(clean_price("consultar"), None);
        assert_eq!(clean_price(""), None);
        assert_eq!(clean_price("1.2.3"), None);
        assert_eq!(clean_price("."), None);
    }
}

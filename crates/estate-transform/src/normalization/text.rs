//! Text cleanup for free-form string fields.

/// Trim surrounding whitespace and title-case every word.
pub fn normalize_text(value: &str) -> String {
    title_case(value.trim())
}

/// Title-case a string word by word.
///
/// A letter is uppercased when it follows a character without case
/// (digits, spaces, punctuation) and lowercased when it follows a letter,
/// so `"o'brien 2do piso"` becomes `"O'Brien 2Do Piso"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;
    for ch in value.chars() {
        if previous_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        previous_cased = is_cased(ch);
    }
    out
}

fn is_cased(ch: char) -> bool {
    ch.is_lowercase() || ch.is_uppercase()
}

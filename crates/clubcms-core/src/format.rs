//! Display formatting helpers for CMS content.

/// Format a phone number the way the site prints it.
///
/// Ten digits render as `(261) 663-9266`, seven as `395-0626`; anything
/// else passes through unchanged.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        7 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => phone.to_string(),
    }
}

// src/registration/format.rs
//
// Input affordances the page applies while the user types. These shape
// raw values, they never judge them; validation stays in validators.rs.

/// Progressive phone grouping: keep digits only and render them as
/// `XXX`, `XXX-XXX`, then `XXX-XXX-XXXX`. Digits past the tenth are
/// dropped.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => digits,
        4..=6 => format!("{}-{}", &digits[..3], &digits[3..]),
        _ => {
            let end = digits.len().min(10);
            format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..end])
        }
    }
}

/// Lowercase the input and capitalize the first letter of every
/// space-separated word, as the page does to names on focus loss.
pub fn capitalize_words(raw: &str) -> String {
    raw.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

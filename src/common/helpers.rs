// Helper functions for safe logging

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
pub fn safe_email_log(email: &str) -> String {
    if email.len() <= 3 {
        return "***@***.***".to_string();
    }

    let mut parts = email.splitn(3, '@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            format!("{}***@{}", local.get(..1).unwrap_or(""), domain)
        }
        _ => "***@***.***".to_string(),
    }
}

//! Utility functions

pub fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        match local.chars().count() {
            0 => format!("***{}", domain),
            1 | 2 => format!("{}***{}", local.chars().next().unwrap_or('*'), domain),
            _ => format!("{}***{}", local.chars().take(2).collect::<String>(), domain),
        }
    } else {
        "***".to_string()
    }
}

/// Case-insensitive email comparison, ignoring surrounding whitespace.
pub fn emails_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

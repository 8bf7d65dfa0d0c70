//! Common types

use uuid::Uuid;

/// Parse an id read back from an untrusted store (session, form).
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_roundtrip() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Some(id));
        assert_eq!(parse_id(&format!(" {} ", id)), Some(id));
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert_eq!(parse_id("42"), None);
        assert_eq!(parse_id(""), None);
    }
}

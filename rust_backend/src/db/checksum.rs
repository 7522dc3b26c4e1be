//! Checksum calculation for snapshot deduplication.

use sha2::{Digest, Sha256};

/// SHA-256 of `content` as lowercase hex.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_known_value() {
        assert_eq!(
            calculate_checksum(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_different_content_different_checksum() {
        assert_ne!(
            calculate_checksum(r#"[{"country":"India"}]"#),
            calculate_checksum(r#"[{"country":"Japan"}]"#)
        );
    }
}

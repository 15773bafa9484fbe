use crate::PostRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected a JSON array of posts: {message}")]
    InvalidJson { message: String },
}

/// Decodes a page body: a JSON array of `{id, title, body, ...}` objects.
pub fn decode_posts(bytes: &[u8]) -> Result<Vec<PostRecord>, DecodeError> {
    serde_json::from_slice(bytes).map_err(|err| DecodeError::InvalidJson {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_fields() {
        let body = br#"[{"userId": 1, "id": 7, "title": "t", "body": "b"}]"#;
        let posts = decode_posts(body).unwrap();
        assert_eq!(
            posts,
            vec![PostRecord {
                id: 7,
                title: "t".to_string(),
                body: "b".to_string(),
            }]
        );
    }

    #[test]
    fn empty_array_is_an_empty_page() {
        assert_eq!(decode_posts(b"[]").unwrap(), Vec::new());
    }

    #[test]
    fn object_body_is_rejected() {
        let err = decode_posts(br#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidJson { .. }));
    }

    #[test]
    fn missing_title_is_rejected() {
        assert!(decode_posts(br#"[{"id": 1, "body": "b"}]"#).is_err());
    }
}

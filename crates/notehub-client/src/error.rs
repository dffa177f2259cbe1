// ABOUTME: Error types for notehub-client
// ABOUTME: One taxonomy for config, transport, validation, and missing-note failures

use thiserror::Error;

/// Errors that can occur in notehub-client operations
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request failed: {message}")]
    Transport {
        /// HTTP status when the server answered, None on network failure
        status: Option<u16>,
        message: String,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("note not found: {0}")]
    NotFound(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl NoteError {
    /// Map a non-2xx response to the right variant.
    /// 400/422 are server-side payload rejections, 404 is a missing target.
    pub fn from_status(status: u16, body: String, target: &str) -> Self {
        match status {
            400 | 422 => NoteError::Validation(body),
            404 => NoteError::NotFound(target.to_string()),
            _ => NoteError::Transport {
                status: Some(status),
                message: body,
            },
        }
    }
}

impl From<reqwest::Error> for NoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return NoteError::InvalidResponse(err.to_string());
        }
        NoteError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_error_display_config() {
        let err = NoteError::Config("NOTEHUB_TOKEN is not set".to_string());
        let display = format!("{}", err);
        assert!(display.contains("configuration error"));
        assert!(display.contains("NOTEHUB_TOKEN"));
    }

    #[test]
    fn test_note_error_display_transport() {
        let err = NoteError::Transport {
            status: Some(500),
            message: "internal server error".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("request failed"));
        assert!(display.contains("internal server error"));
    }

    #[test]
    fn test_note_error_display_validation() {
        let err = NoteError::Validation("title is too short".to_string());
        let display = format!("{}", err);
        assert!(display.contains("validation failed"));
        assert!(display.contains("title is too short"));
    }

    #[test]
    fn test_note_error_display_not_found() {
        let err = NoteError::NotFound("note-42".to_string());
        let display = format!("{}", err);
        assert!(display.contains("note not found"));
        assert!(display.contains("note-42"));
    }

    #[test]
    fn test_from_status_bad_request() {
        let err = NoteError::from_status(400, "title too short".to_string(), "note");
        assert!(matches!(err, NoteError::Validation(_)));
    }

    #[test]
    fn test_from_status_unprocessable() {
        let err = NoteError::from_status(422, "bad tag".to_string(), "note");
        assert!(matches!(err, NoteError::Validation(_)));
    }

    #[test]
    fn test_from_status_not_found() {
        let err = NoteError::from_status(404, "no such note".to_string(), "note-7");
        assert!(matches!(err, NoteError::NotFound(ref id) if id == "note-7"));
    }

    #[test]
    fn test_from_status_other_codes() {
        for status in [401u16, 403, 429, 500, 503] {
            let err = NoteError::from_status(status, "boom".to_string(), "note");
            match err {
                NoteError::Transport {
                    status: Some(s),
                    ref message,
                } => {
                    assert_eq!(s, status);
                    assert_eq!(message, "boom");
                }
                other => panic!("expected Transport, got {:?}", other),
            }
        }
    }
}

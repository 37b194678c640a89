use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};

/// An encoded image: an opaque base64 payload plus its MIME type.
///
/// States are immutable values — every edit produces a new `ImageState`,
/// and the history store never mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageState {
    pub mime_type: String,
    /// Base64-encoded image bytes (no data-URL header).
    pub data: String,
}

impl ImageState {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Encode raw image bytes.
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Parse a data URL (`data:image/png;base64,....`).
    ///
    /// Tolerant of a missing header: a bare base64 string is accepted and
    /// defaults to `image/png`.
    pub fn from_data_url(url: &str) -> Self {
        let (header, payload) = match url.split_once(',') {
            Some((h, p)) => (h, p),
            None => ("", url),
        };
        let mime_type = header
            .strip_prefix("data:")
            .and_then(|h| h.split(';').next())
            .filter(|m| !m.is_empty())
            .unwrap_or("image/png");
        Self {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        }
    }

    /// Render as a data URL suitable for direct display.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Decode the base64 payload back into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.data)
            .map_err(|e| StudioError::InvalidImage(e.to_string()))
    }
}

/// One user action's worth of generation work: a source image and one or
/// more composed instructions, each of which becomes an independent call
/// to the generation service.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub source: ImageState,
    pub instructions: Vec<String>,
    pub aspect_ratio: Option<String>,
}

/// The successful subset of a request's outcomes.
///
/// `images` follows instruction submission order, not completion order,
/// so "Option 1..N" numbering is stable across runs of the same request.
/// `failures` carries the reasons of any instructions that failed, for
/// diagnostics only.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    pub images: Vec<ImageState>,
    pub failures: Vec<String>,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Single-flight processing status of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingStatus {
    Idle,
    Processing,
    Error { message: String },
}

impl ProcessingStatus {
    pub fn is_processing(&self) -> bool {
        matches!(self, ProcessingStatus::Processing)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ProcessingStatus::Error { .. })
    }
}

/// How an apply call resolved: committed straight to history, or parked
/// as a pending review the caller must settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Committed,
    PendingReview { options: usize },
}

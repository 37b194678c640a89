use thiserror::Error;

#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Cannot reach generation service: {context}")]
    Network {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Generation service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid response from generation service: {0}")]
    InvalidResponse(String),

    #[error("The service declined to generate the image: \"{0}\"")]
    Refused(String),

    #[error("No image data found in response")]
    NoImageData,

    #[error("No video URI returned in response")]
    NoVideoUri,

    #[error("Video generation failed: {0}")]
    VideoFailed(String),

    #[error("All {attempted} generation attempts failed")]
    NoVariantsGenerated { attempted: usize },

    #[error("A generation is already in progress")]
    Busy,

    #[error("A review is pending; select a candidate or cancel it first")]
    ReviewPending,

    #[error("No review is pending")]
    NoPendingReview,

    #[error("Candidate index {index} out of range ({available} available)")]
    InvalidCandidate { index: usize, available: usize },

    #[error("No photo loaded")]
    NoPhoto,

    #[error("Edit prompt is empty")]
    EmptyPrompt,

    #[error("Unknown catalog slot: {0}")]
    UnknownSlot(String),

    #[error("Unknown catalog item: {0}")]
    UnknownItem(String),

    #[error("Texture edits require a target garment")]
    TextureTargetRequired,

    #[error("Invalid image data: {0}")]
    InvalidImage(String),

    #[error("Wardrobe persistence failed: {0}")]
    Persistence(String),

    #[error("Missing API key: set GEMINI_API_KEY")]
    MissingApiKey,

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StudioError>;

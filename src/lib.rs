//! # Style Studio
//!
//! Edit-history and generation orchestration engine for iterative AI
//! photo restyling.
//!
//! The crate turns catalog selections and free-form prompts into
//! generation-service instructions, fans batches out concurrently, and
//! tracks every committed result in a linear undo history. A
//! [`StudioSession`] ties it together behind a single-flight state
//! machine.
//!
//! ## Features
//!
//! - **Prompt composition**: declarative per-category rule table mapping
//!   selections to instructions that pin identity, pose, and untouched
//!   garments
//! - **Concurrent variants**: settle-all batch generation with
//!   order-stable candidates and partial-failure tolerance
//! - **Linear history**: cursor-based undo that discards abandoned
//!   branches on the next edit
//! - **Review flow**: multi-candidate edits park for a human pick before
//!   anything reaches history
//! - **Wardrobe**: named look snapshots persisted through a pluggable
//!   store
//! - **Video**: animate the current photo via a polled long-running
//!   operation
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use style_studio::{GeminiClient, ImageState, StudioSession};
//!
//! #[tokio::main]
//! async fn main() -> style_studio::Result<()> {
//!     let client = GeminiClient::from_env()?;
//!     let mut session = StudioSession::new(client);
//!
//!     session.load_photo(ImageState::from_bytes("image/jpeg", &[/* ... */]));
//!     session.apply_item("hair_color", "hc_red").await?;
//!     session.apply_custom("add subtle freckles").await?;
//!     session.undo()?;
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod client;
pub mod error;
pub mod history;
pub mod orchestrator;
pub mod prompt;
pub mod session;
pub mod types;
pub mod wardrobe;

pub use catalog::{Category, MotionMove, SelectionItem, Slot};
pub use client::{GeminiClient, GeminiConfig, GenerationClient};
pub use error::{Result, StudioError};
pub use history::HistoryStore;
pub use orchestrator::generate_variants;
pub use prompt::{CommitPolicy, TextureTarget};
pub use session::StudioSession;
pub use types::{
    CandidateSet, EditOutcome, GenerationRequest, ImageState, ProcessingStatus,
};
pub use wardrobe::{JsonFileStore, LookStore, MemoryStore, SavedLook, Wardrobe};

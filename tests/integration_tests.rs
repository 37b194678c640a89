//! End-to-end tests over the public API with a scripted generation
//! client.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use style_studio::{
    generate_variants, CandidateSet, EditOutcome, GenerationClient, GenerationRequest,
    ImageState, JsonFileStore, ProcessingStatus, Result, StudioError, StudioSession,
    TextureTarget, Wardrobe,
};

/// Deterministic client: echoes each instruction back as image data,
/// fails instructions containing "UNSAFE", and staggers completion so
/// later submissions can finish first.
struct StubClient {
    calls: AtomicUsize,
}

impl StubClient {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GenerationClient for StubClient {
    async fn edit_image(
        &self,
        _source: &ImageState,
        instruction: &str,
        aspect_ratio: Option<&str>,
    ) -> Result<ImageState> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        // Invert completion order within a batch
        tokio::time::sleep(Duration::from_millis(50u64.saturating_sub(n as u64 * 5))).await;
        if instruction.contains("UNSAFE") {
            return Err(StudioError::Refused("policy violation".to_string()));
        }
        let tag = aspect_ratio.map(|r| format!(" [{r}]")).unwrap_or_default();
        Ok(ImageState::new("image/png", format!("{instruction}{tag}")))
    }

    async fn generate_video(
        &self,
        _source: &ImageState,
        instruction: &str,
    ) -> Result<String> {
        Ok(format!("https://videos.example/{}", instruction.len()))
    }
}

fn photo() -> ImageState {
    ImageState::from_bytes("image/jpeg", b"original pixels")
}

fn session() -> StudioSession<StubClient> {
    let mut s = StudioSession::new(StubClient::new());
    s.load_photo(photo());
    s
}

#[tokio::test]
async fn test_full_restyle_flow() {
    let mut s = session();

    // Auto-commit edits stack up linearly
    s.apply_item("scene", "s_cyber").await.unwrap();
    s.apply_item("hair_style", "hs_mohawk").await.unwrap();
    s.apply_custom("add neon face paint").await.unwrap();
    assert_eq!(s.history_len(), 4);
    assert_eq!(s.status(), &ProcessingStatus::Idle);

    // Undo twice, then branch off — the undone edits are discarded
    s.undo().unwrap();
    s.undo().unwrap();
    s.apply_item("hair_color", "hc_blue").await.unwrap();
    assert_eq!(s.history_len(), 3);

    // The scene committed, so pose suggestions are live
    assert!(!s.suggested_poses().is_empty());
}

#[tokio::test]
async fn test_batch_outfit_order_is_stable_despite_completion_order() {
    let mut s = session();
    let outcome = s.apply_item("outfit", "o_batch").await.unwrap();
    assert_eq!(outcome, EditOutcome::PendingReview { options: 8 });

    // StubClient finishes later calls first; candidates must still be
    // numbered by submission order.
    let pending = s.pending_candidates().unwrap();
    assert!(pending.images[0].data.contains("business suit"));
    assert!(pending.images[1].data.contains("streetwear"));
    assert!(pending.images[7].data.contains("minimalist monochrome"));

    s.select_candidate(1).await.unwrap();
    assert!(s.current_image().unwrap().data.contains("streetwear"));
}

#[tokio::test]
async fn test_partial_failure_batch_still_reviews() {
    struct MixedClient;

    #[async_trait]
    impl GenerationClient for MixedClient {
        async fn edit_image(
            &self,
            _source: &ImageState,
            instruction: &str,
            _aspect_ratio: Option<&str>,
        ) -> Result<ImageState> {
            // Only the suit and streetwear themes survive
            if instruction.contains("suit") || instruction.contains("streetwear") {
                Ok(ImageState::new("image/png", instruction))
            } else {
                Err(StudioError::NoImageData)
            }
        }

        async fn generate_video(&self, _s: &ImageState, _i: &str) -> Result<String> {
            unreachable!()
        }
    }

    let mut s = StudioSession::new(MixedClient);
    s.load_photo(photo());

    let outcome = s.apply_item("outfit", "o_batch").await.unwrap();
    assert_eq!(outcome, EditOutcome::PendingReview { options: 2 });
    let pending = s.pending_candidates().unwrap();
    assert_eq!(pending.failures.len(), 6);
    assert!(pending.images[0].data.contains("suit"));
    assert!(pending.images[1].data.contains("streetwear"));
}

#[tokio::test]
async fn test_total_failure_surfaces_one_error() {
    /// Fails the whole first batch, then recovers.
    struct RecoveringClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GenerationClient for RecoveringClient {
        async fn edit_image(
            &self,
            _s: &ImageState,
            instruction: &str,
            _r: Option<&str>,
        ) -> Result<ImageState> {
            if self.calls.fetch_add(1, Ordering::SeqCst) < 8 {
                return Err(StudioError::Http {
                    status: 503,
                    body: "overloaded".to_string(),
                });
            }
            Ok(ImageState::new("image/png", instruction))
        }

        async fn generate_video(&self, _s: &ImageState, _i: &str) -> Result<String> {
            unreachable!()
        }
    }

    let mut s = StudioSession::new(RecoveringClient {
        calls: AtomicUsize::new(0),
    });
    s.load_photo(photo());

    let err = s.apply_item("outfit", "o_batch").await.unwrap_err();
    assert!(matches!(
        err,
        StudioError::NoVariantsGenerated { attempted: 8 }
    ));
    assert!(s.status().is_error());
    assert_eq!(s.history_len(), 1);
    assert!(s.pending_candidates().is_none());

    // The error is sticky only until acknowledged; the session stays usable
    s.dismiss_error();
    assert_eq!(s.status(), &ProcessingStatus::Idle);
    assert!(s.apply_custom("recovered").await.is_ok());
    assert_eq!(s.history_len(), 2);
}

#[tokio::test]
async fn test_orchestrator_direct_use() {
    let client = StubClient::new();
    let request = GenerationRequest {
        source: photo(),
        instructions: vec![
            "first".to_string(),
            "UNSAFE second".to_string(),
            "third".to_string(),
        ],
        aspect_ratio: None,
    };

    let set: CandidateSet = generate_variants(&client, &request).await.unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.images[0].data, "first");
    assert_eq!(set.images[1].data, "third");
    assert_eq!(set.failures.len(), 1);
    assert!(set.failures[0].contains("policy violation"));
}

#[tokio::test]
async fn test_texture_review_cancel_leaves_history_untouched() {
    let mut s = session();
    s.apply_custom("base look").await.unwrap();

    s.apply_texture("tx_leather", TextureTarget::Outfit)
        .await
        .unwrap();
    assert!(s.pending_candidates().is_some());
    s.cancel_review().unwrap();

    assert_eq!(s.history_len(), 2);
    assert!(s.current_image().unwrap().data.contains("base look"));
}

#[tokio::test]
async fn test_expand_threads_aspect_ratio_to_client() {
    let mut s = session();
    s.expand("9:16").await.unwrap();
    let current = s.current_image().unwrap();
    assert!(current.data.contains("outpainting"));
    assert!(current.data.ends_with("[9:16]"));
}

#[tokio::test]
async fn test_wardrobe_survives_sessions_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wardrobe.json");

    {
        let wardrobe = Wardrobe::open(Box::new(JsonFileStore::new(&path)));
        let mut s = StudioSession::with_wardrobe(StubClient::new(), wardrobe);
        s.load_photo(photo());
        s.apply_custom("summer look").await.unwrap();
        s.save_look("Summer", "outfit").unwrap();
    }

    let wardrobe = Wardrobe::open(Box::new(JsonFileStore::new(&path)));
    let mut s = StudioSession::with_wardrobe(StubClient::new(), wardrobe);
    assert_eq!(s.looks().len(), 1);
    assert_eq!(s.looks()[0].name, "Summer");

    // Applying the saved look requires a loaded photo
    let id = s.looks()[0].id.clone();
    assert!(matches!(s.apply_look(&id), Err(StudioError::NoPhoto)));
    s.load_photo(photo());
    s.apply_look(&id).unwrap();
    assert!(s.current_image().unwrap().data.contains("summer look"));
}

#[tokio::test]
async fn test_video_generation_does_not_touch_history() {
    let mut s = session();
    s.apply_custom("final look").await.unwrap();
    let before = s.history_len();

    let uri = s.animate("moonwalk").await.unwrap();
    assert!(uri.starts_with("https://videos.example/"));
    assert_eq!(s.history_len(), before);
    assert_eq!(s.status(), &ProcessingStatus::Idle);

    let uri = s.animate_custom("jump excitedly").await.unwrap();
    assert!(!uri.is_empty());
}

#[tokio::test]
async fn test_catalog_is_fully_addressable_through_session() {
    let mut s = session();
    for slot in style_studio::catalog::slots() {
        // One representative item per slot
        let Some(item) = slot.items.first() else {
            continue;
        };
        let result = s.apply_item(slot.id, item.id).await;
        match item.category {
            style_studio::Category::Texture => {
                assert!(matches!(result, Err(StudioError::TextureTargetRequired)));
            }
            style_studio::Category::BatchOutfit => {
                assert!(matches!(result, Ok(EditOutcome::PendingReview { .. })));
                s.cancel_review().unwrap();
            }
            _ => {
                assert_eq!(result.unwrap(), EditOutcome::Committed);
            }
        }
    }
}

//! Session controller: the single entry point tying catalog, prompts,
//! orchestration, history, and wardrobe together.
//!
//! A session owns one photo's edit lifecycle. Exactly one generation may
//! be in flight at a time; a pending review must be settled before the
//! next edit starts. Wardrobe operations are bookkeeping and are never
//! gated on processing status.

use tracing::{debug, info};

use crate::catalog::{self, Category, MotionMove, SelectionItem, Slot};
use crate::client::GenerationClient;
use crate::error::{Result, StudioError};
use crate::history::HistoryStore;
use crate::orchestrator::generate_variants;
use crate::prompt::{self, CommitPolicy, TextureTarget};
use crate::types::{
    CandidateSet, EditOutcome, GenerationRequest, ImageState, ProcessingStatus,
};
use crate::wardrobe::{SavedLook, Wardrobe};

pub struct StudioSession<C: GenerationClient> {
    client: C,
    history: HistoryStore,
    wardrobe: Wardrobe,
    status: ProcessingStatus,
    /// Active scene id, used for pose suggestions.
    scene_id: Option<String>,
    pending: Option<CandidateSet>,
}

impl<C: GenerationClient> StudioSession<C> {
    pub fn new(client: C) -> Self {
        Self::with_wardrobe(client, Wardrobe::in_memory())
    }

    pub fn with_wardrobe(client: C, wardrobe: Wardrobe) -> Self {
        Self {
            client,
            history: HistoryStore::new(),
            wardrobe,
            status: ProcessingStatus::Idle,
            scene_id: None,
            pending: None,
        }
    }

    /// Load a photo, replacing any existing session state (the wardrobe
    /// survives — it belongs to the user, not the photo).
    pub fn load_photo(&mut self, image: ImageState) {
        self.history.init(image);
        self.status = ProcessingStatus::Idle;
        self.scene_id = None;
        self.pending = None;
        info!("photo loaded, history reset");
    }

    pub fn current_image(&self) -> Option<&ImageState> {
        self.history.current()
    }

    pub fn status(&self) -> &ProcessingStatus {
        &self.status
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Step the history cursor back one edit. Refused while a generation
    /// is in flight or a review is unsettled.
    pub fn undo(&mut self) -> Result<bool> {
        self.ensure_ready()?;
        Ok(self.history.step_back())
    }

    /// Candidates awaiting review, if any.
    pub fn pending_candidates(&self) -> Option<&CandidateSet> {
        self.pending.as_ref()
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.status.is_processing() {
            return Err(StudioError::Busy);
        }
        if self.pending.is_some() {
            return Err(StudioError::ReviewPending);
        }
        Ok(())
    }

    /// Run one edit action end to end: guard, generate, then commit or
    /// park for review.
    ///
    /// The status machine is strict: `Idle -> Processing -> Idle` on
    /// success, `-> Error` on failure. A batch that produced at least
    /// one image is a success even if other attempts failed.
    async fn run_edit(
        &mut self,
        instructions: Vec<String>,
        policy: CommitPolicy,
        aspect_ratio: Option<String>,
    ) -> Result<EditOutcome> {
        self.ensure_ready()?;
        let source = self.history.current().ok_or(StudioError::NoPhoto)?.clone();

        self.status = ProcessingStatus::Processing;
        let request = GenerationRequest {
            source,
            instructions,
            aspect_ratio,
        };

        match generate_variants(&self.client, &request).await {
            Ok(set) => {
                self.status = ProcessingStatus::Idle;
                // Multiple survivors always need a human pick, whatever
                // the category's default policy says.
                let review = policy == CommitPolicy::Review || set.len() >= 2;
                if review {
                    let options = set.len();
                    debug!(options, "edit parked for review");
                    self.pending = Some(set);
                    Ok(EditOutcome::PendingReview { options })
                } else {
                    let image = set
                        .images
                        .into_iter()
                        .next()
                        .ok_or(StudioError::NoVariantsGenerated { attempted: 0 })?;
                    self.history.push(image);
                    debug!(history_len = self.history.len(), "edit committed");
                    Ok(EditOutcome::Committed)
                }
            }
            Err(e) => {
                self.status = ProcessingStatus::Error {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Apply a catalog item picked from a slot.
    ///
    /// Texture items cannot be applied directly — they need a garment
    /// target; use [`apply_texture`](Self::apply_texture).
    pub async fn apply_item(&mut self, slot_id: &str, item_id: &str) -> Result<EditOutcome> {
        let slot = find_slot(slot_id)?;
        let item = find_item(slot, item_id)?;
        if item.category == Category::Texture {
            return Err(StudioError::TextureTargetRequired);
        }

        let instructions = prompt::compose_item(slot, item);
        let policy = prompt::commit_policy(item.category);
        let outcome = self.run_edit(instructions, policy, None).await?;

        if item.category == Category::Environment && outcome == EditOutcome::Committed {
            self.scene_id = Some(item.id.to_string());
        }
        Ok(outcome)
    }

    /// Apply a texture item to a specific garment. Always goes through
    /// review.
    pub async fn apply_texture(
        &mut self,
        item_id: &str,
        target: TextureTarget,
    ) -> Result<EditOutcome> {
        let slot = find_slot("texture")?;
        let item = find_item(slot, item_id)?;
        let instruction = prompt::compose_texture(item, target);
        self.run_edit(vec![instruction], CommitPolicy::Review, None)
            .await
    }

    /// Apply a free-form edit. Auto-commits on success.
    pub async fn apply_custom(&mut self, text: &str) -> Result<EditOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StudioError::EmptyPrompt);
        }
        self.run_edit(
            vec![prompt::compose_custom(text)],
            CommitPolicy::Auto,
            None,
        )
        .await
    }

    /// Outpaint the photo to a new aspect ratio (e.g. "16:9").
    pub async fn expand(&mut self, aspect_ratio: &str) -> Result<EditOutcome> {
        self.run_edit(
            vec![prompt::expand_instruction()],
            CommitPolicy::Auto,
            Some(aspect_ratio.to_string()),
        )
        .await
    }

    /// Commit one candidate from the pending review and drop the rest.
    pub async fn select_candidate(&mut self, index: usize) -> Result<()> {
        let mut set = self.pending.take().ok_or(StudioError::NoPendingReview)?;
        if index >= set.len() {
            let available = set.len();
            // Out-of-range selection leaves the review open
            self.pending = Some(set);
            return Err(StudioError::InvalidCandidate { index, available });
        }
        let image = set.images.remove(index);
        self.history.push(image);
        debug!(index, "review candidate committed");
        Ok(())
    }

    /// Discard a pending review entirely; history is untouched.
    pub fn cancel_review(&mut self) -> Result<()> {
        if self.pending.take().is_none() {
            return Err(StudioError::NoPendingReview);
        }
        debug!("review cancelled");
        Ok(())
    }

    /// Push a previously saved look's image as the current state.
    pub fn apply_look(&mut self, look_id: &str) -> Result<()> {
        self.ensure_ready()?;
        if self.history.is_empty() {
            return Err(StudioError::NoPhoto);
        }
        let image = self
            .wardrobe
            .looks()
            .iter()
            .find(|l| l.id == look_id)
            .map(|l| l.image.clone())
            .ok_or_else(|| StudioError::UnknownItem(look_id.to_string()))?;
        self.history.push(image);
        Ok(())
    }

    /// Save the current image to the wardrobe. Allowed at any time, even
    /// mid-generation — it reads, never mutates, the photo state.
    pub fn save_look(&mut self, name: &str, slot_id: &str) -> Result<SavedLook> {
        let image = self.history.current().ok_or(StudioError::NoPhoto)?.clone();
        Ok(self.wardrobe.save(name, slot_id, image).clone())
    }

    pub fn delete_look(&mut self, look_id: &str) -> bool {
        self.wardrobe.delete(look_id)
    }

    pub fn looks(&self) -> &[SavedLook] {
        self.wardrobe.looks()
    }

    pub fn looks_for_slot(&self, slot_id: &str) -> Vec<&SavedLook> {
        self.wardrobe.looks_for_slot(slot_id)
    }

    /// Poses recommended for the active scene; empty when no scene edit
    /// has committed yet.
    pub fn suggested_poses(&self) -> Vec<&'static SelectionItem> {
        let Some(scene_id) = self.scene_id.as_deref() else {
            return Vec::new();
        };
        catalog::suggested_poses(scene_id)
            .iter()
            .filter_map(|pose_id| catalog::find_item("pose", pose_id))
            .collect()
    }

    /// Animate the current photo with a predefined motion move. Returns
    /// the video URI; history is untouched.
    pub async fn animate(&mut self, move_id: &str) -> Result<String> {
        let motion = catalog::find_move(move_id)
            .ok_or_else(|| StudioError::UnknownItem(move_id.to_string()))?;
        self.run_video(motion.prompt.to_string()).await
    }

    /// Animate with a free-form motion prompt.
    pub async fn animate_custom(&mut self, prompt_text: &str) -> Result<String> {
        let prompt_text = prompt_text.trim();
        if prompt_text.is_empty() {
            return Err(StudioError::EmptyPrompt);
        }
        self.run_video(prompt_text.to_string()).await
    }

    async fn run_video(&mut self, instruction: String) -> Result<String> {
        self.ensure_ready()?;
        let source = self.history.current().ok_or(StudioError::NoPhoto)?.clone();

        self.status = ProcessingStatus::Processing;
        match self.client.generate_video(&source, &instruction).await {
            Ok(uri) => {
                self.status = ProcessingStatus::Idle;
                info!("video generated");
                Ok(uri)
            }
            Err(e) => {
                self.status = ProcessingStatus::Error {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    pub fn motion_moves(&self) -> &'static [MotionMove] {
        catalog::motion_moves()
    }

    /// Acknowledge an error, returning to idle.
    pub fn dismiss_error(&mut self) {
        if self.status.is_error() {
            self.status = ProcessingStatus::Idle;
        }
    }

    /// Discard the photo and its history; the wardrobe is kept.
    pub fn reset(&mut self) {
        self.history.reset();
        self.status = ProcessingStatus::Idle;
        self.scene_id = None;
        self.pending = None;
        info!("session reset");
    }
}

fn find_slot(slot_id: &str) -> Result<&'static Slot> {
    catalog::find_slot(slot_id).ok_or_else(|| StudioError::UnknownSlot(slot_id.to_string()))
}

fn find_item(slot: &'static Slot, item_id: &str) -> Result<&'static SelectionItem> {
    slot.items
        .iter()
        .find(|i| i.id == item_id)
        .ok_or_else(|| StudioError::UnknownItem(item_id.to_string()))
}

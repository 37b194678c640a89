//! Concurrent variant generation.
//!
//! Fans one source image out across N instructions, waits for every
//! attempt to settle, and collects the survivors in submission order.
//! Partial failure is normal — a batch only errors when nothing at all
//! came back.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::client::GenerationClient;
use crate::error::{Result, StudioError};
use crate::types::{CandidateSet, GenerationRequest};

/// Run every instruction in `request` against the client concurrently
/// and gather the results.
///
/// All attempts are awaited to completion; the first failure does not
/// cancel the rest. Successful images appear in `CandidateSet::images`
/// in the same order as their instructions, with failed attempts
/// skipped (their messages land in `CandidateSet::failures`).
///
/// # Errors
///
/// Returns [`StudioError::NoVariantsGenerated`] when the request has no
/// instructions or when every attempt failed.
pub async fn generate_variants<C: GenerationClient + ?Sized>(
    client: &C,
    request: &GenerationRequest,
) -> Result<CandidateSet> {
    if request.instructions.is_empty() {
        return Err(StudioError::NoVariantsGenerated { attempted: 0 });
    }

    let attempted = request.instructions.len();
    debug!(count = attempted, "generating variants");

    let attempts = request.instructions.iter().map(|instruction| {
        client.edit_image(
            &request.source,
            instruction,
            request.aspect_ratio.as_deref(),
        )
    });
    let settled = join_all(attempts).await;

    let mut images = Vec::with_capacity(attempted);
    let mut failures = Vec::new();
    for (i, outcome) in settled.into_iter().enumerate() {
        match outcome {
            Ok(image) => images.push(image),
            Err(e) => {
                warn!(attempt = i, error = %e, "variant attempt failed");
                failures.push(e.to_string());
            }
        }
    }

    if images.is_empty() {
        return Err(StudioError::NoVariantsGenerated { attempted });
    }

    debug!(
        succeeded = images.len(),
        failed = failures.len(),
        "variant batch settled"
    );
    Ok(CandidateSet { images, failures })
}

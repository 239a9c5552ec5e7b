//! Ordered fallback resolution.
//!
//! A request moves through `Pending → (TryingCandidate_i)* → Resolved |
//! Exhausted`. `Resolved` and `Exhausted` are terminal and mutually
//! exclusive; exactly one is reached per request, and both deliver through
//! the request's single completion callback. Malformed descriptors abort the
//! whole resolve call before that callback can fire.

use tracing::{debug, warn};

use crate::core::{Dimensions, ImageDescriptor, ResolutionRequest};
use crate::resolution::ImageBridge;
use crate::utils::ResolverResult;

/// Resolves an ordered candidate list to at most one image.
///
/// Candidates are tried strictly in order and never in parallel: only the
/// first success matters, and side-effecting fetches should not be wasted.
/// Each network-backed candidate suspends the resolution until its fetch
/// completes. The completion callback runs inline on the task awaiting
/// [`resolve`](ImageResolver::resolve), including on the synchronous
/// empty-list and asset-hit paths.
#[derive(Clone)]
pub struct ImageResolver<B> {
    bridge: B,
}

impl<B: ImageBridge> ImageResolver<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    /// The bridge this resolver delegates to.
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Resolves the request, delivering the outcome through its callback.
    ///
    /// The callback fires exactly once with `Some(image)` for the first
    /// candidate that yields a usable image, or with `None` when the
    /// candidate list is empty or every candidate missed. A malformed
    /// overlay descriptor returns `Err` instead and the callback does not
    /// fire: that is a contract violation on the caller, not a miss.
    pub async fn resolve(&self, request: ResolutionRequest<B::Image>) -> ResolverResult<()> {
        let (candidates, dimensions, on_complete) = request.into_parts();
        debug!(
            "Resolving {} candidates (dimensions: {:?})",
            candidates.len(),
            dimensions
        );

        let resolved = self.try_candidates(&candidates, dimensions).await?;
        match resolved {
            Some(_) => debug!("Resolution terminal: resolved"),
            None => debug!("Resolution terminal: exhausted after {} candidates", candidates.len()),
        }

        on_complete(resolved);
        Ok(())
    }

    /// Resolves the candidates directly, without the callback contract.
    ///
    /// Convenience for callers that are already async and just want the
    /// outcome as a value. Same fallback walk and error surface as
    /// [`resolve`](ImageResolver::resolve): `Ok(Some(image))` for the first
    /// success, `Ok(None)` on exhaustion or an empty list, `Err` on a
    /// malformed descriptor — only the delivery differs.
    pub async fn resolve_first(
        &self,
        candidates: &[String],
        dimensions: Dimensions,
    ) -> ResolverResult<Option<B::Image>> {
        self.try_candidates(candidates, dimensions).await
    }

    async fn try_candidates(
        &self,
        candidates: &[String],
        dimensions: Dimensions,
    ) -> ResolverResult<Option<B::Image>> {
        for raw in candidates {
            // Classification strictly precedes any bridge call for the candidate.
            let descriptor = match ImageDescriptor::parse(raw) {
                Ok(descriptor) => descriptor,
                Err(e) => {
                    warn!("Malformed descriptor {:?}: {}", raw, e);
                    return Err(e.into());
                }
            };

            if let Some(image) = self.try_candidate(&descriptor, dimensions).await {
                debug!("Candidate resolved: {}", descriptor);
                return Ok(Some(image));
            }
            debug!("Candidate missed, advancing: {}", descriptor);
        }

        Ok(None)
    }

    async fn try_candidate(
        &self,
        descriptor: &ImageDescriptor,
        dimensions: Dimensions,
    ) -> Option<B::Image> {
        match descriptor {
            ImageDescriptor::Asset { name } => self.bridge.lookup_asset(name),
            ImageDescriptor::Network { url } => self.bridge.fetch(url, dimensions).await,
            ImageDescriptor::Overlay { direction, url } => {
                let image = self.bridge.fetch(url, dimensions).await?;
                Some(self.bridge.apply_overlay(image, *direction))
            }
        }
    }
}

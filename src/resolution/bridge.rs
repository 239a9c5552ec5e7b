//! External collaborator seam for the resolver.

use std::future::Future;

use crate::core::{Dimensions, OverlayDirection};

/// Facilities the resolver delegates to: bundled-asset lookup, network
/// fetch, and overlay compositing.
///
/// The resolver owns only the fallback policy; everything that actually
/// produces or transforms pixels lives behind this trait. Implementations
/// must be safe for concurrent use — multiple in-flight requests may share
/// one bridge.
///
/// `fetch` must complete exactly once per call. Returning `None` from
/// `lookup_asset` or `fetch` is a candidate miss, not an error; the resolver
/// absorbs it and advances to the next candidate. No timeout is imposed
/// here: a fetch that never completes stalls its request, so callers needing
/// deadlines should wrap their bridge.
pub trait ImageBridge: Send + Sync {
    /// Opaque image handle produced by this bridge.
    type Image: Send;

    /// Looks up a bundled image by name. Synchronous, no side effects.
    fn lookup_asset(&self, name: &str) -> Option<Self::Image>;

    /// Fetches an image over the network at the requested dimensions.
    ///
    /// Implementations may use `async fn`; the trait is declared with an
    /// explicit future so the returned future is `Send` and requests can be
    /// driven from spawned tasks.
    fn fetch(
        &self,
        url: &str,
        dimensions: Dimensions,
    ) -> impl Future<Output = Option<Self::Image>> + Send;

    /// Composites the directional overlay onto a fetched image.
    /// Synchronous, pure transform.
    fn apply_overlay(&self, image: Self::Image, direction: OverlayDirection) -> Self::Image;
}

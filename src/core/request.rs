//! Resolution request definition.

use std::fmt;

use crate::core::Dimensions;

/// A single-use request to resolve one image from an ordered candidate list.
///
/// Candidates are raw descriptor strings in first-to-last priority order.
/// The completion callback is consumed exactly once per request: with the
/// resolved image on success, or `None` when every candidate missed. The
/// request holds no state beyond the one resolution attempt.
pub struct ResolutionRequest<I> {
    candidates: Vec<String>,
    dimensions: Dimensions,
    on_complete: Box<dyn FnOnce(Option<I>) + Send>,
}

impl<I> ResolutionRequest<I> {
    /// Creates a request for the given candidates and requested dimensions.
    pub fn new<C, S, F>(candidates: C, dimensions: Dimensions, on_complete: F) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(Option<I>) + Send + 'static,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            dimensions,
            on_complete: Box::new(on_complete),
        }
    }

    /// Creates a request with unspecified (intrinsic) dimensions.
    pub fn with_intrinsic_size<C, S, F>(candidates: C, on_complete: F) -> Self
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnOnce(Option<I>) + Send + 'static,
    {
        Self::new(candidates, Dimensions::UNSPECIFIED, on_complete)
    }

    /// Candidate descriptor strings in priority order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Requested dimensions forwarded to network fetches.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub(crate) fn into_parts(self) -> (Vec<String>, Dimensions, Box<dyn FnOnce(Option<I>) + Send>) {
        (self.candidates, self.dimensions, self.on_complete)
    }
}

impl<I> fmt::Debug for ResolutionRequest<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionRequest")
            .field("candidates", &self.candidates)
            .field("dimensions", &self.dimensions)
            .finish_non_exhaustive()
    }
}

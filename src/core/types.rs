//! Core types for requested image dimensions.

use serde::{Deserialize, Serialize};

/// Requested pixel dimensions for a resolution attempt.
///
/// Each axis is either a positive pixel count or `None`, meaning the fetch
/// facility should fall back to the image's intrinsic size on that axis.
/// Forwarded verbatim to every network fetch issued for the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Target width in pixels
    pub width: Option<u32>,
    /// Target height in pixels
    pub height: Option<u32>,
}

impl Dimensions {
    /// Both axes unspecified: intrinsic sizing.
    pub const UNSPECIFIED: Dimensions = Dimensions {
        width: None,
        height: None,
    };

    /// Creates dimensions with both axes specified.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::UNSPECIFIED
    }
}

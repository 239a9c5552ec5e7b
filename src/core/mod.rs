//! Core data model for image resolution.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`ImageDescriptor`]: A classified image candidate
//! - [`OverlayDirection`]: Edge on which an overlay is composited
//! - [`Dimensions`]: Requested pixel dimensions
//! - [`ResolutionRequest`]: One resolution attempt with its completion callback

mod descriptor;
mod request;
mod types;

pub use descriptor::{ASSET_PREFIX, ImageDescriptor, OVERLAY_PREFIX, OverlayDirection};
pub use request::ResolutionRequest;
pub use types::Dimensions;

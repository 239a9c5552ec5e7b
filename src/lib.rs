// Module declarations in dependency order
pub mod core;
pub mod resolution;
pub mod utils;

// Public exports for external consumers
pub use core::{Dimensions, ImageDescriptor, OverlayDirection, ResolutionRequest};
pub use resolution::{ImageBridge, ImageResolver};
pub use utils::{DescriptorError, ResolverError, ResolverResult};

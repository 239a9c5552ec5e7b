pub mod error;

pub use error::{DescriptorError, ResolverError, ResolverResult};

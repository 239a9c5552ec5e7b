mod bridge;
mod resolver;

pub use bridge::ImageBridge;
pub use resolver::ImageResolver;

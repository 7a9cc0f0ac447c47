//! Terminal layer: raw-mode session handling and frame rendering.

pub mod renderer;
pub mod session;

pub use renderer::FrameRenderer;
pub use session::RawTerminal;

pub mod draw_buffer;
pub mod traits;

// Re-export key types for convenient access
pub use draw_buffer::{DrawBuffer, DrawCommand, Primitive};
pub use traits::Canvas;

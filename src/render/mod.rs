//! Plot output: an animated HTML page and optional per-frame PNG images.

pub mod html;
pub mod png;

pub use html::{generate_html, write_html};
pub use png::{frame_file_name, write_png_frames};

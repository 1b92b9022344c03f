//! Reusable UI components.

pub mod status;

pub use status::render_status;

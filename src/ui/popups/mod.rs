//! Modal overlays.

pub mod profile_form;

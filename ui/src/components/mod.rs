//! The components module contains all shared components for our app.
pub mod image_toggle;
pub mod map_view;
pub mod pico;

//! Temperature colour gradients.
//!
//! A fixed table of colour stops anchors colours to temperatures. For a
//! display span the stops covering it are selected, and any position inside
//! that span can be resolved to an interpolated colour.

pub mod color;
pub mod resolver;
pub mod stops;

pub use color::Rgb;
pub use resolver::{calculate_rgb, resolve_gradient, resolve_range, PickIndex};
pub use stops::{gradient_range, ColorStop, TEMPERATURE_STOPS};

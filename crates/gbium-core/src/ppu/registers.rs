//! Typed views over whole PPU register values.
//!
//! The bank stores raw `u16`s; these wrappers decode the bit layouts that the
//! background, window and blend stages consume. The concrete layouts live in
//! submodules for clarity.

mod background;
mod blend;
mod display;
mod mosaic;
mod window;

pub use background::BgControl;
pub use blend::{BlendAlpha, BlendControl, BlendEffect, BlendTarget, Brightness};
pub use display::{DisplayControl, DisplayStatus};
pub use mosaic::Mosaic;
pub use window::{WindowBounds, WindowControl, WindowEnable};

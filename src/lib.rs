//! Paged monochrome frame buffer driver for SH1106-class OLED panels.
//!
//! Drawing happens in an off-screen buffer laid out the way the controller
//! stores pixels (8-row pages, one byte per column). A dirty region tracks
//! what changed so [`display::Sh1106::flush`] only sends the affected page rows.

pub mod config;
pub mod display;
pub mod logging;

#[cfg(test)]
mod tests;

pub use config::DisplayConfig;
pub use display::colors::Color;
pub use display::dirty_rect::DirtyRegion;
pub use display::flush::FlushStats;
pub use display::font::{Font, FONTS};
pub use display::frame_buffer::FrameBuffer;
pub use display::panel::PanelVariant;
pub use display::simulator::PanelSimulator;
pub use display::transport::{I2cTransport, Transport};
pub use display::Sh1106;

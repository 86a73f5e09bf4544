pub mod colors;
pub mod commands;
pub mod dirty_rect;
pub mod flush;
pub mod font;
pub mod fonts;
pub mod frame_buffer;
pub mod graphics;
pub mod panel;
pub mod primitives;
pub mod simulator;
pub mod text;
pub mod transport;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::config::DisplayConfig;

use self::colors::Color;
use self::commands::*;
use self::dirty_rect::DirtyRegion;
use self::font::{font_by_index, Font};
use self::frame_buffer::FrameBuffer;
use self::panel::PanelVariant;
use self::transport::Transport;

/// SH1106 driver: frame buffer, active font and the bus it talks over.
///
/// Drawing only touches the in-memory buffer; nothing reaches the panel
/// until [`Sh1106::flush`]. `T` may be an owned transport or `&mut` to one.
pub struct Sh1106<T: Transport> {
    transport: T,
    address: u8,
    panel: PanelVariant,
    frame: FrameBuffer,
    font: Option<&'static Font>,
}

impl<T: Transport> Sh1106<T> {
    /// Bring up the panel described by `config`.
    ///
    /// Any transport failure during the init sequence aborts construction and
    /// is returned as an error; init writes are never ignored.
    pub fn new(transport: T, config: &DisplayConfig) -> Result<Self> {
        config.validate().context("invalid display config")?;

        let panel = config.panel;
        info!(
            "Initializing SH1106 {}x{} at 0x{:02x}...",
            panel.width(),
            panel.height(),
            config.address
        );

        let frame = FrameBuffer::new(panel.width(), panel.height())?;
        let mut display = Self {
            transport,
            address: config.address,
            panel,
            frame,
            font: None,
        };

        display
            .send_commands(panel.init_sequence())
            .context("failed to send init sequence")?;

        display.frame.clear();
        display.flush_strict().context("failed to clear display RAM")?;

        display.select_font(config.font as usize);
        display.command(CMD_DEACTIVATE_SCROLL)?;
        display.set_display_on(true)?;

        if let Some(contrast) = config.contrast {
            display.set_contrast(contrast)?;
        }
        if config.invert {
            display.invert_display(true)?;
        }
        if config.flip_horizontal || config.flip_vertical {
            display.flip_display(config.flip_horizontal, config.flip_vertical)?;
        }

        info!("Display initialized successfully");
        Ok(display)
    }

    /// Power the panel down and hand the transport back.
    ///
    /// Bus errors here are logged, not returned; the buffer is released either way.
    pub fn close(mut self) -> T {
        info!("Shutting down display at 0x{:02x}", self.address);
        for cmd in [CMD_DISPLAY_OFF, CMD_CHARGE_PUMP, CHARGE_PUMP_OFF] {
            if let Err(e) = self.command(cmd) {
                warn!("Power-down command 0x{:02X} failed: {:?}", cmd, e);
            }
        }
        self.transport
    }

    pub(crate) fn command(&mut self, cmd: u8) -> Result<()> {
        self.transport.write_register_byte(self.address, REG_COMMAND, cmd)
    }

    fn send_commands(&mut self, bytes: &[u8]) -> Result<()> {
        debug!("Sending {} command bytes", bytes.len());
        for &b in bytes {
            self.command(b)?;
        }
        Ok(())
    }

    // Controller control

    pub fn invert_display(&mut self, invert: bool) -> Result<()> {
        self.command(if invert { CMD_INVERT_DISPLAY } else { CMD_NORMAL_DISPLAY })
    }

    /// Mirror the image. Horizontal flip is bit 5 of the COM pins setting,
    /// vertical flip picks the COM scan direction.
    pub fn flip_display(&mut self, horizontal: bool, vertical: bool) -> Result<()> {
        let pins = self.panel.com_pins() | ((horizontal as u8) << 5);
        let scan = if vertical { CMD_COM_SCAN_INC } else { CMD_COM_SCAN_DEC };
        self.send_commands(&[CMD_SET_COM_PINS, pins, scan])
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<()> {
        self.send_commands(&[CMD_SET_CONTRAST, contrast])
    }

    pub fn set_display_on(&mut self, on: bool) -> Result<()> {
        self.command(if on { CMD_DISPLAY_ON } else { CMD_DISPLAY_OFF })
    }

    // Accessors

    pub fn width(&self) -> u16 {
        self.frame.width()
    }

    pub fn height(&self) -> u16 {
        self.frame.height()
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn panel(&self) -> PanelVariant {
        self.panel
    }

    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn dirty_region(&self) -> DirtyRegion {
        self.frame.dirty_region()
    }

    pub fn font(&self) -> Option<&'static Font> {
        self.font
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // Buffer

    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Copy a pre-rendered frame into the buffer, truncating oversized input
    pub fn update_buffer(&mut self, data: &[u8]) -> usize {
        self.frame.replace(data)
    }

    // Primitives

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.frame.set_pixel(x, y, color);
    }

    pub fn draw_hline(&mut self, x: i32, y: i32, w: u16, color: Color) {
        self.frame.draw_hline(x, y, w, color);
    }

    pub fn draw_vline(&mut self, x: i32, y: i32, h: u16, color: Color) {
        self.frame.draw_vline(x, y, h, color);
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, w: u16, h: u16, color: Color) {
        self.frame.draw_rect(x, y, w, h, color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u16, h: u16, color: Color) {
        self.frame.fill_rect(x, y, w, h, color);
    }

    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: u16, color: Color) {
        self.frame.draw_circle(x0, y0, r, color);
    }

    pub fn fill_circle(&mut self, x0: i32, y0: i32, r: u16, color: Color) {
        self.frame.fill_circle(x0, y0, r, color);
    }

    // Text

    /// Bind a registered font; unknown indices leave the current font in place
    pub fn select_font(&mut self, index: usize) {
        match font_by_index(index) {
            Some(font) => {
                debug!("Selected font {} ({})", index, font.name);
                self.font = Some(font);
            }
            None => debug!("Ignoring unknown font index {}", index),
        }
    }

    /// Draw one character; returns its width, 0 without a font
    pub fn draw_char(&mut self, x: i32, y: i32, c: char, foreground: Color, background: Color) -> u32 {
        match self.font {
            Some(font) => self.frame.draw_char(font, x, y, c, foreground, background),
            None => 0,
        }
    }

    /// White text on a transparent background
    pub fn draw_string(&mut self, x: i32, y: i32, text: &str) -> u32 {
        self.draw_string_color(x, y, text, Color::White, Color::Transparent)
    }

    pub fn draw_string_color(
        &mut self,
        x: i32,
        y: i32,
        text: &str,
        foreground: Color,
        background: Color,
    ) -> u32 {
        match self.font {
            Some(font) => self.frame.draw_string(font, x, y, text, foreground, background),
            None => 0,
        }
    }

    pub fn measure_string(&self, text: &str) -> u32 {
        self.font.map_or(0, |font| font.measure(text))
    }

    pub fn font_height(&self) -> u32 {
        self.font.map_or(0, |font| font.height as u32)
    }

    pub fn font_spacing(&self) -> u32 {
        self.font.map_or(0, |font| font.spacing as u32)
    }
}

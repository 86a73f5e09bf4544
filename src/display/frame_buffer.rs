// Off-screen 1-bit frame buffer in controller page layout
// Each byte holds 8 vertically stacked pixels of one column (one "page" row).

use anyhow::{anyhow, bail, Result};
use log::{debug, info};

use super::dirty_rect::DirtyRegion;

/// Packed pixel store plus the region modified since the last flush.
///
/// Pixel `(x, y)` lives in byte `x + (y / 8) * width`, bit `y & 7`.
pub struct FrameBuffer {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
    pub(crate) dirty: DirtyRegion,
}

impl FrameBuffer {
    /// Allocate a zeroed buffer. Height must be a whole number of pages.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("frame buffer dimensions must be non-zero ({}x{})", width, height);
        }
        if height % 8 != 0 {
            bail!("frame buffer height {} is not a multiple of 8", height);
        }

        let size = width as usize * height as usize / 8;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(size)
            .map_err(|e| anyhow!("failed to allocate {} byte frame buffer: {}", size, e))?;
        pixels.resize(size, 0);

        info!("Created frame buffer: {}x{} ({} bytes)", width, height, size);

        Ok(Self {
            width,
            height,
            pixels,
            dirty: DirtyRegion::empty(),
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Buffer size in bytes (`width * height / 8`)
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Byte index of an in-bounds pixel
    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        x + (y / 8) * self.width as usize
    }

    pub(crate) fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Read back one pixel; `None` outside the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let byte = self.pixels[self.index(x as usize, y as usize)];
        Some(byte & (1 << (y & 7)) != 0)
    }

    /// Bytes of one page row between two inclusive columns
    pub fn page_row(&self, page: u16, left: u16, right: u16) -> &[u8] {
        let start = page as usize * self.width as usize + left as usize;
        let end = page as usize * self.width as usize + right as usize + 1;
        &self.pixels[start..end]
    }

    /// Zero every byte and mark the whole frame dirty
    pub fn clear(&mut self) {
        self.pixels.fill(0);
        self.dirty = DirtyRegion::full(self.width, self.height);
        debug!("Cleared frame buffer");
    }

    /// Copy a pre-rendered frame verbatim, truncating oversized input.
    ///
    /// Marks the whole frame dirty and returns the number of bytes copied.
    pub fn replace(&mut self, data: &[u8]) -> usize {
        let count = data.len().min(self.pixels.len());
        self.pixels[..count].copy_from_slice(&data[..count]);
        self.dirty = DirtyRegion::full(self.width, self.height);
        if count < data.len() {
            debug!("Truncated {} byte frame to {} bytes", data.len(), count);
        }
        count
    }

    pub fn dirty_region(&self) -> DirtyRegion {
        self.dirty
    }

    /// Return the dirty region and reset it to empty
    pub fn take_dirty(&mut self) -> DirtyRegion {
        let region = self.dirty;
        self.dirty.reset();
        region
    }
}

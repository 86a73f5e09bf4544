// Flush protocol: push the dirty part of the frame buffer to the panel

use anyhow::Result;
use log::{debug, warn};

use super::commands::{CMD_COLUMN_ADDR, CMD_PAGE_ADDR, REG_DATA};
use super::dirty_rect::DirtyRegion;
use super::transport::Transport;
use super::Sh1106;

/// What one flush put on the bus, including how many writes failed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Data bursts that went out
    pub bursts: usize,
    pub bytes: usize,
    /// Writes the transport rejected
    pub failures: usize,
}

impl<T: Transport> Sh1106<T> {
    /// Send buffered changes to the panel.
    ///
    /// With `force`, or when the dirty region already spans the panel, the
    /// whole buffer goes out in one burst. Otherwise the dirty columns are
    /// sent one page row at a time. Transport failures are logged and
    /// counted, never retried, and the dirty region is reset regardless.
    pub fn flush(&mut self, force: bool) -> FlushStats {
        let region = self.frame.take_dirty();
        let mut stats = FlushStats::default();

        if force || region.covers(self.width(), self.height()) {
            match self.write_full_frame() {
                Ok(bytes) => {
                    stats.bursts = 1;
                    stats.bytes = bytes;
                }
                Err(e) => {
                    warn!("Full frame flush failed: {:?}", e);
                    stats.failures = 1;
                }
            }
        } else if !region.is_empty() {
            self.write_region(&region, &mut stats);
        }

        if stats.failures > 0 {
            warn!("Flush finished with {} failed writes", stats.failures);
        }
        stats
    }

    /// Full-frame flush that reports the first transport error
    pub(crate) fn flush_strict(&mut self) -> Result<()> {
        self.frame.take_dirty();
        self.write_full_frame().map(|_| ())
    }

    fn write_full_frame(&mut self) -> Result<usize> {
        let right = self.width() - 1;
        let last_page = self.frame.pages() - 1;
        self.set_window(0, right, 0, last_page)?;
        self.transport
            .write_register_burst(self.address, REG_DATA, self.frame.as_bytes())?;
        Ok(self.frame.len())
    }

    fn write_region(&mut self, region: &DirtyRegion, stats: &mut FlushStats) {
        let Some((page_start, page_end)) = region.pages() else {
            return;
        };

        debug!(
            "Flushing columns {}..={} pages {}..={}",
            region.left, region.right, page_start, page_end
        );

        // Data written under a stale window would land in the wrong place
        if let Err(e) = self.set_window(region.left, region.right, page_start, page_end) {
            warn!("Failed to set flush window: {:?}", e);
            stats.failures += 1;
            return;
        }

        for page in page_start..=page_end {
            let row = self.frame.page_row(page, region.left, region.right);
            match self.transport.write_register_burst(self.address, REG_DATA, row) {
                Ok(()) => {
                    stats.bursts += 1;
                    stats.bytes += row.len();
                }
                Err(e) => {
                    warn!("Page {} burst failed: {:?}", page, e);
                    stats.failures += 1;
                }
            }
        }
    }

    /// Column and page address window for the following data bytes
    fn set_window(&mut self, left: u16, right: u16, page_start: u16, page_end: u16) -> Result<()> {
        for cmd in [
            CMD_COLUMN_ADDR,
            left as u8,
            right as u8,
            CMD_PAGE_ADDR,
            page_start as u8,
            page_end as u8,
        ] {
            self.command(cmd)?;
        }
        Ok(())
    }
}

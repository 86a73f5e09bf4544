//! In-memory SH1106 model for host runs and tests
//!
//! Implements [`Transport`] by decoding the command stream the way the
//! controller does: opcodes with their argument bytes, a column/page
//! window, and a write cursor that wraps inside that window. Every bus
//! write is also recorded so callers can inspect the exact traffic.

use anyhow::{bail, Result};
use log::{debug, info};

use super::commands::*;
use super::transport::Transport;

/// One recorded bus write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusWrite {
    Command { address: u8, value: u8 },
    Data { address: u8, bytes: Vec<u8> },
}

pub struct PanelSimulator {
    address: u8,
    width: u16,
    pages: u16,
    ram: Vec<u8>,

    // Opcode waiting for argument bytes
    pending: Option<(u8, Vec<u8>)>,

    column_start: u16,
    column_end: u16,
    page_start: u16,
    page_end: u16,
    column: u16,
    page: u16,

    display_on: bool,
    inverted: bool,
    contrast: u8,
    com_scan_dec: bool,
    com_pins: u8,
    charge_pump: u8,

    trace: Vec<BusWrite>,
    fail_writes: bool,
}

impl PanelSimulator {
    /// Simulated panel answering at the default address
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_address(DEFAULT_ADDRESS, width, height)
    }

    pub fn with_address(address: u8, width: u16, height: u16) -> Self {
        let pages = height / 8;
        Self {
            address,
            width,
            pages,
            ram: vec![0; width as usize * pages as usize],
            pending: None,
            column_start: 0,
            column_end: width.saturating_sub(1),
            page_start: 0,
            page_end: pages.saturating_sub(1),
            column: 0,
            page: 0,
            display_on: false,
            inverted: false,
            contrast: 0x7F,
            com_scan_dec: false,
            com_pins: 0x12,
            charge_pump: 0,
            trace: Vec::new(),
            fail_writes: false,
        }
    }

    /// Make every following write fail, as a disconnected bus would
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub fn pixel(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y / 8 >= self.pages {
            return false;
        }
        let byte = self.ram[x as usize + (y / 8) as usize * self.width as usize];
        byte & (1 << (y & 7)) != 0
    }

    pub fn is_display_on(&self) -> bool {
        self.display_on
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// COM output scan direction is reversed (rows drawn bottom-up)
    pub fn is_com_scan_reversed(&self) -> bool {
        self.com_scan_dec
    }

    pub fn com_pins(&self) -> u8 {
        self.com_pins
    }

    pub fn charge_pump(&self) -> u8 {
        self.charge_pump
    }

    /// Current column/page window, both inclusive
    pub fn window(&self) -> ((u16, u16), (u16, u16)) {
        ((self.column_start, self.column_end), (self.page_start, self.page_end))
    }

    pub fn trace(&self) -> &[BusWrite] {
        &self.trace
    }

    pub fn take_trace(&mut self) -> Vec<BusWrite> {
        std::mem::take(&mut self.trace)
    }

    pub fn clear_trace(&mut self) {
        self.trace.clear();
    }

    /// All command bytes in order, opcodes and arguments alike
    pub fn commands(&self) -> Vec<u8> {
        self.trace
            .iter()
            .filter_map(|w| match w {
                BusWrite::Command { value, .. } => Some(*value),
                BusWrite::Data { .. } => None,
            })
            .collect()
    }

    /// Payloads of all data bursts in order
    pub fn data_writes(&self) -> Vec<&[u8]> {
        self.trace
            .iter()
            .filter_map(|w| match w {
                BusWrite::Data { bytes, .. } => Some(bytes.as_slice()),
                BusWrite::Command { .. } => None,
            })
            .collect()
    }

    /// Panel contents, one text line per pixel row
    pub fn render_ascii(&self) -> String {
        let height = self.pages * 8;
        let mut out = String::with_capacity((self.width as usize + 1) * height as usize);
        for y in 0..height {
            for x in 0..self.width {
                out.push(if self.pixel(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }

    /// Log the recorded traffic with decoded command names
    pub fn print_trace_summary(&self) {
        info!("=== SH1106 bus trace ({} writes) ===", self.trace.len());
        let mut pending = 0usize;
        for (i, write) in self.trace.iter().enumerate() {
            match write {
                BusWrite::Command { value, .. } if pending > 0 => {
                    pending -= 1;
                    info!("{:4}:        arg 0x{:02X}", i, value);
                }
                BusWrite::Command { value, .. } => {
                    pending = argument_count(*value);
                    info!("{:4}: CMD   0x{:02X} ({})", i, value, command_name(*value));
                }
                BusWrite::Data { bytes, .. } => {
                    info!("{:4}: DATA  {} bytes", i, bytes.len());
                }
            }
        }
    }

    fn check_address(&self, address: u8) -> Result<()> {
        if self.fail_writes {
            bail!("simulated bus failure");
        }
        if address != self.address {
            bail!("no device acknowledged address 0x{:02x}", address);
        }
        Ok(())
    }

    fn command_byte(&mut self, value: u8) {
        let (opcode, args) = match self.pending.take() {
            Some((opcode, mut args)) => {
                args.push(value);
                (opcode, args)
            }
            None => (value, Vec::new()),
        };

        if args.len() < argument_count(opcode) {
            self.pending = Some((opcode, args));
        } else {
            self.execute(opcode, &args);
        }
    }

    fn execute(&mut self, opcode: u8, args: &[u8]) {
        debug!("sim: {} {:02X?}", command_name(opcode), args);
        match opcode {
            CMD_COLUMN_ADDR => {
                self.column_start = (args[0] as u16).min(self.width.saturating_sub(1));
                self.column_end = (args[1] as u16).min(self.width.saturating_sub(1));
                self.column = self.column_start;
            }
            CMD_PAGE_ADDR => {
                self.page_start = (args[0] as u16).min(self.pages.saturating_sub(1));
                self.page_end = (args[1] as u16).min(self.pages.saturating_sub(1));
                self.page = self.page_start;
            }
            CMD_SET_CONTRAST => self.contrast = args[0],
            CMD_CHARGE_PUMP => self.charge_pump = args[0],
            CMD_SET_COM_PINS => self.com_pins = args[0],
            CMD_NORMAL_DISPLAY => self.inverted = false,
            CMD_INVERT_DISPLAY => self.inverted = true,
            CMD_DISPLAY_ON => self.display_on = true,
            CMD_DISPLAY_OFF => self.display_on = false,
            CMD_COM_SCAN_INC => self.com_scan_dec = false,
            CMD_COM_SCAN_DEC => self.com_scan_dec = true,
            _ => {}
        }
    }

    fn write_data(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            let index = self.column as usize + self.page as usize * self.width as usize;
            if let Some(slot) = self.ram.get_mut(index) {
                *slot = byte;
            }
            // Horizontal addressing: advance the column, wrap to the next page
            if self.column >= self.column_end {
                self.column = self.column_start;
                self.page = if self.page >= self.page_end {
                    self.page_start
                } else {
                    self.page + 1
                };
            } else {
                self.column += 1;
            }
        }
    }
}

impl Transport for PanelSimulator {
    fn write_register_byte(&mut self, address: u8, register: u8, value: u8) -> Result<()> {
        self.check_address(address)?;
        match register {
            REG_COMMAND => {
                self.trace.push(BusWrite::Command { address, value });
                self.command_byte(value);
            }
            REG_DATA => {
                self.trace.push(BusWrite::Data {
                    address,
                    bytes: vec![value],
                });
                self.write_data(&[value]);
            }
            other => bail!("unsupported control byte 0x{:02x}", other),
        }
        Ok(())
    }

    fn write_register_burst(&mut self, address: u8, register: u8, bytes: &[u8]) -> Result<()> {
        self.check_address(address)?;
        match register {
            REG_DATA => {
                self.trace.push(BusWrite::Data {
                    address,
                    bytes: bytes.to_vec(),
                });
                self.write_data(bytes);
            }
            REG_COMMAND => {
                for &value in bytes {
                    self.trace.push(BusWrite::Command { address, value });
                    self.command_byte(value);
                }
            }
            other => bail!("unsupported control byte 0x{:02x}", other),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(sim: &mut PanelSimulator, bytes: &[u8]) {
        for &b in bytes {
            sim.write_register_byte(DEFAULT_ADDRESS, REG_COMMAND, b).unwrap();
        }
    }

    #[test]
    fn test_window_and_cursor_wrap() {
        let mut sim = PanelSimulator::new(8, 16);
        command(&mut sim, &[CMD_COLUMN_ADDR, 2, 3, CMD_PAGE_ADDR, 0, 1]);
        assert_eq!(sim.window(), ((2, 3), (0, 1)));

        sim.write_register_burst(DEFAULT_ADDRESS, REG_DATA, &[1, 2, 3, 4]).unwrap();
        assert_eq!(&sim.ram()[0..8], &[0, 0, 1, 2, 0, 0, 0, 0]);
        assert_eq!(&sim.ram()[8..16], &[0, 0, 3, 4, 0, 0, 0, 0]);
    }

    #[test]
    fn test_argument_equal_to_opcode_is_not_reparsed() {
        let mut sim = PanelSimulator::new(128, 64);
        // contrast value 0xAF must not switch the display on
        command(&mut sim, &[CMD_SET_CONTRAST, CMD_DISPLAY_ON]);
        assert_eq!(sim.contrast(), 0xAF);
        assert!(!sim.is_display_on());
    }

    #[test]
    fn test_display_state_commands() {
        let mut sim = PanelSimulator::new(128, 64);
        command(&mut sim, &[CMD_DISPLAY_ON, CMD_INVERT_DISPLAY, CMD_COM_SCAN_DEC]);
        assert!(sim.is_display_on());
        assert!(sim.is_inverted());
        assert!(sim.is_com_scan_reversed());
        command(&mut sim, &[CMD_NORMAL_DISPLAY, CMD_DISPLAY_OFF]);
        assert!(!sim.is_inverted());
        assert!(!sim.is_display_on());
    }

    #[test]
    fn test_wrong_address_and_register_are_errors() {
        let mut sim = PanelSimulator::new(128, 64);
        assert!(sim.write_register_byte(0x3D, REG_COMMAND, CMD_DISPLAY_ON).is_err());
        assert!(sim.write_register_byte(DEFAULT_ADDRESS, 0x00, 0).is_err());
        assert!(sim.trace().is_empty());
    }

    #[test]
    fn test_failing_bus() {
        let mut sim = PanelSimulator::new(128, 64);
        sim.fail_writes(true);
        assert!(sim.write_register_burst(DEFAULT_ADDRESS, REG_DATA, &[0xFF]).is_err());
        assert!(sim.ram().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_trace_accessors() {
        let mut sim = PanelSimulator::new(8, 8);
        command(&mut sim, &[CMD_DISPLAY_ON]);
        sim.write_register_burst(DEFAULT_ADDRESS, REG_DATA, &[0x01]).unwrap();
        assert_eq!(sim.commands(), vec![CMD_DISPLAY_ON]);
        assert_eq!(sim.data_writes(), vec![&[0x01][..]]);
        assert_eq!(sim.take_trace().len(), 2);
        assert!(sim.trace().is_empty());
    }

    #[test]
    fn test_render_ascii() {
        let mut sim = PanelSimulator::new(2, 8);
        sim.write_register_burst(DEFAULT_ADDRESS, REG_DATA, &[0b0000_0001, 0b1000_0000]).unwrap();
        let art = sim.render_ascii();
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "#.");
        assert_eq!(lines[7], ".#");
    }
}

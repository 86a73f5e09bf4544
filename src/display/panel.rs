// Known panel variants and their controller init sequences

use serde::{Deserialize, Serialize};

use super::commands::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelVariant {
    #[default]
    Oled128x64,
    Oled128x32,
    Oled96x16,
}

const INIT_128X64: &[u8] = &[
    CMD_DISPLAY_OFF,
    CMD_SET_DISPLAY_CLOCK_DIV, 0x80,
    CMD_SET_MULTIPLEX, 0x3F,
    CMD_SET_DISPLAY_OFFSET, 0x00,
    CMD_SET_START_LINE,
    CMD_CHARGE_PUMP, CHARGE_PUMP_ENABLE,
    CMD_MEMORY_MODE, 0x00,
    CMD_SEG_REMAP | 0x01,
    CMD_COM_SCAN_DEC,
    CMD_SET_COM_PINS, 0x12,
    CMD_SET_CONTRAST, 0xCF,
    CMD_SET_PRECHARGE, 0xF1,
    CMD_SET_VCOM_DETECT, 0x40,
    CMD_DISPLAY_ALL_ON_RESUME,
    CMD_NORMAL_DISPLAY,
];

const INIT_128X32: &[u8] = &[
    CMD_DISPLAY_OFF,
    CMD_SET_DISPLAY_CLOCK_DIV, 0x80,
    CMD_SET_MULTIPLEX, 0x1F,
    CMD_SET_DISPLAY_OFFSET, 0x00,
    CMD_SET_START_LINE,
    CMD_CHARGE_PUMP, CHARGE_PUMP_ENABLE,
    CMD_MEMORY_MODE, 0x00,
    CMD_SEG_REMAP | 0x01,
    CMD_COM_SCAN_DEC,
    CMD_SET_COM_PINS, 0x02,
    CMD_SET_CONTRAST, 0x8F,
    CMD_SET_PRECHARGE, 0xF1,
    CMD_SET_VCOM_DETECT, 0x40,
    CMD_DISPLAY_ALL_ON_RESUME,
    CMD_NORMAL_DISPLAY,
];

const INIT_96X16: &[u8] = &[
    CMD_DISPLAY_OFF,
    CMD_SET_DISPLAY_CLOCK_DIV, 0x80,
    CMD_SET_MULTIPLEX, 0x0F,
    CMD_SET_DISPLAY_OFFSET, 0x00,
    CMD_SET_START_LINE,
    CMD_CHARGE_PUMP, CHARGE_PUMP_ENABLE,
    CMD_MEMORY_MODE, 0x00,
    CMD_SEG_REMAP | 0x01,
    CMD_COM_SCAN_DEC,
    CMD_SET_COM_PINS, 0x02,
    CMD_SET_CONTRAST, 0xAF,
    CMD_SET_PRECHARGE, 0xF1,
    CMD_SET_VCOM_DETECT, 0x40,
    CMD_DISPLAY_ALL_ON_RESUME,
    CMD_NORMAL_DISPLAY,
];

impl PanelVariant {
    pub fn width(self) -> u16 {
        match self {
            PanelVariant::Oled128x64 | PanelVariant::Oled128x32 => 128,
            PanelVariant::Oled96x16 => 96,
        }
    }

    pub fn height(self) -> u16 {
        match self {
            PanelVariant::Oled128x64 => 64,
            PanelVariant::Oled128x32 => 32,
            PanelVariant::Oled96x16 => 16,
        }
    }

    /// Command bytes sent once at power-up, opcodes and arguments inline
    pub fn init_sequence(self) -> &'static [u8] {
        match self {
            PanelVariant::Oled128x64 => INIT_128X64,
            PanelVariant::Oled128x32 => INIT_128X32,
            PanelVariant::Oled96x16 => INIT_96X16,
        }
    }

    /// COM pins configuration, also reused by the flip command
    pub fn com_pins(self) -> u8 {
        if self.height() < 64 {
            0x02
        } else {
            0x12
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry() {
        assert_eq!((PanelVariant::Oled128x64.width(), PanelVariant::Oled128x64.height()), (128, 64));
        assert_eq!((PanelVariant::Oled128x32.width(), PanelVariant::Oled128x32.height()), (128, 32));
        assert_eq!((PanelVariant::Oled96x16.width(), PanelVariant::Oled96x16.height()), (96, 16));
    }

    #[test]
    fn test_multiplex_matches_height() {
        for panel in [PanelVariant::Oled128x64, PanelVariant::Oled128x32, PanelVariant::Oled96x16] {
            let seq = panel.init_sequence();
            let pos = seq.iter().position(|&b| b == CMD_SET_MULTIPLEX).unwrap();
            assert_eq!(seq[pos + 1] as u16, panel.height() - 1);
            assert_eq!(seq[0], CMD_DISPLAY_OFF);
        }
    }

    #[test]
    fn test_sequences_are_well_formed() {
        // Walking opcode + argument counts must land exactly on the end
        for panel in [PanelVariant::Oled128x64, PanelVariant::Oled128x32, PanelVariant::Oled96x16] {
            let seq = panel.init_sequence();
            let mut i = 0;
            while i < seq.len() {
                i += 1 + argument_count(seq[i]);
            }
            assert_eq!(i, seq.len(), "{:?}", panel);
        }
    }

    #[test]
    fn test_com_pins() {
        assert_eq!(PanelVariant::Oled128x64.com_pins(), 0x12);
        assert_eq!(PanelVariant::Oled96x16.com_pins(), 0x02);
    }
}

// SH1106 / SSD1306 controller command set

/// I2C control byte announcing a single command byte
pub const REG_COMMAND: u8 = 0x80;
/// I2C control byte announcing a run of display data
pub const REG_DATA: u8 = 0x40;

pub const DEFAULT_ADDRESS: u8 = 0x3C;

pub const CMD_MEMORY_MODE: u8 = 0x20;
pub const CMD_COLUMN_ADDR: u8 = 0x21;
pub const CMD_PAGE_ADDR: u8 = 0x22;
pub const CMD_DEACTIVATE_SCROLL: u8 = 0x2E;
pub const CMD_SET_START_LINE: u8 = 0x40;
pub const CMD_SET_CONTRAST: u8 = 0x81;
pub const CMD_CHARGE_PUMP: u8 = 0x8D;
pub const CMD_SEG_REMAP: u8 = 0xA0;
pub const CMD_DISPLAY_ALL_ON_RESUME: u8 = 0xA4;
pub const CMD_NORMAL_DISPLAY: u8 = 0xA6;
pub const CMD_INVERT_DISPLAY: u8 = 0xA7;
pub const CMD_SET_MULTIPLEX: u8 = 0xA8;
pub const CMD_DISPLAY_OFF: u8 = 0xAE;
pub const CMD_DISPLAY_ON: u8 = 0xAF;
pub const CMD_COM_SCAN_INC: u8 = 0xC0;
pub const CMD_COM_SCAN_DEC: u8 = 0xC8;
pub const CMD_SET_DISPLAY_OFFSET: u8 = 0xD3;
pub const CMD_SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;
pub const CMD_SET_PRECHARGE: u8 = 0xD9;
pub const CMD_SET_COM_PINS: u8 = 0xDA;
pub const CMD_SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump argument: enable with the internal DC-DC
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
/// Charge pump argument used on power down
pub const CHARGE_PUMP_OFF: u8 = 0x8B;

/// Number of argument bytes that follow a command opcode
pub fn argument_count(cmd: u8) -> usize {
    match cmd {
        CMD_COLUMN_ADDR | CMD_PAGE_ADDR => 2,
        CMD_MEMORY_MODE
        | CMD_SET_CONTRAST
        | CMD_CHARGE_PUMP
        | CMD_SET_MULTIPLEX
        | CMD_SET_DISPLAY_OFFSET
        | CMD_SET_DISPLAY_CLOCK_DIV
        | CMD_SET_PRECHARGE
        | CMD_SET_COM_PINS
        | CMD_SET_VCOM_DETECT => 1,
        _ => 0,
    }
}

/// Human-readable opcode name for traces
pub fn command_name(cmd: u8) -> &'static str {
    match cmd {
        CMD_MEMORY_MODE => "MEMORYMODE",
        CMD_COLUMN_ADDR => "COLUMNADDR",
        CMD_PAGE_ADDR => "PAGEADDR",
        CMD_DEACTIVATE_SCROLL => "DEACTIVATE_SCROLL",
        0x40..=0x7F => "SETSTARTLINE",
        CMD_SET_CONTRAST => "SETCONTRAST",
        CMD_CHARGE_PUMP => "CHARGEPUMP",
        0xA0 | 0xA1 => "SEGREMAP",
        CMD_DISPLAY_ALL_ON_RESUME => "DISPLAYALLON_RESUME",
        0xA5 => "DISPLAYALLON",
        CMD_NORMAL_DISPLAY => "NORMALDISPLAY",
        CMD_INVERT_DISPLAY => "INVERTDISPLAY",
        CMD_SET_MULTIPLEX => "SETMULTIPLEX",
        CMD_DISPLAY_OFF => "DISPLAYOFF",
        CMD_DISPLAY_ON => "DISPLAYON",
        CMD_COM_SCAN_INC => "COMSCANINC",
        CMD_COM_SCAN_DEC => "COMSCANDEC",
        CMD_SET_DISPLAY_OFFSET => "SETDISPLAYOFFSET",
        CMD_SET_DISPLAY_CLOCK_DIV => "SETDISPLAYCLOCKDIV",
        CMD_SET_PRECHARGE => "SETPRECHARGE",
        CMD_SET_COM_PINS => "SETCOMPINS",
        CMD_SET_VCOM_DETECT => "SETVCOMDETECT",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_counts() {
        assert_eq!(argument_count(CMD_COLUMN_ADDR), 2);
        assert_eq!(argument_count(CMD_SET_CONTRAST), 1);
        assert_eq!(argument_count(CMD_DISPLAY_ON), 0);
        assert_eq!(argument_count(CMD_SET_START_LINE), 0);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(command_name(CMD_PAGE_ADDR), "PAGEADDR");
        assert_eq!(command_name(CMD_SEG_REMAP | 0x01), "SEGREMAP");
        assert_eq!(command_name(CMD_SET_START_LINE | 0x05), "SETSTARTLINE");
        assert_eq!(command_name(0x00), "UNKNOWN");
    }
}

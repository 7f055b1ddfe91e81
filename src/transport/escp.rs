//! ESC/P2 command builders for passbook dot-matrix printers.
//!
//! Only the subset the PLQ-series books need: initialize, line spacing,
//! paper motion in 1/180 inch units, and absolute horizontal positioning
//! in 1/60 inch units.

pub const ESC: u8 = 0x1B;
pub const CR: u8 = 0x0D;
pub const LF: u8 = 0x0A;
pub const FF: u8 = 0x0C;

/// ESC @ : reset the printer to its power-on state.
pub fn init() -> Vec<u8> {
    vec![ESC, 0x40]
}

/// ESC 3 n : set line spacing to n/180 inch.
pub fn line_spacing(units: u8) -> Vec<u8> {
    vec![ESC, 0x33, units]
}

/// ESC J n : advance the paper n/180 inch.
pub fn advance_paper(units: u8) -> Vec<u8> {
    vec![ESC, 0x4A, units]
}

/// ESC j n : reverse-feed the paper n/180 inch.
pub fn reverse_feed(units: u8) -> Vec<u8> {
    vec![ESC, 0x6A, units]
}

/// ESC $ nL nH : absolute horizontal position in 1/60 inch units,
/// 16-bit little-endian.
pub fn absolute_position(units: u16) -> Vec<u8> {
    vec![ESC, 0x24, (units & 0xFF) as u8, (units >> 8) as u8]
}

/// Forward motion larger than one command operand (255 units), split into
/// as many ESC J commands as needed.
pub fn advance_paper_chunked(mut units: u32) -> Vec<u8> {
    let mut out = Vec::new();
    while units > 0 {
        let step = units.min(255) as u8;
        out.extend(advance_paper(step));
        units -= step as u32;
    }
    out
}

/// Reverse motion larger than one command operand, split into as many
/// ESC j commands as needed.
pub fn reverse_feed_chunked(mut units: u32) -> Vec<u8> {
    let mut out = Vec::new();
    while units > 0 {
        let step = units.min(255) as u8;
        out.extend(reverse_feed(step));
        units -= step as u32;
    }
    out
}

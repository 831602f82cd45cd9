//! The standard DTMF keypad layout.
//! Each symbol is the sum of one row tone and one column tone.

pub const ROW: [f32; 4] = [697.0, 770.0, 852.0, 941.0];
pub const COL: [f32; 4] = [1209.0, 1336.0, 1477.0, 1633.0];
pub const VAL: [u8; 16] = *b"123A456B789C*0#D";

/// Looks up the (row, column) frequency pair for a keypad symbol.
/// Returns None for anything not on the 4x4 pad.
pub fn frequencies(symbol: char) -> Option<(f32, f32)> {
    if !symbol.is_ascii() {
        return None;
    }

    let i = VAL.iter().position(|x| *x == symbol as u8)?;
    Some((ROW[i / COL.len()], COL[i % COL.len()]))
}

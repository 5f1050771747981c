//! String digest for class names.

/// Multiplier of the digest.
const MULTIPLIER: u32 = 0x5f35_6495;

/// Hash `value` into `_` followed by base-36 digits.
///
/// Code units are consumed from last to first as UTF-16, so the result matches the
/// browser-side runtime for the same input.
pub fn cyrb32(value: &str) -> String {
    let units: Vec<u16> = value.encode_utf16().collect();
    let mut state: u32 = 9;
    for unit in units.iter().rev() {
        state = (state ^ u32::from(*unit)).wrapping_mul(MULTIPLIER);
    }
    let digest = state ^ (state >> 9);
    let mut out = String::with_capacity(8);
    out.push('_');
    out.push_str(&to_base36(digest));
    out
}

fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut reversed = Vec::with_capacity(7);
    loop {
        reversed.push(DIGITS[(value % 36) as usize]);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    reversed.iter().rev().map(|digit| char::from(*digit)).collect()
}

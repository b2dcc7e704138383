const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Fingerprints `text` case-insensitively.
///
/// Polynomial rolling hash (multiplier 31) over the UTF-16 code units of the
/// lower-cased text, with 32-bit two's-complement wraparound. The final value
/// is read as unsigned and rendered in base 36. Tokens must stay bit-for-bit
/// stable: previously exported files depend on it.
pub fn fingerprint(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut hash: i32 = 0;
    for unit in lowered.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    to_base36(hash as u32)
}

pub fn fingerprint_all<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| fingerprint(item.as_ref()))
        .collect()
}

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(char::from(BASE36_DIGITS[(value % 36) as usize]));
        value /= 36;
    }
    digits.iter().rev().collect()
}

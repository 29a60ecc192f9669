use core::char::{decode_utf16, REPLACEMENT_CHARACTER};

/// Decodes UTF-16 code units into a string, combining each surrogate pair
/// into a single supplementary-plane code point.
///
/// An unpaired surrogate decodes to U+FFFD REPLACEMENT CHARACTER rather
/// than failing, so decoding is total.
pub(crate) fn decode_utf16_lossy(units: &[u16]) -> String {
    decode_utf16(units.iter().copied())
        .map(|unit| unit.unwrap_or(REPLACEMENT_CHARACTER))
        .collect()
}

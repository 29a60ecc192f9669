//! Static table of every recognized emoji code point sequence.
//!
//! Keys are the `-`-joined lowercase hexadecimal code points of one emoji,
//! single or composite (`"1f600"`, `"1f468-1f3ff-200d-1f680"`), matching the
//! Twemoji asset naming scheme. The table is compiled from `codepoints.txt`
//! into a perfect-hash set at build time and is immutable for the lifetime
//! of the process, so lookups are lock-free and safe to share across threads.

include!(concat!(env!("OUT_DIR"), "/codegen.rs"));

/// Version of the bundled Twemoji inventory.
pub const VERSION: &str = "14.0.2";

/// Tests whether `key` is a recognized emoji code point sequence.
pub fn contains(key: &str) -> bool {
    CODEPOINTS.contains(key)
}

/// Iterates through every recognized sequence, in no particular order.
pub fn iter() -> impl Iterator<Item = &'static str> {
    CODEPOINTS.iter().copied()
}

/// Number of recognized sequences.
pub fn len() -> usize {
    CODEPOINTS.len()
}

#[cfg(test)]
mod tests {
    #[test]
    fn contains_singles_and_sequences() {
        assert!(super::contains("1f600"));
        assert!(super::contains("1f1e8-1f1ff"));
        assert!(super::contains("1f3f3-fe0f-200d-1f308"));
        assert!(super::contains("1f468-200d-1f469-200d-1f466-200d-1f466"));

        // adjacent emoji never form a combined key
        assert!(!super::contains("1f600-1f91f"));
        assert!(!super::contains(""));
    }

    #[test]
    fn table_is_populated() {
        assert!(super::len() > 3000);
        assert!(super::iter().any(|key| key == "1f44f-1f3fd"));
    }
}

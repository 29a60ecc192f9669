use once_cell::sync::Lazy;
use regex::Regex;
use smol_str::SmolStr;

/// One maximal run of candidate code points, i.e. scalar values at or
/// above [`CodePoint::BOUNDARY`](crate::CodePoint::BOUNDARY).
static CANDIDATE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x{1000}-\x{10FFFF}]+").unwrap());

/// Splits `text` around every candidate run, keeping the plain fragments
/// verbatim and in order and dropping empty ones.
///
/// Computed from the raw text alone; code points the matcher fails to
/// recognize still show up here untouched.
pub(crate) fn source_split(text: &str) -> Vec<SmolStr> {
    CANDIDATE_RUN
        .split(text)
        .filter(|fragment| !fragment.is_empty())
        .map(SmolStr::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodePoint;

    #[test]
    fn fragments_around_runs() {
        assert_eq!(source_split("Hello, 😀"), ["Hello, "]);
        assert_eq!(source_split("   👈 text"), ["   ", " text"]);
        assert_eq!(source_split("😀🤟"), [] as [&str; 0]);
        assert_eq!(source_split(""), [] as [&str; 0]);
        assert_eq!(source_split("no emoji at all"), ["no emoji at all"]);
    }

    #[test]
    fn unrecognized_candidates_still_split() {
        // the matcher would drop U+1D400, but the split sees only the
        // raw text
        assert_eq!(source_split("a𝐀b"), ["a", "b"]);
    }

    #[test]
    fn pattern_agrees_with_boundary_rule() {
        for value in [0x20, 0xFFF, 0x1000, 0x200D, 0xFE0F, 0x1F600] {
            let c = char::from_u32(value).unwrap();
            assert_eq!(
                CANDIDATE_RUN.is_match(&c.to_string()),
                !CodePoint::new(value).is_boundary(),
                "disagreement at U+{value:04X}"
            );
        }
    }
}

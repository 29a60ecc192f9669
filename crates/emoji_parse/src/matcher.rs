use smallvec::SmallVec;

use crate::codepoint::{CodePoint, CompositeKey};
use crate::ReferenceSet;

/// Working buffer for one candidate run. Composite emoji rarely exceed a
/// handful of code points.
type Run = SmallVec<[CodePoint; 8]>;

/// Walks `points` in order, accumulating candidate code points into runs
/// and resolving each run against `set` when a boundary marker closes it.
///
/// A run still open at the end of input is flushed verbatim as a single
/// key with *no* reference-set lookup. Only boundary-terminated runs go
/// through [`match_run`]; tests pin this asymmetry.
pub(crate) fn match_text<S, I>(set: &S, points: I) -> Vec<CompositeKey>
where
    S: ReferenceSet + ?Sized,
    I: IntoIterator<Item = CodePoint>,
{
    let mut keys = Vec::new();
    let mut run = Run::new();

    for point in points {
        if point.is_boundary() {
            if !run.is_empty() {
                keys.extend(match_run(set, &run));
                run.clear();
            }
        } else {
            run.push(point);
        }
    }

    if !run.is_empty() {
        keys.push(CompositeKey::join(&run));
    }

    keys
}

/// Resolves one boundary-terminated run into zero or more keys by greedy
/// longest-valid-prefix matching.
///
/// The whole run is tried first; on a miss the last code point is peeled
/// off and the shorter prefix retried. Once a valid prefix is found it is
/// emitted and the peeled-off leftovers are re-matched the same way, in
/// their original relative order. A tail that matches at no length,
/// including length 1, contributes nothing and is dropped.
fn match_run<S>(set: &S, run: &[CodePoint]) -> Vec<CompositeKey>
where
    S: ReferenceSet + ?Sized,
{
    for len in (1..=run.len()).rev() {
        let key = CompositeKey::join(&run[..len]);

        if set.contains(&key) {
            let mut keys = vec![key];
            keys.extend(match_run(set, &run[len..]));
            return keys;
        }
    }

    Vec::new()
}

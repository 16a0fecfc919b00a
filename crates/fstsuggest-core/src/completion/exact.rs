use crate::automaton::WeightedAutomaton;
use crate::error::{Result, SuggestError};

use super::descend::descend_with_prefix;
use super::root_arcs::RootArc;

/// Bucket of the first root arc, from `start_index` on, under which `key` is a
/// stored term.
pub(crate) fn exact_match_bucket<A: WeightedAutomaton>(
    automaton: &A,
    root_arcs: &[RootArc<A::Arc>],
    start_index: usize,
    key: &[u8],
) -> Result<Option<u8>> {
    for root in root_arcs.iter().skip(start_index) {
        let Some(arc) = descend_with_prefix(automaton, &root.arc, key)? else {
            continue;
        };
        let Some(first) = automaton.first_child(&arc)? else {
            return Err(SuggestError::malformed(format!(
                "path {:?} ends without a terminal marker",
                String::from_utf8_lossy(key)
            )));
        };
        if automaton.label(&first).is_end() {
            return Ok(Some(root.bucket));
        }
    }
    Ok(None)
}

use crate::automaton::WeightedAutomaton;
use crate::error::Result;

/// Follows `key` byte by byte from `start`. Returns the arc matching the last
/// key byte, or `None` at the first byte with no matching child.
pub(crate) fn descend_with_prefix<A: WeightedAutomaton>(
    automaton: &A,
    start: &A::Arc,
    key: &[u8],
) -> Result<Option<A::Arc>> {
    let mut arc = start.clone();
    for &byte in key {
        match automaton.find_child(&arc, byte)? {
            Some(child) => arc = child,
            None => return Ok(None),
        }
    }
    Ok(Some(arc))
}

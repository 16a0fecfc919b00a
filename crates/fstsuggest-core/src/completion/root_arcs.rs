use crate::automaton::{Label, WeightedAutomaton};
use crate::error::{Result, SuggestError};

/// A root arc together with the bucket its subtree belongs to.
#[derive(Debug, Clone)]
pub(crate) struct RootArc<T> {
    pub(crate) bucket: u8,
    pub(crate) arc: T,
}

/// Reads the root's outgoing arcs once, highest bucket first.
pub(crate) fn cache_root_arcs<A: WeightedAutomaton>(
    automaton: &A,
) -> Result<Vec<RootArc<A::Arc>>> {
    let mut root_arcs = Vec::new();
    let Some(mut arc) = automaton.first_root_arc()? else {
        return Ok(root_arcs);
    };
    loop {
        let Label::Byte(bucket) = automaton.label(&arc) else {
            return Err(SuggestError::malformed(
                "root state carries a terminal marker",
            ));
        };
        root_arcs.push(RootArc {
            bucket,
            arc: arc.clone(),
        });
        if automaton.is_last_sibling(&arc) {
            break;
        }
        arc = automaton.next_sibling(&arc)?;
    }
    root_arcs.reverse();
    Ok(root_arcs)
}

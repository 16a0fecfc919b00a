use std::collections::BTreeMap;

use fst::raw::{Builder, CompiledAddr, Fst};

use super::{Label, WeightedAutomaton};
use crate::error::{Result, SuggestError};

/// Completion automaton stored as a `fst` byte automaton.
///
/// Every term is keyed as `[bucket] ++ term`, so the root transitions are the
/// bucket labels. A final fst state is exposed as a leading [`Label::End`] arc.
pub struct FstAutomaton {
    fst: Fst<Vec<u8>>,
}

/// Cursor over one arc of an [`FstAutomaton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FstArc {
    source: CompiledAddr,
    position: usize,
    label: Label,
    target: Option<CompiledAddr>,
}

impl FstArc {
    #[must_use]
    pub const fn label(&self) -> Label {
        self.label
    }
}

impl FstAutomaton {
    /// Builds an automaton from `(term, bucket)` pairs in any order.
    ///
    /// A term listed under several buckets keeps the highest one.
    pub fn from_bucketed_terms<I, T>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, u8)>,
        T: AsRef<[u8]>,
    {
        let mut best_bucket = BTreeMap::<Vec<u8>, u8>::new();
        for (term, bucket) in terms {
            let term = term.as_ref();
            if term.is_empty() {
                return Err(SuggestError::Validation(
                    "completion terms must not be empty".to_string(),
                ));
            }
            best_bucket
                .entry(term.to_vec())
                .and_modify(|current| *current = (*current).max(bucket))
                .or_insert(bucket);
        }

        let mut keys = best_bucket
            .into_iter()
            .map(|(term, bucket)| {
                let mut key = Vec::with_capacity(term.len() + 1);
                key.push(bucket);
                key.extend_from_slice(&term);
                key
            })
            .collect::<Vec<_>>();
        keys.sort_unstable();

        let mut builder = Builder::memory();
        for key in &keys {
            builder.insert(key, 0)?;
        }
        let fst = Fst::new(builder.into_inner()?)?;
        tracing::debug!(terms = fst.len(), "built fst completion automaton");
        Ok(Self { fst })
    }

    #[must_use]
    pub fn term_count(&self) -> usize {
        self.fst.len()
    }

    #[must_use]
    pub fn size_in_bytes(&self) -> usize {
        self.fst.as_bytes().len()
    }

    fn arc_count(&self, addr: CompiledAddr) -> usize {
        let node = self.fst.node(addr);
        usize::from(node.is_final()) + node.len()
    }

    fn arc_at(&self, source: CompiledAddr, position: usize) -> Option<FstArc> {
        let node = self.fst.node(source);
        let final_slots = usize::from(node.is_final());
        if position < final_slots {
            return Some(FstArc {
                source,
                position,
                label: Label::End,
                target: None,
            });
        }
        let index = position - final_slots;
        if index >= node.len() {
            return None;
        }
        let transition = node.transition(index);
        Some(FstArc {
            source,
            position,
            label: Label::Byte(transition.inp),
            target: Some(transition.addr),
        })
    }

    fn target_of(arc: &FstArc) -> Result<CompiledAddr> {
        arc.target.ok_or_else(|| {
            SuggestError::malformed(format!(
                "terminal marker at position {} of node {} has no target",
                arc.position, arc.source
            ))
        })
    }
}

impl std::fmt::Debug for FstAutomaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FstAutomaton")
            .field("terms", &self.fst.len())
            .field("bytes", &self.size_in_bytes())
            .finish()
    }
}

impl WeightedAutomaton for FstAutomaton {
    type Arc = FstArc;

    fn first_root_arc(&self) -> Result<Option<FstArc>> {
        Ok(self.arc_at(self.fst.root().addr(), 0))
    }

    fn first_child(&self, arc: &FstArc) -> Result<Option<FstArc>> {
        let target = Self::target_of(arc)?;
        Ok(self.arc_at(target, 0))
    }

    fn next_sibling(&self, arc: &FstArc) -> Result<FstArc> {
        self.arc_at(arc.source, arc.position + 1).ok_or_else(|| {
            SuggestError::malformed(format!(
                "no sibling after position {} of node {}",
                arc.position, arc.source
            ))
        })
    }

    fn is_last_sibling(&self, arc: &FstArc) -> bool {
        arc.position + 1 >= self.arc_count(arc.source)
    }

    fn label(&self, arc: &FstArc) -> Label {
        arc.label()
    }

    fn find_child(&self, arc: &FstArc, byte: u8) -> Result<Option<FstArc>> {
        let target = Self::target_of(arc)?;
        let node = self.fst.node(target);
        let final_slots = usize::from(node.is_final());
        Ok(node.find_input(byte).map(|index| FstArc {
            source: target,
            position: index + final_slots,
            label: Label::Byte(byte),
            target: Some(node.transition_addr(index)),
        }))
    }
}

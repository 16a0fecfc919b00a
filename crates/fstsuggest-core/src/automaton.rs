use std::fmt;

use crate::error::Result;

mod fst_backed;


pub use fst_backed::{FstArc, FstAutomaton};

/// Label carried by an automaton arc.
///
/// `End` marks the end of a stored term. It sorts before every byte label, so
/// a node's terminal marker is always its first outgoing arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    End,
    Byte(u8),
}

impl Label {
    #[must_use]
    pub const fn is_end(self) -> bool {
        matches!(self, Self::End)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End => f.write_str("<end>"),
            Self::Byte(byte) => write!(f, "0x{byte:02x}"),
        }
    }
}

/// Read-only traversal contract over a weighted completion automaton.
///
/// Siblings must be strictly ascending by [`Label`], every stored term must end
/// in exactly one `End` arc, and everything reachable below one root arc must
/// belong to that root arc's bucket. Arcs are cheap snapshots: cloning one
/// yields an independent cursor.
pub trait WeightedAutomaton {
    type Arc: Clone + fmt::Debug;

    /// First arc leaving the root state, or `None` when the automaton is empty.
    fn first_root_arc(&self) -> Result<Option<Self::Arc>>;

    /// First arc leaving the target of `arc`, or `None` when the target has no
    /// outgoing arcs. Fails for an `End` arc.
    fn first_child(&self, arc: &Self::Arc) -> Result<Option<Self::Arc>>;

    fn next_sibling(&self, arc: &Self::Arc) -> Result<Self::Arc>;

    fn is_last_sibling(&self, arc: &Self::Arc) -> bool;

    fn label(&self, arc: &Self::Arc) -> Label;

    /// Child of `arc` labeled `byte`.
    fn find_child(&self, arc: &Self::Arc, byte: u8) -> Result<Option<Self::Arc>> {
        let wanted = Label::Byte(byte);
        let Some(mut child) = self.first_child(arc)? else {
            return Ok(None);
        };
        loop {
            let label = self.label(&child);
            if label == wanted {
                return Ok(Some(child));
            }
            if label > wanted || self.is_last_sibling(&child) {
                return Ok(None);
            }
            child = self.next_sibling(&child)?;
        }
    }
}

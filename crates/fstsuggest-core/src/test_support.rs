use crate::automaton::{Label, WeightedAutomaton};
use crate::error::{Result, SuggestError};

/// Hand-wired automaton for exercising traversal edge cases the fst builder
/// never produces. Node 0 is the root.
#[derive(Debug, Default)]
pub(crate) struct TableAutomaton {
    nodes: Vec<Vec<(Label, Option<usize>)>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TableArc {
    node: usize,
    position: usize,
}

impl TableAutomaton {
    pub(crate) fn with_nodes(count: usize) -> Self {
        Self {
            nodes: vec![Vec::new(); count],
        }
    }

    pub(crate) fn byte(mut self, from: usize, byte: u8, to: usize) -> Self {
        self.nodes[from].push((Label::Byte(byte), Some(to)));
        self
    }

    pub(crate) fn end(mut self, at: usize) -> Self {
        self.nodes[at].insert(0, (Label::End, None));
        self
    }

    fn entry(&self, arc: &TableArc) -> (Label, Option<usize>) {
        self.nodes[arc.node][arc.position]
    }
}

impl WeightedAutomaton for TableAutomaton {
    type Arc = TableArc;

    fn first_root_arc(&self) -> Result<Option<TableArc>> {
        Ok(self
            .nodes
            .first()
            .filter(|arcs| !arcs.is_empty())
            .map(|_| TableArc {
                node: 0,
                position: 0,
            }))
    }

    fn first_child(&self, arc: &TableArc) -> Result<Option<TableArc>> {
        let (_, target) = self.entry(arc);
        let target = target.ok_or_else(|| SuggestError::malformed("end arc has no target"))?;
        Ok((!self.nodes[target].is_empty()).then_some(TableArc {
            node: target,
            position: 0,
        }))
    }

    fn next_sibling(&self, arc: &TableArc) -> Result<TableArc> {
        if self.is_last_sibling(arc) {
            return Err(SuggestError::malformed("read past last sibling"));
        }
        Ok(TableArc {
            node: arc.node,
            position: arc.position + 1,
        })
    }

    fn is_last_sibling(&self, arc: &TableArc) -> bool {
        arc.position + 1 >= self.nodes[arc.node].len()
    }

    fn label(&self, arc: &TableArc) -> Label {
        self.entry(arc).0
    }
}

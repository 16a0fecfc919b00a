use crate::automaton::{Label, WeightedAutomaton};
use crate::error::{Result, SuggestError};
use crate::models::Completion;

/// Depth-first enumeration of every stored term below one arc.
///
/// `output` is used as a stack: the arc's byte is pushed before its children
/// are visited, and each child's bytes are truncated away before its next
/// sibling is visited. Children come in label order, so a term is always
/// emitted before the longer terms it prefixes. Pending siblings live on a
/// heap-allocated frame stack, so term length is bounded by `max_depth` alone.
pub(crate) struct SuffixCollector<'a, A> {
    automaton: &'a A,
    bucket: u8,
    cap: usize,
    max_depth: usize,
}

/// The arc being visited at one level and the output length its siblings
/// start from.
struct Frame<T> {
    arc: T,
    saved_len: usize,
}

impl<'a, A: WeightedAutomaton> SuffixCollector<'a, A> {
    pub(crate) const fn new(automaton: &'a A, bucket: u8, cap: usize, max_depth: usize) -> Self {
        Self {
            automaton,
            bucket,
            cap,
            max_depth,
        }
    }

    /// Returns `true` once `sink` holds `cap` completions; the walk stops
    /// there without visiting any further sibling.
    pub(crate) fn collect(
        &self,
        sink: &mut Vec<Completion>,
        output: &mut Vec<u8>,
        arc: &A::Arc,
    ) -> Result<bool> {
        let first = self.enter(output, arc)?;
        let mut frames = vec![Frame {
            arc: first,
            saved_len: output.len(),
        }];

        while let Some(frame) = frames.last() {
            output.truncate(frame.saved_len);
            if self.automaton.label(&frame.arc).is_end() {
                sink.push(Completion::new(output.as_slice(), self.bucket));
                if sink.len() >= self.cap {
                    return Ok(true);
                }
            } else {
                let child = self.enter(output, &frame.arc)?;
                frames.push(Frame {
                    arc: child,
                    saved_len: output.len(),
                });
                continue;
            }
            self.advance(&mut frames)?;
        }
        Ok(false)
    }

    /// Pushes the byte of `arc` and returns its first child.
    fn enter(&self, output: &mut Vec<u8>, arc: &A::Arc) -> Result<A::Arc> {
        let Label::Byte(byte) = self.automaton.label(arc) else {
            return Err(SuggestError::malformed(
                "cannot descend through a terminal marker",
            ));
        };
        output.push(byte);
        if output.len() > self.max_depth {
            return Err(SuggestError::InputTooLarge(format!(
                "completion exceeds max depth of {} bytes",
                self.max_depth
            )));
        }
        self.automaton.first_child(arc)?.ok_or_else(|| {
            SuggestError::malformed(format!(
                "path {:?} ends without a terminal marker",
                String::from_utf8_lossy(output.as_slice())
            ))
        })
    }

    /// Moves the innermost frame to its next sibling, dropping exhausted levels.
    fn advance(&self, frames: &mut Vec<Frame<A::Arc>>) -> Result<()> {
        while let Some(frame) = frames.last_mut() {
            if self.automaton.is_last_sibling(&frame.arc) {
                frames.pop();
            } else {
                frame.arc = self.automaton.next_sibling(&frame.arc)?;
                return Ok(());
            }
        }
        Ok(())
    }
}

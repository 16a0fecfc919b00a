use crate::automaton::WeightedAutomaton;
use crate::config::CompleterConfig;
use crate::error::{Result, SuggestError};
use crate::models::{Completion, LookupOptions, RankingMode};

mod collect;
mod descend;
mod exact;
mod root_arcs;


use self::collect::SuffixCollector;
use self::descend::descend_with_prefix;
use self::exact::exact_match_bucket;
use self::root_arcs::{RootArc, cache_root_arcs};

/// Prefix completion over a bucketed automaton.
///
/// The root arcs are read once at construction, highest bucket first, and the
/// automaton is only borrowed. Lookups share no mutable state, so one
/// `Completer` can serve any number of threads.
#[derive(Debug)]
pub struct Completer<'a, A: WeightedAutomaton> {
    automaton: Option<&'a A>,
    root_arcs: Vec<RootArc<A::Arc>>,
    config: CompleterConfig,
}

impl<'a, A: WeightedAutomaton> Completer<'a, A> {
    pub fn new(automaton: &'a A) -> Result<Self> {
        Self::with_config(Some(automaton), CompleterConfig::default())
    }

    /// With no automaton every lookup comes back empty.
    pub fn with_config(automaton: Option<&'a A>, config: CompleterConfig) -> Result<Self> {
        config.validate()?;
        let root_arcs = match automaton {
            Some(automaton) => cache_root_arcs(automaton)?,
            None => Vec::new(),
        };
        tracing::debug!(
            buckets = root_arcs.len(),
            ranking = config.ranking.as_str(),
            exact_first = config.exact_first,
            "cached completion root arcs"
        );
        Ok(Self {
            automaton,
            root_arcs,
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &CompleterConfig {
        &self.config
    }

    #[must_use]
    pub const fn automaton(&self) -> Option<&'a A> {
        self.automaton
    }

    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.root_arcs.len()
    }

    /// Up to `limit` completions of `key` using the configured ranking.
    pub fn lookup(&self, key: &str, limit: usize) -> Result<Vec<Completion>> {
        self.lookup_bytes(key.as_bytes(), limit, self.config.lookup_options())
    }

    /// Weight-first results are ordered by bucket (heaviest first) and then by
    /// bytes, except that an exact match may be moved to the front. Alphabetical
    /// results are ordered by bytes alone.
    pub fn lookup_bytes(
        &self,
        key: &[u8],
        limit: usize,
        options: LookupOptions,
    ) -> Result<Vec<Completion>> {
        let Some(automaton) = self.automaton else {
            return Ok(Vec::new());
        };
        if key.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }
        self.check_key_len(key)?;

        let results = if options.ranking == RankingMode::Alphabetical && self.root_arcs.len() > 1
        {
            self.lookup_sorted_alphabetically(automaton, key, limit)?
        } else {
            self.lookup_sorted_by_weight(automaton, key, limit, options.exact_first)?
        };
        tracing::trace!(
            key_len = key.len(),
            limit,
            ranking = options.ranking.as_str(),
            results = results.len(),
            "completion lookup"
        );
        Ok(results)
    }

    pub fn bucket_of(&self, key: &str) -> Result<Option<u8>> {
        self.bucket_of_bytes(key.as_bytes())
    }

    /// Bucket holding `key` as a stored term, searching every bucket.
    pub fn bucket_of_bytes(&self, key: &[u8]) -> Result<Option<u8>> {
        let Some(automaton) = self.automaton else {
            return Ok(None);
        };
        if key.is_empty() {
            return Ok(None);
        }
        self.check_key_len(key)?;
        exact_match_bucket(automaton, &self.root_arcs, 0, key)
    }

    fn check_key_len(&self, key: &[u8]) -> Result<()> {
        if key.len() > self.config.max_key_bytes {
            return Err(SuggestError::InputTooLarge(format!(
                "key is {} bytes, at most {} allowed",
                key.len(),
                self.config.max_key_bytes
            )));
        }
        Ok(())
    }

    fn lookup_sorted_by_weight(
        &self,
        automaton: &A,
        key: &[u8],
        limit: usize,
        exact_first: bool,
    ) -> Result<Vec<Completion>> {
        let mut results = Vec::with_capacity(limit.min(10));
        let mut output = Vec::with_capacity(key.len() + 16);

        for (index, root) in self.root_arcs.iter().enumerate() {
            let Some(arc) = descend_with_prefix(automaton, &root.arc, key)? else {
                continue;
            };
            // The collector pushes the last key byte itself.
            output.clear();
            output.extend_from_slice(&key[..key.len() - 1]);
            let collector =
                SuffixCollector::new(automaton, root.bucket, limit, self.config.max_depth);
            if collector.collect(&mut results, &mut output, &arc)? {
                if exact_first {
                    self.promote_exact_match(automaton, &mut results, index, key, limit)?;
                }
                break;
            }
        }
        Ok(results)
    }

    /// Collects up to `limit` matches from every bucket, then sorts by bytes.
    fn lookup_sorted_alphabetically(
        &self,
        automaton: &A,
        key: &[u8],
        limit: usize,
    ) -> Result<Vec<Completion>> {
        let mut merged = Vec::new();
        let mut bucket_results = Vec::with_capacity(limit.min(10));
        let mut output = Vec::with_capacity(key.len() + 16);

        for root in &self.root_arcs {
            let Some(arc) = descend_with_prefix(automaton, &root.arc, key)? else {
                continue;
            };
            output.clear();
            output.extend_from_slice(&key[..key.len() - 1]);
            SuffixCollector::new(automaton, root.bucket, limit, self.config.max_depth).collect(
                &mut bucket_results,
                &mut output,
                &arc,
            )?;
            merged.append(&mut bucket_results);
        }

        merged.sort_by(|a, b| a.bytes.cmp(&b.bytes));
        merged.truncate(limit);
        Ok(merged)
    }

    /// Moves `key` to the front of a full result list. A key already present
    /// keeps the rest of the order intact; a key found only in a bucket the
    /// scan did not reach replaces the last result.
    fn promote_exact_match(
        &self,
        automaton: &A,
        results: &mut Vec<Completion>,
        stop_index: usize,
        key: &[u8],
        limit: usize,
    ) -> Result<()> {
        if let Some(position) = results
            .iter()
            .rposition(|completion| completion.bytes.as_slice() == key)
        {
            let exact = results.remove(position);
            results.insert(0, exact);
            return Ok(());
        }

        if let Some(bucket) = exact_match_bucket(automaton, &self.root_arcs, stop_index, key)? {
            results.truncate(limit.saturating_sub(1));
            results.insert(0, Completion::new(key, bucket));
            tracing::debug!(bucket, "promoted exact match from a lower bucket");
        }
        Ok(())
    }
}

/// Converts a caller-supplied signed limit, rejecting negative values.
pub fn checked_limit(raw: i64) -> Result<usize> {
    usize::try_from(raw).map_err(|_| {
        SuggestError::InvalidArgument(format!("limit must be a non-negative integer, got {raw}"))
    })
}

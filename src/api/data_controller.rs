use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::SampleSequence;
use crate::error::ChartResult;
use crate::render::Renderer;
use crate::store::{SampleStore, TimeRange};

use super::{ChartEngine, PluginEvent};

/// Ties a fetch completion to the request that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FetchTicket {
    generation: u64,
    range: TimeRange,
}

impl FetchTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn range(self) -> TimeRange {
        self.range
    }
}

/// What happened to a fetch completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchOutcome {
    /// The sequence replaced the chart's data.
    Applied,
    /// A newer request superseded this one; the result was dropped.
    Stale,
    /// The store reported an error; the chart draws nothing for this range.
    Failed,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.fetch.pending.is_some()
    }

    /// Range being fetched, if any.
    #[must_use]
    pub fn pending_range(&self) -> Option<TimeRange> {
        self.fetch.pending
    }

    /// Range of the data currently in view.
    #[must_use]
    pub fn active_range(&self) -> Option<TimeRange> {
        self.fetch.active_range
    }

    /// Enters the loading state for `range`.
    ///
    /// The current sequence and selection are dropped, the reveal restarts
    /// from zero and any earlier ticket becomes stale.
    pub fn request_range(&mut self, range: TimeRange) -> FetchTicket {
        self.fetch.generation = self.fetch.generation.wrapping_add(1);
        self.fetch.pending = Some(range);
        self.sequence = None;
        self.set_selected_index(None);
        self.restart_animation();
        debug!(
            range = range.label(),
            generation = self.fetch.generation,
            "range requested"
        );
        self.emit_plugin_event(PluginEvent::LoadingStarted { range });
        FetchTicket {
            generation: self.fetch.generation,
            range,
        }
    }

    /// Delivers the result of the fetch identified by `ticket`.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: ChartResult<SampleSequence>,
    ) -> FetchOutcome {
        if ticket.generation != self.fetch.generation || self.fetch.pending.is_none() {
            debug!(
                range = ticket.range.label(),
                ticket_generation = ticket.generation,
                current_generation = self.fetch.generation,
                "discarding stale fetch result"
            );
            return FetchOutcome::Stale;
        }

        self.fetch.pending = None;
        self.fetch.active_range = Some(ticket.range);
        match result {
            Ok(sequence) => {
                self.apply_sequence(sequence);
                FetchOutcome::Applied
            }
            Err(err) => {
                warn!(
                    error = %err,
                    range = ticket.range.label(),
                    "sample fetch failed, drawing nothing"
                );
                self.emit_plugin_event(PluginEvent::LoadFailed {
                    range: ticket.range,
                });
                FetchOutcome::Failed
            }
        }
    }

    /// Requests `range`, awaits `store` and applies the result.
    pub async fn load_range<S>(&mut self, store: &S, range: TimeRange) -> FetchOutcome
    where
        S: SampleStore + ?Sized,
    {
        let ticket = self.request_range(range);
        let result = store.fetch_samples(range).await;
        debug!(store = store.name(), range = range.label(), "store answered");
        self.complete_fetch(ticket, result)
    }

    /// Loads the configured initial range.
    pub async fn load_initial<S>(&mut self, store: &S) -> FetchOutcome
    where
        S: SampleStore + ?Sized,
    {
        self.load_range(store, self.initial_range).await
    }

    /// Swaps in `sequence` without going through a fetch.
    ///
    /// Pending fetches become stale. Returns `false` when `sequence` is the one
    /// already in view.
    pub fn replace_sequence(&mut self, sequence: SampleSequence) -> bool {
        if self
            .sequence
            .as_ref()
            .is_some_and(|current| current.id() == sequence.id())
        {
            return false;
        }
        self.fetch.generation = self.fetch.generation.wrapping_add(1);
        self.fetch.pending = None;
        self.fetch.active_range = sequence.range();
        self.apply_sequence(sequence);
        true
    }

    fn apply_sequence(&mut self, sequence: SampleSequence) {
        let samples_len = sequence.len();
        debug!(
            samples_len,
            sequence_id = %sequence.id().0,
            "replacing sample sequence"
        );
        self.sequence = Some(sequence);
        self.restart_animation();
        self.emit_plugin_event(PluginEvent::SequenceReplaced { samples_len });
        self.set_selected_index(samples_len.checked_sub(1));
    }
}

//! The event-retrieval collaborator boundary.
//!
//! The engine needs exactly one thing from the outside world: the raw events
//! that could matter for a window. How they are stored or queried is the
//! implementation's business.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::Result;
use crate::event::Event;

/// Supplies the raw events for an availability query.
///
/// Implementations return every event that is weekly-recurring OR ends after
/// `window_start`. The over-fetch is deliberate: recurring events carry
/// arbitrarily old timestamps, and precise window filtering is the engine's
/// job, not the store's.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch all events that could overlap a window starting at `window_start`.
    async fn fetch_events(&self, window_start: NaiveDateTime) -> Result<Vec<Event>>;
}

/// A `Vec`-backed event source.
///
/// Applies the same over-fetch predicate a real store would, which keeps the
/// retrieval contract itself under test.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventSource {
    events: Vec<Event>,
}

impl InMemoryEventSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventSource for InMemoryEventSource {
    async fn fetch_events(&self, window_start: NaiveDateTime) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.weekly_recurring || event.ends_at > window_start)
            .cloned()
            .collect())
    }
}

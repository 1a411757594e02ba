use chrono::NaiveDate;
use tracing::debug;

use crate::filter::{facet_matches, query_matches};
use crate::model::{Event, EventType};
use crate::store::RecordStore;

/// The events list: free-text search over title, description and organizer,
/// one event-type facet, and a toggle for including past events.
///
/// "Past" is judged against an explicitly supplied `today`; the view never
/// reads the ambient clock, so recomputation stays deterministic.
#[derive(Debug)]
pub struct EventsView<'a> {
    store: &'a RecordStore<Event>,
    today: NaiveDate,
    query: String,
    event_type: Option<EventType>,
    include_past: bool,
    derived: Vec<usize>,
}

impl<'a> EventsView<'a> {
    pub fn new(store: &'a RecordStore<Event>, today: NaiveDate) -> Self {
        let mut view = Self {
            store,
            today,
            query: String::new(),
            event_type: None,
            include_past: false,
            derived: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// `None` selects all event types.
    pub fn set_event_type(&mut self, event_type: Option<EventType>) {
        self.event_type = event_type;
        self.recompute();
    }

    pub fn set_include_past(&mut self, include_past: bool) {
        self.include_past = include_past;
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.event_type = None;
        self.include_past = false;
        self.recompute();
    }

    /// The current derived view, in store order.
    pub fn entries(&self) -> Vec<&'a Event> {
        self.derived.iter().map(|&i| &self.store.records()[i]).collect()
    }

    /// Surviving events that have not yet happened.
    pub fn upcoming(&self) -> Vec<&'a Event> {
        self.entries()
            .into_iter()
            .filter(|e| !e.is_past(self.today))
            .collect()
    }

    /// Surviving events that already happened. Empty unless past events are
    /// included.
    pub fn past(&self) -> Vec<&'a Event> {
        self.entries()
            .into_iter()
            .filter(|e| e.is_past(self.today))
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.derived.len()
    }

    pub fn total(&self) -> usize {
        self.store.len()
    }

    fn matches(&self, event: &Event) -> bool {
        let fields = [
            event.title.as_str(),
            event.description.as_str(),
            event.organizer.as_str(),
        ];

        query_matches(&self.query, fields)
            && facet_matches(self.event_type.as_ref(), &event.event_type)
            && (self.include_past || !event.is_past(self.today))
    }

    fn recompute(&mut self) {
        self.derived = self
            .store
            .iter()
            .enumerate()
            .filter(|(_, event)| self.matches(event))
            .map(|(i, _)| i)
            .collect();
        debug!(
            filtered = self.derived.len(),
            total = self.store.len(),
            "events view recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSource;
    use crate::store::DataSource;

    fn store() -> RecordStore<Event> {
        RecordStore::new(FixtureSource.load_events().unwrap())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_events_are_hidden_by_default() {
        let store = store();
        let view = EventsView::new(&store, day(2024, 1, 22));
        let ids = view.entries().iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn include_past_restores_all_events_in_order() {
        let store = store();
        let mut view = EventsView::new(&store, day(2024, 1, 22));
        view.set_include_past(true);
        let ids = view.entries().iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(view.upcoming().len(), 1);
        assert_eq!(view.past().len(), 2);
    }

    #[test]
    fn type_facet_is_exact() {
        let store = store();
        let mut view = EventsView::new(&store, day(2024, 1, 1));
        view.set_event_type(Some(EventType::Workshop));
        let entries = view.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Tech Career Workshop");
    }

    #[test]
    fn query_searches_organizer() {
        let store = store();
        let mut view = EventsView::new(&store, day(2024, 1, 1));
        view.set_query("career services");
        let entries = view.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "3");
    }

    #[test]
    fn reset_restores_defaults() {
        let store = store();
        let mut view = EventsView::new(&store, day(2024, 1, 1));
        view.set_query("workshop");
        view.set_event_type(Some(EventType::Social));
        view.set_include_past(true);
        view.reset();
        assert_eq!(view.filtered_count(), 3);
    }

    #[test]
    fn event_on_today_counts_as_upcoming() {
        let store = store();
        let view = EventsView::new(&store, day(2024, 1, 15));
        let ids = view.entries().iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }
}

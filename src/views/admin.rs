use serde::Serialize;
use tracing::debug;

use crate::filter::query_matches;
use crate::model::{Alumni, Event, WallOfFameEntry};
use crate::store::RecordStore;

/// Tabs of the administrative table view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AdminTab {
    Alumni,
    Events,
    WallOfFame,
    Analytics,
}

/// Per-entity totals for the analytics tab and the tab badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdminStats {
    pub alumni: usize,
    pub events: usize,
    pub wall_of_fame: usize,
}

/// The admin table surface: one shared free-text query applied per tab with
/// narrower field lists than the public views.
///
/// Read-only. Create, edit and delete are presented upstream but are not
/// wired to the stores, and no mutator for them exists here.
#[derive(Debug)]
pub struct AdminView<'a> {
    alumni: &'a RecordStore<Alumni>,
    events: &'a RecordStore<Event>,
    wall_of_fame: &'a RecordStore<WallOfFameEntry>,
    tab: AdminTab,
    query: String,
}

impl<'a> AdminView<'a> {
    pub fn new(
        alumni: &'a RecordStore<Alumni>,
        events: &'a RecordStore<Event>,
        wall_of_fame: &'a RecordStore<WallOfFameEntry>,
    ) -> Self {
        Self {
            alumni,
            events,
            wall_of_fame,
            tab: AdminTab::Alumni,
            query: String::new(),
        }
    }

    pub fn set_tab(&mut self, tab: AdminTab) {
        debug!(%tab, "admin tab switched");
        self.tab = tab;
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn reset(&mut self) {
        self.query.clear();
    }

    /// Alumni rows matching the query over name, email and company.
    pub fn alumni_rows(&self) -> Vec<&'a Alumni> {
        self.alumni
            .iter()
            .filter(|a| {
                query_matches(
                    &self.query,
                    [a.name.as_str(), a.email.as_str(), a.company.as_str()],
                )
            })
            .collect()
    }

    /// Event rows matching the query over title and organizer.
    pub fn event_rows(&self) -> Vec<&'a Event> {
        self.events
            .iter()
            .filter(|e| query_matches(&self.query, [e.title.as_str(), e.organizer.as_str()]))
            .collect()
    }

    /// Wall-of-fame rows matching the query over title and description,
    /// each paired with its honoree when the reference resolves.
    pub fn fame_rows(&self) -> Vec<(&'a WallOfFameEntry, Option<&'a Alumni>)> {
        self.wall_of_fame
            .iter()
            .filter(|e| query_matches(&self.query, [e.title.as_str(), e.description.as_str()]))
            .map(|e| (e, self.alumni.resolve(&e.alumni_id)))
            .collect()
    }

    pub fn stats(&self) -> AdminStats {
        AdminStats {
            alumni: self.alumni.len(),
            events: self.events.len(),
            wall_of_fame: self.wall_of_fame.len(),
        }
    }
}

use tracing::debug;

use crate::facets;
use crate::filter::query_matches;
use crate::model::{Alumni, MentorshipRequest, MentorshipStatus};
use crate::store::RecordStore;

/// The mentorship browser: lists alumni who are mentors currently accepting
/// mentees, searchable by name, position and company, with one area facet.
///
/// Also exposes the mentorship requests with mentor/mentee resolution
/// through the alumni store.
#[derive(Debug)]
pub struct MentorshipView<'a> {
    alumni: &'a RecordStore<Alumni>,
    requests: &'a RecordStore<MentorshipRequest>,
    query: String,
    area: Option<String>,
    derived: Vec<usize>,
}

impl<'a> MentorshipView<'a> {
    pub fn new(
        alumni: &'a RecordStore<Alumni>,
        requests: &'a RecordStore<MentorshipRequest>,
    ) -> Self {
        let mut view = Self {
            alumni,
            requests,
            query: String::new(),
            area: None,
            derived: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// `None` selects all areas; otherwise the mentor must offer the exact
    /// area (membership, not substring).
    pub fn set_area(&mut self, area: Option<String>) {
        self.area = area;
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.query.clear();
        self.area = None;
        self.recompute();
    }

    /// Mentors surviving the current predicates, in store order.
    pub fn mentors(&self) -> Vec<&'a Alumni> {
        self.derived.iter().map(|&i| &self.alumni.records()[i]).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.derived.len()
    }

    /// Every mentor currently accepting mentees, before search and facets.
    pub fn total(&self) -> usize {
        self.alumni.iter().filter(|a| a.accepts_mentees()).count()
    }

    pub fn area_options(&self) -> Vec<&'a str> {
        facets::mentorship_areas(self.alumni.records())
    }

    pub fn requests(&self) -> &'a [MentorshipRequest] {
        self.requests.records()
    }

    pub fn requests_with_status(&self, status: MentorshipStatus) -> Vec<&'a MentorshipRequest> {
        self.requests.iter().filter(|r| r.status == status).collect()
    }

    /// Resolve the mentor side of a request; `None` if the id is dangling.
    pub fn mentor_of(&self, request: &MentorshipRequest) -> Option<&'a Alumni> {
        self.alumni.resolve(&request.mentor_id)
    }

    /// Resolve the mentee side of a request; `None` if the id is dangling.
    pub fn mentee_of(&self, request: &MentorshipRequest) -> Option<&'a Alumni> {
        self.alumni.resolve(&request.mentee_id)
    }

    fn matches(&self, mentor: &Alumni) -> bool {
        let fields = [
            mentor.name.as_str(),
            mentor.current_position.as_str(),
            mentor.company.as_str(),
        ];

        let matches_area = self
            .area
            .as_ref()
            .is_none_or(|area| mentor.mentorship_areas.iter().any(|a| a == area));

        mentor.accepts_mentees() && query_matches(&self.query, fields) && matches_area
    }

    fn recompute(&mut self) {
        self.derived = self
            .alumni
            .iter()
            .enumerate()
            .filter(|(_, mentor)| self.matches(mentor))
            .map(|(i, _)| i)
            .collect();
        debug!(
            filtered = self.derived.len(),
            mentors = self.total(),
            "mentorship view recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSource;
    use crate::store::DataSource;

    fn stores() -> (RecordStore<Alumni>, RecordStore<MentorshipRequest>) {
        (
            RecordStore::new(FixtureSource.load_alumni().unwrap()),
            RecordStore::new(FixtureSource.load_mentorship_requests().unwrap()),
        )
    }

    #[test]
    fn only_available_mentors_are_listed() {
        let (alumni, requests) = stores();
        let view = MentorshipView::new(&alumni, &requests);
        let ids = view.mentors().iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        // Emily is neither a mentor nor available.
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
        assert_eq!(view.total(), 4);
    }

    #[test]
    fn area_facet_requires_exact_membership() {
        let (alumni, requests) = stores();
        let mut view = MentorshipView::new(&alumni, &requests);
        view.set_area(Some("Finance".to_string()));
        let ids = view.mentors().iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["2"]);

        // "Leadership" is offered by Sarah and David but not by Lisa.
        view.set_area(Some("Leadership".to_string()));
        let ids = view.mentors().iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn query_and_area_conjoin() {
        let (alumni, requests) = stores();
        let mut view = MentorshipView::new(&alumni, &requests);
        view.set_query("director");
        view.set_area(Some("Career Development".to_string()));
        let ids = view.mentors().iter().map(|a| a.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn reset_restores_all_available_mentors() {
        let (alumni, requests) = stores();
        let mut view = MentorshipView::new(&alumni, &requests);
        view.set_query("nobody matches this");
        assert_eq!(view.filtered_count(), 0);
        view.reset();
        assert_eq!(view.filtered_count(), 4);
    }

    #[test]
    fn requests_resolve_both_sides() {
        let (alumni, requests) = stores();
        let view = MentorshipView::new(&alumni, &requests);
        let pending = view.requests_with_status(MentorshipStatus::Pending);
        assert_eq!(pending.len(), 1);
        assert_eq!(view.mentor_of(pending[0]).unwrap().name, "Sarah Johnson");
        assert_eq!(view.mentee_of(pending[0]).unwrap().name, "Emily Rodriguez");
    }
}

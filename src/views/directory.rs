use tracing::debug;

use crate::facets;
use crate::filter::{facet_contains, facet_matches, flag_matches, query_matches};
use crate::model::Alumni;
use crate::store::RecordStore;

/// The alumni directory: free-text search over name, company, position and
/// skills, plus the directory facets.
///
/// The derived view is recomputed synchronously on every predicate change
/// and always preserves store order.
#[derive(Debug)]
pub struct DirectoryView<'a> {
    store: &'a RecordStore<Alumni>,
    query: String,
    graduation_year: Option<u16>,
    degree: Option<String>,
    major: Option<String>,
    location: Option<String>,
    mentors_only: bool,
    verified_only: bool,
    derived: Vec<usize>,
}

impl<'a> DirectoryView<'a> {
    pub fn new(store: &'a RecordStore<Alumni>) -> Self {
        let mut view = Self {
            store,
            query: String::new(),
            graduation_year: None,
            degree: None,
            major: None,
            location: None,
            mentors_only: false,
            verified_only: false,
            derived: Vec::new(),
        };
        view.recompute();
        view
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    pub fn set_graduation_year(&mut self, year: Option<u16>) {
        self.graduation_year = year;
        self.recompute();
    }

    pub fn set_degree(&mut self, degree: Option<String>) {
        self.degree = degree;
        self.recompute();
    }

    pub fn set_major(&mut self, major: Option<String>) {
        self.major = major;
        self.recompute();
    }

    pub fn set_location(&mut self, location: Option<String>) {
        self.location = location;
        self.recompute();
    }

    pub fn set_mentors_only(&mut self, mentors_only: bool) {
        self.mentors_only = mentors_only;
        self.recompute();
    }

    pub fn set_verified_only(&mut self, verified_only: bool) {
        self.verified_only = verified_only;
        self.recompute();
    }

    /// Clear the query and every facet, restoring the full store.
    pub fn reset(&mut self) {
        self.query.clear();
        self.graduation_year = None;
        self.degree = None;
        self.major = None;
        self.location = None;
        self.mentors_only = false;
        self.verified_only = false;
        self.recompute();
    }

    /// The current derived view, in store order.
    pub fn entries(&self) -> Vec<&'a Alumni> {
        self.derived.iter().map(|&i| &self.store.records()[i]).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.derived.len()
    }

    pub fn total(&self) -> usize {
        self.store.len()
    }

    pub fn graduation_year_options(&self) -> Vec<u16> {
        facets::graduation_years(self.store.records())
    }

    pub fn degree_options(&self) -> Vec<&'a str> {
        facets::degrees(self.store.records())
    }

    pub fn major_options(&self) -> Vec<&'a str> {
        facets::majors(self.store.records())
    }

    pub fn location_options(&self) -> Vec<&'a str> {
        facets::locations(self.store.records())
    }

    fn matches(&self, alumni: &Alumni) -> bool {
        let fields = [
            alumni.name.as_str(),
            alumni.company.as_str(),
            alumni.current_position.as_str(),
        ]
        .into_iter()
        .chain(alumni.skills.iter().map(String::as_str));

        query_matches(&self.query, fields)
            && facet_matches(self.graduation_year.as_ref(), &alumni.graduation_year)
            && facet_contains(self.degree.as_deref(), &alumni.degree)
            && facet_contains(self.major.as_deref(), &alumni.major)
            && facet_contains(self.location.as_deref(), &alumni.location)
            && flag_matches(self.mentors_only, alumni.is_mentor)
            && flag_matches(self.verified_only, alumni.is_verified)
    }

    fn recompute(&mut self) {
        self.derived = self
            .store
            .iter()
            .enumerate()
            .filter(|(_, alumni)| self.matches(alumni))
            .map(|(i, _)| i)
            .collect();
        debug!(
            filtered = self.derived.len(),
            total = self.store.len(),
            "directory view recomputed"
        );
    }
}

use tracing::debug;

use crate::filter::{facet_matches, flag_matches};
use crate::model::{Alumni, FameCategory, WallOfFameEntry};
use crate::store::RecordStore;

/// The wall of fame: one category facet and a featured-only toggle, no free
/// text. Honoree display data is resolved through the alumni store and
/// degrades gracefully when the reference dangles.
#[derive(Debug)]
pub struct FameView<'a> {
    entries: &'a RecordStore<WallOfFameEntry>,
    alumni: &'a RecordStore<Alumni>,
    category: Option<FameCategory>,
    featured_only: bool,
    derived: Vec<usize>,
}

impl<'a> FameView<'a> {
    pub fn new(
        entries: &'a RecordStore<WallOfFameEntry>,
        alumni: &'a RecordStore<Alumni>,
    ) -> Self {
        let mut view = Self {
            entries,
            alumni,
            category: None,
            featured_only: false,
            derived: Vec::new(),
        };
        view.recompute();
        view
    }

    /// `None` selects all categories.
    pub fn set_category(&mut self, category: Option<FameCategory>) {
        self.category = category;
        self.recompute();
    }

    pub fn set_featured_only(&mut self, featured_only: bool) {
        self.featured_only = featured_only;
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.category = None;
        self.featured_only = false;
        self.recompute();
    }

    /// The current derived view, in store order.
    pub fn entries(&self) -> Vec<&'a WallOfFameEntry> {
        self.derived.iter().map(|&i| &self.entries.records()[i]).collect()
    }

    /// All featured entries, independent of the active facets. The spotlight
    /// strip shows these even while a category filter is active.
    pub fn featured(&self) -> Vec<&'a WallOfFameEntry> {
        self.entries.iter().filter(|e| e.featured).collect()
    }

    /// Surviving non-featured entries.
    pub fn regular(&self) -> Vec<&'a WallOfFameEntry> {
        self.entries().into_iter().filter(|e| !e.featured).collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.derived.len()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Resolve the honored alumni; `None` if the id is dangling, in which
    /// case the presentation omits the honoree block.
    pub fn honoree(&self, entry: &WallOfFameEntry) -> Option<&'a Alumni> {
        self.alumni.resolve(&entry.alumni_id)
    }

    fn matches(&self, entry: &WallOfFameEntry) -> bool {
        facet_matches(self.category.as_ref(), &entry.category)
            && flag_matches(self.featured_only, entry.featured)
    }

    fn recompute(&mut self) {
        self.derived = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches(entry))
            .map(|(i, _)| i)
            .collect();
        debug!(
            filtered = self.derived.len(),
            total = self.entries.len(),
            "wall of fame view recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::fixtures::FixtureSource;
    use crate::store::DataSource;

    fn stores() -> (RecordStore<WallOfFameEntry>, RecordStore<Alumni>) {
        (
            RecordStore::new(FixtureSource.load_wall_of_fame().unwrap()),
            RecordStore::new(FixtureSource.load_alumni().unwrap()),
        )
    }

    #[test]
    fn no_facets_show_every_entry() {
        let (entries, alumni) = stores();
        let view = FameView::new(&entries, &alumni);
        assert_eq!(view.filtered_count(), 3);
        assert_eq!(view.featured().len(), 2);
        assert_eq!(view.regular().len(), 1);
    }

    #[test]
    fn category_facet_is_exact() {
        let (entries, alumni) = stores();
        let mut view = FameView::new(&entries, &alumni);
        view.set_category(Some(FameCategory::Leadership));
        let titles = view.entries().iter().map(|e| e.title.as_str()).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Sustainability Leadership"]);
    }

    #[test]
    fn featured_only_drops_regular_entries() {
        let (entries, alumni) = stores();
        let mut view = FameView::new(&entries, &alumni);
        view.set_featured_only(true);
        let ids = view.entries().iter().map(|e| e.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(view.regular().is_empty());
    }

    #[test]
    fn honoree_resolves_through_alumni_store() {
        let (entries, alumni) = stores();
        let view = FameView::new(&entries, &alumni);
        let all = view.entries();
        assert_eq!(view.honoree(all[0]).unwrap().name, "Sarah Johnson");
        assert_eq!(view.honoree(all[2]).unwrap().name, "David Kim");
    }

    #[test]
    fn dangling_honoree_reference_yields_none() {
        let (entries, alumni) = stores();
        let view = FameView::new(&entries, &alumni);
        let orphan = WallOfFameEntry {
            id: "99".to_string(),
            alumni_id: "no-such-alumni".to_string(),
            title: "Orphaned".to_string(),
            description: String::new(),
            image: String::new(),
            category: FameCategory::Other,
            featured: false,
            created_at: Utc::now(),
        };
        assert!(view.honoree(&orphan).is_none());
    }
}

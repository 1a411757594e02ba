use chrono::NaiveDate;
use tracing::instrument;

use crate::error::Result;
use crate::fixtures::FixtureSource;
use crate::model::{Alumni, Event, MentorshipRequest, WallOfFameEntry};
use crate::store::{DataSource, RecordStore};
use crate::views::{AdminView, DirectoryView, EventsView, FameView, MentorshipView};

/// The main entry point for the alumni data core.
///
/// `AlumniHub` loads every record store once from a [`DataSource`] and hands
/// out the filterable views the pages are built on.
///
/// # Examples
///
/// ```
/// use alumni_hub::AlumniHub;
///
/// let hub = AlumniHub::from_fixtures()?;
/// let mut directory = hub.directory();
/// directory.set_query("engineer");
/// println!(
///     "showing {} of {} alumni",
///     directory.filtered_count(),
///     directory.total()
/// );
/// # Ok::<(), alumni_hub::HubError>(())
/// ```
#[derive(Debug, Clone)]
pub struct AlumniHub {
    alumni: RecordStore<Alumni>,
    events: RecordStore<Event>,
    wall_of_fame: RecordStore<WallOfFameEntry>,
    mentorship_requests: RecordStore<MentorshipRequest>,
}

impl AlumniHub {
    /// Load all stores from the embedded mock dataset.
    pub fn from_fixtures() -> Result<Self> {
        Self::from_source(&FixtureSource)
    }

    /// Load all stores from the given provider.
    #[instrument(skip(source))]
    pub fn from_source(source: &impl DataSource) -> Result<Self> {
        Ok(Self {
            alumni: RecordStore::new(source.load_alumni()?),
            events: RecordStore::new(source.load_events()?),
            wall_of_fame: RecordStore::new(source.load_wall_of_fame()?),
            mentorship_requests: RecordStore::new(source.load_mentorship_requests()?),
        })
    }

    pub fn alumni(&self) -> &RecordStore<Alumni> {
        &self.alumni
    }

    pub fn events(&self) -> &RecordStore<Event> {
        &self.events
    }

    pub fn wall_of_fame(&self) -> &RecordStore<WallOfFameEntry> {
        &self.wall_of_fame
    }

    pub fn mentorship_requests(&self) -> &RecordStore<MentorshipRequest> {
        &self.mentorship_requests
    }

    /// Resolve an alumni id, e.g. for a profile page. `None` when unknown.
    pub fn resolve_alumni(&self, id: &str) -> Option<&Alumni> {
        self.alumni.resolve(id)
    }

    /// The alumni directory view over the full store.
    pub fn directory(&self) -> DirectoryView<'_> {
        DirectoryView::new(&self.alumni)
    }

    /// The events view; `today` decides which events count as past.
    pub fn events_view(&self, today: NaiveDate) -> EventsView<'_> {
        EventsView::new(&self.events, today)
    }

    /// The mentor browser plus mentorship request access.
    pub fn mentorship(&self) -> MentorshipView<'_> {
        MentorshipView::new(&self.alumni, &self.mentorship_requests)
    }

    /// The wall of fame view with honoree resolution.
    pub fn fame(&self) -> FameView<'_> {
        FameView::new(&self.wall_of_fame, &self.alumni)
    }

    /// The read-only admin table surface.
    pub fn admin(&self) -> AdminView<'_> {
        AdminView::new(&self.alumni, &self.events, &self.wall_of_fame)
    }
}

//! In-memory data core for an alumni networking platform: typed record
//! stores, filterable collection views, facet enumeration and cross-entity
//! reference resolution. Data comes from an embedded fixture behind the
//! [`DataSource`] boundary, so a real backend can slot in later.

pub use error::{HubError, Result};
pub use fixtures::FixtureSource;
pub use hub::AlumniHub;
pub use store::{DataSource, RecordStore};
pub use theme::Theme;

pub mod error;
pub mod facets;
pub mod filter;
pub mod fixtures;
pub mod hub;
pub mod model;
pub mod store;
pub mod theme;
pub mod views;

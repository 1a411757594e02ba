mod admin;
mod directory;
mod events;
mod fame;
mod mentorship;

pub use admin::*;
pub use directory::*;
pub use events::*;
pub use fame::*;
pub use mentorship::*;

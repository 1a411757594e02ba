mod alumni;
mod event;
mod fame;
mod mentorship;

pub use alumni::*;
pub use event::*;
pub use fame::*;
pub use mentorship::*;

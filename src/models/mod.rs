pub mod task;
pub mod session;
pub mod track;
pub mod route;

pub use task::Task;
pub use session::{Mode, SessionPhase, SessionChoice};
pub use track::{Track, CatalogResponse, CatalogTrack};
pub use route::Route;

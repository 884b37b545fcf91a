pub mod session_viewmodel;
pub mod player_viewmodel;

pub use session_viewmodel::SessionViewModel;
pub use player_viewmodel::{PlayerViewModel, Skip};

// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod session_state;
pub mod carousel_state;
pub mod player_state;
pub mod app_state;

pub use session_state::*;
pub use carousel_state::*;
pub use player_state::*;
pub use app_state::*;

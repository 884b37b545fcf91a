pub mod app;
pub mod landing;
pub mod task_entry;
pub mod work_session;
pub mod music_player;
pub mod shared;

pub use app::render_app;
pub use landing::render_landing;
pub use task_entry::render_task_entry;
pub use work_session::render_work_session;
pub use music_player::render_music_player;

pub mod back_button;
pub mod logo;

pub use back_button::render_back_button;
pub use logo::render_logo;

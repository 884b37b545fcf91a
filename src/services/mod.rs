pub mod audio;
pub mod catalog_client;
pub mod navigation;

pub use audio::AudioController;
pub use catalog_client::CatalogClient;

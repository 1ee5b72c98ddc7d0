pub mod constants;
pub mod errors;
pub mod impls;
pub mod models;

pub use errors::SettingsError;
pub use models::Settings;

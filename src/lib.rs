pub mod app;
pub mod modules;
mod schema;
pub mod shared;

pub use app::AppServices;
pub use shared::errors::{AppError, AppResult};

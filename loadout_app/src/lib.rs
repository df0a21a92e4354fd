mod app;
mod error;
mod export;

pub use app::{ExportSummary, LoadoutExporter};
pub use error::AppError;
pub use export::write_export;

pub mod app;
pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod person;
pub mod report;
pub mod stats;

pub use app::GRADES;
pub use cli::Cli;
pub use error::{AppError, AppResult};
pub use person::{MAX_AGE, Person};
pub use report::ReportWriter;

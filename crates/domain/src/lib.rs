pub mod api;
pub mod classifier;
pub mod codes;
pub mod dates;
pub mod dialog;
pub mod entities;
pub mod i18n;
pub mod job_draft;
pub mod ports;
pub mod routes;

pub use api::*;
pub use classifier::*;
pub use codes::*;
pub use dialog::*;
pub use entities::*;
pub use job_draft::*;
pub use ports::*;
pub use routes::*;

pub mod services;
pub mod session;
pub mod validation;

pub use services::*;
pub use session::SessionContext;

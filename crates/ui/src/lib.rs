//! Screen controllers and the chrome shared between them.
//!
//! Controllers own their screen state and talk to the user only through
//! the `ModalDispatcher`; rendering is left to whatever implements
//! `ModalPresenter`.

pub mod controllers;
pub mod error_handler;
pub mod modal;
pub mod navigator;
pub mod state;
pub mod view_state;

pub use controllers::*;
pub use error_handler::ErrorHandler;
pub use modal::{ModalController, ModalDispatcher};
pub use navigator::Navigator;
pub use state::UiState;
pub use view_state::ViewState;

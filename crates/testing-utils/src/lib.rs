//! # EasyTV Testing Utils
//!
//! Shared test doubles for the console crates.
//!
//! - **MockGateway**: scripted API responses, records every request
//! - **MockModalPresenter**: scripted dialog answers, records every popup
//! - **Builders**: jobs, services and service tasks with sensible defaults
//! - **Helpers**: response envelopes and pre-filled session stores
//!
//! ```toml
//! [dev-dependencies]
//! easytv-testing-utils = { path = "../testing-utils" }
//! ```

pub mod builders;
pub mod helpers;
pub mod mocks;

pub use builders::*;
pub use helpers::*;
pub use mocks::*;

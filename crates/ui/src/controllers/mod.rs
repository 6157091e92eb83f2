//! 页面控制器

pub mod account;
pub mod admin_dashboard;
pub mod all_jobs;
pub mod create_job;
pub mod dashboard;
pub mod header;
pub mod login;

pub use account::AccountController;
pub use admin_dashboard::AdminDashboardController;
pub use all_jobs::{AllJobsController, JobRow};
pub use create_job::CreateJobController;
pub use dashboard::DashboardController;
pub use header::HeaderController;
pub use login::{LoginController, LoginState};

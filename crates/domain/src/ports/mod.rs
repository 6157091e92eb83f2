//! 领域端口
//!
//! 外部依赖的抽象接口：HTTP网关、会话存储、对话框展示

pub mod gateway;
pub mod presenter;
pub mod storage;

pub use gateway::Gateway;
pub use presenter::ModalPresenter;
pub use storage::SessionStore;

pub mod http_gateway;
pub mod session_store;

pub use http_gateway::ReqwestGateway;
pub use session_store::{FileSessionStore, InMemorySessionStore};

pub mod request;
pub mod types;

pub use request::{AdminResource, ConductorRequest, RpcCall};
pub use types::*;

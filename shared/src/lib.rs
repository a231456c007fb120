pub mod models;
pub mod policy;
pub mod handler;
pub mod config;
pub mod errors;

pub use models::*;
pub use policy::*;
pub use handler::*;
pub use config::*;
pub use errors::*;

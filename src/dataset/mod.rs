pub mod error;
pub mod frame;
pub mod loader;
pub mod norms;
pub mod schema;

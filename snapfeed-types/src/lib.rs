pub mod models;
pub mod viewer;

pub use models::*;
pub use viewer::*;

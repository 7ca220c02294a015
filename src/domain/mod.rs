pub mod error;
pub mod model;
pub mod text;
pub mod token;
pub mod traits;

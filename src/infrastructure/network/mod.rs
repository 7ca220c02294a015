pub mod http;
pub mod unsplash;
pub mod wikipedia;

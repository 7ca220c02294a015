pub mod render;
pub mod reporter;
pub mod theme;

pub mod aggregate;
pub mod describe;
pub mod details;
pub mod location_index;
pub mod search;

//! Destination search: validates a keyword against a known location index,
//! looks up photos and a short description concurrently, and merges them with
//! a curated dataset into a small ordered list of result cards.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

//! Domain types shared by the Proffy storage and HTTP crates.

pub mod errors;
pub mod models;
pub mod time;

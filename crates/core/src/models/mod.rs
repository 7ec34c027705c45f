pub mod class;
pub mod schedule;
pub mod user;

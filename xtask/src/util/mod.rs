pub mod log;
pub mod repo;

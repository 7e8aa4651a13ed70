pub mod dependency_injection;
pub mod seed;
pub mod server;

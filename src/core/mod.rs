pub mod backup;
pub mod calculator;
pub mod config;
pub mod edit;
pub mod log;
pub mod register;
pub mod session;
pub mod show;
pub mod sync;
pub mod targets;

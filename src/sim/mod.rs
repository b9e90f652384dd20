pub mod config;
pub mod lcg;
pub mod event;
pub mod simulation;

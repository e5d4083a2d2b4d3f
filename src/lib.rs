pub mod config;
pub mod log;
pub mod manifest;
pub mod publish;
pub mod registry;
pub mod tag;

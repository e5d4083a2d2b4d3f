#![allow(dead_code)]

pub mod manifest;
pub mod registry;

pub use manifest::write_package_json;
pub use registry::MockRegistry;

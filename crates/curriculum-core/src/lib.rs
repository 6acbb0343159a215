pub mod config;
pub mod engine;
pub mod errors;
pub mod metadata;
pub mod model;
pub mod registry;
pub mod report;
pub mod selector;
pub mod storage;

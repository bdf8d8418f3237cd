pub mod config;
pub mod demo;
pub mod error;
pub mod input;
pub mod model;
pub mod predictor;
pub mod report;
pub mod strength;

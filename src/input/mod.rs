//! Input processing module
//! Handles resume file detection, parsing and loading

pub mod file_detector;
pub mod manager;
pub mod parser;

pub use file_detector::ResumeFormat;
pub use manager::InputManager;

//! Resume input model

pub mod resume;

pub use resume::{CodingProfile, Education, Experience, PersonalInfo, Project, ResumeData, Skills};

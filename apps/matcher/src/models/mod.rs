pub mod job;
pub mod resume;

pub use job::JobDescription;
pub use resume::{ResumeResult, NAME_NOT_FOUND, NOT_FOUND};

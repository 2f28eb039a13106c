// Field extraction from raw resume text. Every extractor is total: missing
// fields come back as sentinels, never as errors.

pub mod email;
pub mod name;
pub mod normalize;
pub mod sections;
pub mod skills;

pub use email::extract_email;
pub use name::{NameContext, NameExtractor};
pub use normalize::{clean_lines, normalize_text};
pub use sections::{extract_experience, extract_skills};
pub use skills::tokenize_skills;

mod curriculum;
mod loader;

pub use curriculum::Curriculum;
pub use loader::{LoadError, builtin_curriculum, load_curriculum_from_json, load_curriculum_from_str};

mod session;
mod size_generator;

pub use session::Session;
pub use size_generator::{RandomSizeGenerator, SizeGenerator};

pub mod logger;

pub use logger::{GenerationLog, GenerationLogger};

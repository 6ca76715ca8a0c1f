pub mod colors;
pub mod progress;

pub use progress::ProgressHandle;

pub mod fs;
pub mod paths;

pub use fs::{ensure_directory, write_atomic};
pub use paths::timestamped_output_path;

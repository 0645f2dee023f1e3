pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{haversine_distance, is_valid_coordinate};
pub use filename::timestamped_filename;
pub use progress::ProgressReporter;

pub mod category;
pub mod reading;

pub use category::AqiCategory;
pub use reading::StationReading;

pub mod csv_writer;
pub mod map_writer;

pub use csv_writer::CsvWriter;
pub use map_writer::MapWriter;

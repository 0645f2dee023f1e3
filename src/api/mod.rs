pub mod client;

pub use client::{parse_response, AqiClient};

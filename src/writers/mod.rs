pub mod json_writer;
pub mod parquet_json;

pub use json_writer::{JsonWriter, WriteSummary};

pub mod batch;
pub mod merger;

pub use batch::{run_batch, BatchReport};
pub use merger::MeasurementMerger;

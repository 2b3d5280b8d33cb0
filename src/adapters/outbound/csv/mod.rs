/// CSV encoding for reference tables and dependency reports
mod codec;

pub use codec::{CsvCodec, CsvSchema};

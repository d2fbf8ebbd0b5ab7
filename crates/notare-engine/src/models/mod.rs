pub mod batch;
pub mod example;
pub mod row;

pub use batch::{BatchError, ExampleBatch};
pub use example::Example;
pub use row::{DocSpan, Row};

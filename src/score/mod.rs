pub mod aggregator;
pub mod schedule;
pub mod trend;

pub use aggregator::*;
pub use schedule::*;
pub use trend::*;

pub mod filter;
pub mod sale;
pub mod trend;

pub use filter::*;
pub use sale::*;
pub use trend::*;

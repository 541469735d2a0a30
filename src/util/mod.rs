pub mod clock;
pub mod priority;
pub mod telemetry;

pub use clock::*;
pub use priority::*;
pub use telemetry::*;

pub mod benchmark;
pub mod combine;
pub mod dashboard;
pub mod differential;
pub mod handicap;
pub mod percentile;
pub mod stats;

pub use benchmark::*;
pub use combine::*;
pub use dashboard::*;
pub use differential::*;
pub use handicap::*;
pub use percentile::*;
pub use stats::*;

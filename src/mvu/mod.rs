pub mod hole;
pub mod runtime;
pub mod session;
pub mod totals;

pub use hole::*;
pub use runtime::*;
pub use session::*;
pub use totals::*;

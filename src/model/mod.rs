pub mod course;
pub mod golfer;
pub mod hole_score;
pub mod round;
pub mod score;
pub mod types;

pub use course::*;
pub use golfer::*;
pub use hole_score::*;
pub use round::*;
pub use score::*;
pub use types::*;

pub mod args;
pub mod config;
pub mod error;
pub mod model;
pub mod mvu;
pub mod score;
pub mod storage;
pub mod view {
    pub mod report;
}

pub use config::EngineConfig;
pub use error::CoreError;
pub use storage::{Repository, RoundStore, Snapshot};

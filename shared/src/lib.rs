pub mod config;
pub mod models;
pub mod storage;
pub mod templates;
pub mod unbelievaboat;

pub use config::Config;
pub use models::*;
pub use storage::{HistoryStore, LoadStatus, LoadedHistory, MetaStore, StorageError};
pub use templates::ChartPageTemplate;
pub use unbelievaboat::{format_description, UnbClient, UnbError};

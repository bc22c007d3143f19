pub mod app;
pub mod catalog;
pub mod config;
pub mod day;
pub mod deriver;
pub mod errors;
pub mod fetcher;
pub mod handlers;
pub mod hash;
pub mod models;
pub mod picker;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use deriver::derive_daily_state;
pub use state::SharedState;
pub use storage::PersistenceAdapter;

pub mod assets;
pub mod config;
pub mod page;
pub mod push;
pub mod routes;
pub mod session;
pub mod ticker;
pub mod view;

pub use config::{Config, ViewSettings};
pub use view::{Counter, TickingCounterView, ViewState};

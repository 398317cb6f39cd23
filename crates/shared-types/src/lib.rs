pub mod config;
pub mod error;
pub mod feature_flags;
pub mod models;

// Routing core
pub mod menu;
pub mod routing;
pub mod session;

// Portal records and view logic
pub mod activity;
pub mod course;
pub mod dashboard;
pub mod excuse;
pub mod fixtures;
pub mod forum;
pub mod lost_found;
pub mod notification;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use menu::*;
pub use routing::*;
pub use session::*;

pub use activity::*;
pub use course::*;
pub use dashboard::*;
pub use excuse::*;
pub use forum::*;
pub use lost_found::*;
pub use notification::*;

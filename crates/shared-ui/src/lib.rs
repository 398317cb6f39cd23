//! Portal UI kit: layout chrome and presentational widgets shared by the
//! campus portal views. Stateless apart from the sidebar open/closed flag.

pub mod components;
pub mod theme;

pub use components::*;

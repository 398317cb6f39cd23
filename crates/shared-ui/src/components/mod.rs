// Plain components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod page_header;
pub mod stat_widget;

// Primitive wrappers
pub mod avatar;
pub mod progress;
pub mod switch;

// Layout
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
pub use stat_widget::*;
pub use switch::*;

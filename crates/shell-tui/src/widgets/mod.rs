//! Custom widget components

mod dropdown;
mod header;
mod page;
mod sidebar;

pub use dropdown::{ModuleMenu, UserMenu};
pub use header::MainHeader;
pub use page::PageView;
pub use sidebar::NavSidebar;

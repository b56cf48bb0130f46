pub mod sidebar;

pub use sidebar::{OutputFormat, Sidebar, SidebarRow};

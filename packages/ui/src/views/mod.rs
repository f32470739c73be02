mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod auth_modal;
pub use auth_modal::AuthModal;

mod nav_rail;
pub use nav_rail::NavRail;

mod header;
pub use header::DashboardHeader;

mod designs;
pub use designs::{DesignTypeGrid, RecentDesigns};

mod dashboard;
pub use dashboard::Dashboard;

//! Database models.

mod design;
mod user;

#[cfg(feature = "server")]
pub use design::DesignRow;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;

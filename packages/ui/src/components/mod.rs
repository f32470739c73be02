//! Small form primitives shared by the views.

mod button;
pub use button::{Button, ButtonSize, ButtonVariant};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

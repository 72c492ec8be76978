//! UI Components

pub mod animated_section;
pub mod chat_widget;
pub mod entrance;
pub mod footer;
pub mod icon;
pub mod navbar;

pub use animated_section::{AnimatedSection, RevealItem};
pub use chat_widget::ChatWidget;
pub use entrance::Entrance;
pub use footer::Footer;
pub use icon::Icon;
pub use navbar::Navbar;

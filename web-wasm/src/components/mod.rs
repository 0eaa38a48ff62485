//! セクションごとのUIコンポーネント

pub mod about;
pub mod contact;
pub mod footer;
pub mod home;
pub mod icon;
pub mod menu;
pub mod project;
pub mod skill;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use home::Home;
pub use icon::Icon;
pub use menu::Menu;
pub use project::Project;
pub use skill::Skill;

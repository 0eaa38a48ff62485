//! Portfolio Common Library
//!
//! CLIとWeb(WASM)で共有されるコンテンツ型とUI状態

pub mod types;
pub mod error;
pub mod content;
pub mod description;
pub mod gallery;
pub mod nav;
pub mod contact;
pub mod skill;
pub mod profile;

pub use types::{Category, IconPath, IconTable, KeyedList, ProjectRecord, SkillGroup, VectorIcon};
pub use error::{Error, Result};
pub use content::{Content, ContentIssue};
pub use description::{fill_template, format_description, segments_to_html, Segment};
pub use gallery::{visible_indices, visible_projects, GalleryState, OpenProject};
pub use nav::{is_near_bottom, Layout, NavState, ScrollAlign, Section, Theme};
pub use contact::{ContactForm, ContactState, ContactStatus, EmailConfig, EmailRequest};
pub use skill::{rotation_from_unit, SkillSelection};

//! Folio Content Registry
//!
//! Immutable, hand-authored records that feed the page: achievements,
//! projects, skill categories, navigation links and the owner's profile.
//! The built-in registry is compiled in; a replacement can be read from TOML.

mod builtin;
pub mod model;
pub mod registry;

pub use model::{
    Achievement, AchievementKind, NavLink, Profile, Project, ProjectCategory, ProjectFilter,
    Skill, SkillCategory, SkillProject, SocialLink,
};
pub use registry::ContentRegistry;

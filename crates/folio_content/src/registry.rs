//! Content registry
//!
//! Ordered, read-only record sequences. Order is display order.

use crate::builtin;
use crate::model::{
    Achievement, NavLink, Profile, Project, ProjectFilter, SkillCategory,
};
use folio_core::{FolioError, Result};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// All records the page renders
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentRegistry {
    profile: Profile,
    #[serde(default)]
    nav: Vec<NavLink>,
    #[serde(default)]
    skills: Vec<SkillCategory>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    achievements: Vec<Achievement>,
}

impl ContentRegistry {
    pub fn new(
        profile: Profile,
        nav: Vec<NavLink>,
        skills: Vec<SkillCategory>,
        projects: Vec<Project>,
        achievements: Vec<Achievement>,
    ) -> Self {
        Self {
            profile,
            nav,
            skills,
            projects,
            achievements,
        }
    }

    /// The registry compiled into the site
    pub fn builtin() -> Self {
        Self::new(
            builtin::profile(),
            builtin::nav_links(),
            builtin::skill_categories(),
            builtin::projects(),
            builtin::achievements(),
        )
    }

    /// Parse a registry from TOML and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let registry: ContentRegistry =
            toml::from_str(content).map_err(|e| FolioError::Parse(e.to_string()))?;
        registry.validate()?;
        Ok(registry)
    }

    /// Load a registry from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&content)
            .map_err(|e| FolioError::Parse(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(
            "ContentRegistry::load - {} ({} projects, {} skill panels, {} achievements)",
            path.display(),
            registry.projects.len(),
            registry.skills.len(),
            registry.achievements.len()
        );
        Ok(registry)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FolioError::Serialization(e.to_string()))
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav
    }

    pub fn skill_categories(&self) -> &[SkillCategory] {
        &self.skills
    }

    pub fn skill_category(&self, id: &str) -> Option<&SkillCategory> {
        self.skills.iter().find(|category| category.id == id)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects matching the filter, in registry order
    pub fn projects_in(&self, filter: ProjectFilter) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| filter.matches(p))
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Check ids are unique, titles present, and nav links are anchors
    pub fn validate(&self) -> Result<()> {
        let mut seen = FxHashSet::default();
        for achievement in &self.achievements {
            if !seen.insert(achievement.id) {
                return Err(FolioError::Validation(format!(
                    "duplicate achievement id {}",
                    achievement.id
                )));
            }
            require_text("achievement title", &achievement.title)?;
        }

        seen.clear();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(FolioError::Validation(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            require_text("project title", &project.title)?;
        }

        let mut category_ids = FxHashSet::default();
        for category in &self.skills {
            require_text("skill category id", &category.id)?;
            if !category_ids.insert(category.id.as_str()) {
                return Err(FolioError::Validation(format!(
                    "duplicate skill category id {:?}",
                    category.id
                )));
            }
        }

        for link in &self.nav {
            if link.anchor().is_none() {
                return Err(FolioError::Validation(format!(
                    "nav link {:?} must point at a section anchor, got {:?}",
                    link.name, link.href
                )));
            }
        }

        require_text("profile name", &self.profile.name)
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn require_text(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FolioError::Validation(format!("{} is empty", what)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectCategory;

    #[test]
    fn test_builtin_is_valid() {
        ContentRegistry::builtin().validate().unwrap();
    }

    #[test]
    fn test_filter_preserves_order() {
        let registry = ContentRegistry::builtin();
        let ids: Vec<u32> = registry
            .projects_in(ProjectFilter::Only(ProjectCategory::Mobile))
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2, 6]);
        assert_eq!(
            registry.projects_in(ProjectFilter::All).count(),
            registry.projects().len()
        );
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut registry = ContentRegistry::builtin();
        let copy = registry.projects[0].clone();
        registry.projects.push(copy);
        assert!(matches!(
            registry.validate(),
            Err(FolioError::Validation(_))
        ));
    }

    #[test]
    fn test_external_nav_link_rejected() {
        let mut registry = ContentRegistry::builtin();
        registry.nav.push(NavLink::new("Blog", "https://blog.example"));
        assert!(registry.validate().is_err());
    }
}

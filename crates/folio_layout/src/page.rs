//! Page renderer
//!
//! Maps registry records to a self-contained HTML document. The renderer is a
//! [`fmt::Display`] value, so a page is produced with `to_string()` or written
//! straight into any formatter.
//!
//! Skill panels are carousel surfaces: each list is emitted twice, the second
//! copy hidden from assistive technology, and the panel carries a
//! `data-carousel` attribute naming its panel key (the category id).

use folio_animation::{reveal, AnimationPreset, EntranceAnimation};
use folio_content::{
    Achievement, ContentRegistry, Project, ProjectFilter, SkillCategory,
};
use folio_theme::ThemeState;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt;

/// Section anchors in page order
pub const SECTIONS: [&str; 6] = ["home", "about", "skills", "projects", "achievements", "contact"];

/// Rendering choices that are not part of the content
#[derive(Clone, Debug, PartialEq)]
pub struct PageOptions {
    /// Which projects the grid shows
    pub filter: ProjectFilter,
    /// Render animated blocks at rest rather than at their initial keyframe
    pub revealed: bool,
    /// Year printed in the footer
    pub year: Option<i32>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            filter: ProjectFilter::All,
            revealed: true,
            year: None,
        }
    }
}

/// Renders one page
pub struct PageRenderer<'a> {
    registry: &'a ContentRegistry,
    theme: &'a ThemeState,
    options: PageOptions,
}

impl<'a> PageRenderer<'a> {
    pub fn new(registry: &'a ContentRegistry, theme: &'a ThemeState) -> Self {
        Self {
            registry,
            theme,
            options: PageOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_filter(mut self, filter: ProjectFilter) -> Self {
        self.options.filter = filter;
        self
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Document title
    pub fn title(&self) -> String {
        format!("{} | Portfolio", self.registry.profile().name)
    }

    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.registry.profile();
        writeln!(f, "<header class=\"site-header\">")?;
        writeln!(f, "<div class=\"brand\">{}</div>", text(&profile.name))?;
        writeln!(f, "<nav class=\"nav-desktop\">")?;
        for link in self.registry.nav_links() {
            writeln!(f, "{}", anchor(&link.href, &text(&link.name), ""))?;
        }
        self.theme_toggle(f)?;
        writeln!(f, "</nav>")?;
        self.theme_toggle(f)?;
        writeln!(
            f,
            "<button class=\"menu-toggle\" aria-label=\"Toggle Menu\" aria-expanded=\"false\" data-icon=\"menu\"></button>"
        )?;
        writeln!(f, "<nav class=\"nav-mobile\" hidden>")?;
        for link in self.registry.nav_links() {
            writeln!(f, "{}", anchor(&link.href, &text(&link.name), ""))?;
        }
        writeln!(f, "</nav>")?;
        writeln!(f, "</header>")
    }

    fn theme_toggle(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<button class=\"theme-toggle\" aria-label=\"{}\" data-icon=\"{}\"></button>",
            attr(self.theme.toggle_label()),
            self.theme.toggle_icon()
        )
    }

    fn section_heading(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        intro: Option<&str>,
    ) -> fmt::Result {
        let motion = self.motion(&AnimationPreset::fade_in_up());
        writeln!(f, "<div class=\"section-heading\"{}>", motion)?;
        writeln!(f, "<h2>{}</h2>", text(title))?;
        if let Some(intro) = intro {
            writeln!(f, "<p>{}</p>", text(intro))?;
        }
        writeln!(f, "</div>")
    }

    fn hero(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.registry.profile();
        writeln!(
            f,
            "<section id=\"home\" class=\"hero\"{}>",
            self.motion(&AnimationPreset::fade_in())
        )?;
        writeln!(
            f,
            "<h1><span>Hi, I'm</span> <span class=\"accent\">{}</span></h1>",
            text(&profile.name)
        )?;
        writeln!(f, "<h2>{}</h2>", text(&profile.tagline))?;
        writeln!(
            f,
            "<div class=\"actions\">{}{}</div>",
            anchor("#projects", "View My Work", "button primary"),
            anchor("#contact", "Contact Me", "button outline")
        )?;
        writeln!(
            f,
            "<a href=\"#about\" class=\"scroll-hint\" aria-label=\"Scroll to About section\" data-icon=\"arrow-down\"></a>"
        )?;
        writeln!(f, "</section>")
    }

    fn about(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.registry.profile();
        writeln!(f, "<section id=\"about\">")?;
        self.section_heading(f, "About Me", None)?;
        if let Some(photo) = &profile.photo {
            writeln!(
                f,
                "<div class=\"portrait\"{}><img src=\"{}\" alt=\"{}\"></div>",
                self.motion(&AnimationPreset::fade_in_left()),
                attr(photo),
                attr(&profile.name)
            )?;
        }
        writeln!(
            f,
            "<div class=\"bio\"{}>",
            self.motion(&AnimationPreset::fade_in_right())
        )?;
        writeln!(f, "<h3>{}</h3>", text(&profile.headline))?;
        for paragraph in &profile.about {
            writeln!(f, "<p>{}</p>", text(paragraph))?;
        }
        if !profile.interests.is_empty() {
            writeln!(f, "<ul class=\"interests\">")?;
            for interest in &profile.interests {
                writeln!(f, "<li>{}</li>", text(interest))?;
            }
            writeln!(f, "</ul>")?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")
    }

    fn skills(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section id=\"skills\">")?;
        self.section_heading(
            f,
            "My Skills",
            Some(
                "Here are my key skills demonstrated through various projects. \
                 Click on any project to see it in action.",
            ),
        )?;
        writeln!(f, "<div class=\"skill-grid\">")?;
        for (index, category) in self.registry.skill_categories().iter().enumerate() {
            self.skill_panel(f, index, category)?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")
    }

    fn skill_panel(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        category: &SkillCategory,
    ) -> fmt::Result {
        writeln!(
            f,
            "<div class=\"skill-panel\"{}>",
            self.motion(&AnimationPreset::stagger_item(index, 0))
        )?;
        writeln!(
            f,
            "<h3><i data-icon=\"{}\"></i>{}</h3>",
            attr(&category.icon),
            text(&category.name)
        )?;
        writeln!(
            f,
            "<div class=\"carousel\" data-carousel=\"{}\" data-rows=\"{}\">",
            attr(&category.id),
            category.row_count()
        )?;
        // Two copies back to back; the carousel wraps at the seam
        for copy in 0..2 {
            if copy == 0 {
                writeln!(f, "<ul>")?;
            } else {
                writeln!(f, "<ul aria-hidden=\"true\">")?;
            }
            for skill in &category.skills {
                if skill.projects.is_empty() {
                    writeln!(f, "<li><h4>{}</h4></li>", text(&skill.name))?;
                }
                for project in &skill.projects {
                    let body = format!(
                        "<strong>{}</strong><p>{}</p>",
                        text(&project.name),
                        text(&project.description)
                    );
                    writeln!(
                        f,
                        "<li><h4>{}</h4>{}</li>",
                        text(&skill.name),
                        anchor(&project.link, &body, "skill-project")
                    )?;
                }
            }
            writeln!(f, "</ul>")?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</div>")
    }

    fn projects(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section id=\"projects\">")?;
        self.section_heading(
            f,
            "My Projects",
            Some(
                "Here are some of the projects I've worked on during my academic journey \
                 and personal exploration. Each project represents a unique challenge and \
                 learning experience.",
            ),
        )?;

        writeln!(f, "<div class=\"filters\">")?;
        for filter in ProjectFilter::all() {
            let active = filter == self.options.filter;
            writeln!(
                f,
                "<button data-filter=\"{}\" aria-pressed=\"{}\"{}>{}</button>",
                filter,
                active,
                if active { " class=\"active\"" } else { "" },
                text(filter.label())
            )?;
        }
        writeln!(f, "</div>")?;

        writeln!(f, "<div class=\"project-grid\">")?;
        let mut shown = 0;
        for (index, project) in self.registry.projects_in(self.options.filter).enumerate() {
            self.project_card(f, index, project)?;
            shown += 1;
        }
        if shown == 0 {
            writeln!(f, "<p class=\"empty\">No projects in this category.</p>")?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</section>")
    }

    fn project_card(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        project: &Project,
    ) -> fmt::Result {
        writeln!(
            f,
            "<article class=\"project\" data-category=\"{}\"{}>",
            project.category.as_str(),
            self.motion(&AnimationPreset::stagger_item(index, 0))
        )?;
        writeln!(
            f,
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            attr(&project.image),
            attr(&project.title)
        )?;
        writeln!(f, "<h3>{}</h3>", text(&project.title))?;
        writeln!(f, "<p>{}</p>", text(&project.description))?;
        if !project.technologies.is_empty() {
            writeln!(f, "<ul class=\"tags\">")?;
            for tech in &project.technologies {
                writeln!(f, "<li>{}</li>", text(tech))?;
            }
            writeln!(f, "</ul>")?;
        }
        writeln!(f, "<div class=\"links\">")?;
        if let Some(live) = &project.live_link {
            writeln!(f, "{}", anchor(live, "Live Demo", "live"))?;
        }
        if let Some(code) = &project.github_link {
            writeln!(f, "{}", anchor(code, "Code", "code"))?;
        }
        writeln!(f, "</div>")?;
        writeln!(f, "</article>")
    }

    fn achievements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<section id=\"achievements\">")?;
        self.section_heading(
            f,
            "Achievements & Education",
            Some(
                "My academic journey, professional achievements, and continuous learning \
                 path that have shaped my skills and knowledge in computer science.",
            ),
        )?;
        writeln!(f, "<ol class=\"timeline\">")?;
        for (index, achievement) in self.registry.achievements().iter().enumerate() {
            self.timeline_item(f, index, achievement)?;
        }
        writeln!(f, "</ol>")?;
        writeln!(f, "</section>")
    }

    fn timeline_item(
        &self,
        f: &mut fmt::Formatter<'_>,
        index: usize,
        achievement: &Achievement,
    ) -> fmt::Result {
        let from_left = index % 2 == 0;
        writeln!(
            f,
            "<li class=\"{}\" data-kind=\"{}\"{}>",
            if from_left { "left" } else { "right" },
            achievement.kind.as_str(),
            self.motion(&AnimationPreset::timeline_item(index, from_left))
        )?;
        writeln!(
            f,
            "<span class=\"dot\" data-icon=\"{}\"></span>",
            achievement.kind.icon()
        )?;
        writeln!(f, "<time>{}</time>", text(&achievement.date))?;
        writeln!(f, "<h3>{}</h3>", text(&achievement.title))?;
        writeln!(f, "<p>{}</p>", text(&achievement.description))?;
        writeln!(f, "</li>")
    }

    fn contact(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.registry.profile();
        writeln!(f, "<section id=\"contact\">")?;
        self.section_heading(
            f,
            "Get In Touch",
            Some("Let's connect and see how we can drive learning and innovation together."),
        )?;
        writeln!(
            f,
            "<ul class=\"contact\"{}>",
            self.motion(&AnimationPreset::fade_in_up_deep())
        )?;
        let mailto = format!("mailto:{}", profile.email);
        writeln!(
            f,
            "<li><h4>Email</h4>{}</li>",
            anchor(&mailto, &text(&profile.email), "")
        )?;
        if let Some(location) = &profile.location {
            writeln!(f, "<li><h4>Location</h4><p>{}</p></li>", text(location))?;
        }
        for social in &profile.socials {
            writeln!(
                f,
                "<li><h4>{}</h4>{}</li>",
                text(&social.label),
                anchor(&social.url, &text(&social.caption), "")
            )?;
        }
        writeln!(f, "</ul>")?;
        writeln!(f, "</section>")
    }

    fn footer(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<footer>")?;
        writeln!(
            f,
            "<p>Designed &amp; Built by {}</p>",
            text(&self.registry.profile().name)
        )?;
        match self.options.year {
            Some(year) => writeln!(f, "<p>&copy; {} All rights reserved.</p>", year)?,
            None => writeln!(f, "<p>&copy; All rights reserved.</p>")?,
        }
        writeln!(f, "</footer>")
    }

    /// Entrance-animation attributes for an animated block
    fn motion(&self, preset: &EntranceAnimation) -> String {
        let state = reveal(self.options.revealed, preset);
        format!(
            " data-reveal data-duration=\"{}\" data-delay=\"{}\" style=\"{}\"",
            preset.duration_ms,
            preset.delay_ms,
            state.to_css()
        )
    }
}

impl fmt::Display for PageRenderer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html_class = if self.theme.is_dark() {
            " class=\"dark\""
        } else {
            ""
        };
        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html lang=\"en\"{}>", html_class)?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"utf-8\">")?;
        writeln!(
            f,
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"
        )?;
        writeln!(f, "<title>{}</title>", text(&self.title()))?;
        writeln!(f, "<style>{}</style>", self.theme.to_css_root_block())?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        self.header(f)?;
        writeln!(f, "<main>")?;
        self.hero(f)?;
        self.about(f)?;
        self.skills(f)?;
        self.projects(f)?;
        self.achievements(f)?;
        self.contact(f)?;
        writeln!(f, "</main>")?;
        self.footer(f)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

/// Render the whole page with default options
pub fn render_page(registry: &ContentRegistry, theme: &ThemeState) -> String {
    PageRenderer::new(registry, theme).to_string()
}

/// Links leaving the page
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// `<a>` element; `inner` must already be escaped
fn anchor(href: &str, inner: &str, class: &str) -> String {
    let mut out = format!("<a href=\"{}\"", attr(href));
    if !class.is_empty() {
        out.push_str(&format!(" class=\"{}\"", attr(class)));
    }
    if is_external(href) {
        out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    out.push('>');
    out.push_str(inner);
    out.push_str("</a>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ProjectCategory;
    use folio_theme::ColorScheme;

    #[test]
    fn test_anchor_marks_external_links() {
        let external = anchor("https://github.com/rustadadam", "GitHub", "");
        assert!(external.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
        let internal = anchor("#projects", "Projects", "");
        assert!(!internal.contains("target="));
    }

    #[test]
    fn test_anchor_escapes_href() {
        let a = anchor("/search?q=\"x\"", "x", "");
        assert!(a.contains("href=\"/search?q=&quot;x&quot;\""));
    }

    #[test]
    fn test_dark_theme_marks_root() {
        let registry = ContentRegistry::builtin();
        let dark = ThemeState::new(ColorScheme::Dark);
        let html = render_page(&registry, &dark);
        assert!(html.contains("<html lang=\"en\" class=\"dark\">"));
        assert!(html.contains("data-icon=\"sun\""));

        let light = ThemeState::new(ColorScheme::Light);
        assert!(render_page(&registry, &light).contains("<html lang=\"en\">"));
    }

    #[test]
    fn test_filter_limits_cards() {
        let registry = ContentRegistry::builtin();
        let theme = ThemeState::default();
        let html = PageRenderer::new(&registry, &theme)
            .with_filter(ProjectFilter::Only(ProjectCategory::Other))
            .to_string();
        assert_eq!(html.matches("<article class=\"project\"").count(), 1);
        assert!(html.contains("Algorithmic Trading Simulator"));
        assert!(html.contains("data-filter=\"other\" aria-pressed=\"true\""));
    }

    #[test]
    fn test_unrevealed_blocks_start_hidden() {
        let registry = ContentRegistry::builtin();
        let theme = ThemeState::default();
        let html = PageRenderer::new(&registry, &theme)
            .with_options(PageOptions {
                revealed: false,
                ..Default::default()
            })
            .to_string();
        assert!(html.contains("style=\"opacity:0;transform:translate(-60px,0px) scale(1)\""));
    }
}

//! Visual themes. Both variants share one renderer and differ only in selectors,
//! class names, captions and boot timing.

use std::time::Duration;

/// Default title substring that marks the featured project.
pub const DEFAULT_FEATURED_MARKER: &str = "Stock_AI";

/// Stable container selectors, one per render target.
#[derive(Debug, Clone, PartialEq)]
pub struct Targets {
    pub hero_greeting: &'static str,
    pub hero_name: &'static str,
    pub hero_title: &'static str,
    pub hero_description: &'static str,
    pub hero_cta: &'static str,
    pub hero_project: &'static str,
    pub skills: &'static str,
    pub project_filters: &'static str,
    pub projects: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub publications: &'static str,
    pub contact: &'static str,
    pub boot_screen: &'static str,
}

/// Theme-specific class names. Interaction hooks (`reveal`, `project-card`,
/// `filter-btn`) are not themable and live in the markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Classes {
    pub card: &'static str,
    pub badge: &'static str,
    pub tech_tag: &'static str,
    pub button_primary: &'static str,
    pub button_secondary: &'static str,
    pub link: &'static str,
    pub featured_title: &'static str,
    pub featured_description: &'static str,
    pub featured_link: &'static str,
    pub skills_grid: &'static str,
    pub skill_category: &'static str,
    pub skill_item: &'static str,
    pub project_tag: &'static str,
    pub timeline: &'static str,
    pub entry_title: &'static str,
    pub entry_subtitle: &'static str,
    pub entry_meta: &'static str,
    pub muted: &'static str,
    pub contact_link: &'static str,
    pub boot_line: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootScript {
    pub lines: &'static [&'static str],
    pub line_delay: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub greeting: &'static str,
    pub title_caption: &'static str,
    pub featured_marker: String,
    pub targets: Targets,
    pub classes: Classes,
    pub boot: BootScript,
}

const TARGETS: Targets = Targets {
    hero_greeting: ".hero-greeting",
    hero_name: ".hero-name",
    hero_title: ".hero-title",
    hero_description: ".hero-description",
    hero_cta: ".hero-cta",
    hero_project: "#hero-project-content",
    skills: "#skills-content",
    project_filters: "#project-filters",
    projects: "#projects-content",
    experience: "#experience-content",
    education: "#education-content",
    publications: "#publications-content",
    contact: "#contact-links",
    boot_screen: "#loading-screen",
};

impl Theme {
    pub const NAMES: [&'static str; 2] = ["glass", "terminal"];

    pub fn glass() -> Self {
        Theme {
            name: "glass",
            greeting: "Hi there! 👋 I'm",
            title_caption: "MSc Computer Science Student | ML Engineer | Systems Builder",
            featured_marker: DEFAULT_FEATURED_MARKER.to_string(),
            targets: TARGETS,
            classes: Classes {
                card: "glass-card",
                badge: "hero-project-badge",
                tech_tag: "tech-tag",
                button_primary: "btn btn-primary",
                button_secondary: "btn btn-secondary",
                link: "project-link",
                featured_title: "hero-project-title",
                featured_description: "hero-project-description",
                featured_link: "hero-project-link",
                skills_grid: "skills-grid",
                skill_category: "skill-category",
                skill_item: "skill-item",
                project_tag: "project-tag",
                timeline: "timeline",
                entry_title: "experience-title",
                entry_subtitle: "experience-company",
                entry_meta: "experience-meta",
                muted: "text-secondary",
                contact_link: "contact-link",
                boot_line: "boot-line",
            },
            boot: BootScript {
                lines: &["Loading profile", "Rendering sections", "Ready"],
                line_delay: Duration::from_millis(150),
            },
        }
    }

    pub fn terminal() -> Self {
        Theme {
            name: "terminal",
            greeting: "$ whoami",
            title_caption: "ML Engineer // Systems Builder // MSc CS",
            featured_marker: DEFAULT_FEATURED_MARKER.to_string(),
            targets: TARGETS,
            classes: Classes {
                card: "term-window",
                badge: "term-badge",
                tech_tag: "term-tag",
                button_primary: "term-btn term-btn-primary",
                button_secondary: "term-btn term-btn-secondary",
                link: "term-link",
                featured_title: "term-featured-title",
                featured_description: "term-featured-description",
                featured_link: "term-featured-link",
                skills_grid: "term-grid",
                skill_category: "term-skill-group",
                skill_item: "term-skill",
                project_tag: "term-tag",
                timeline: "term-log",
                entry_title: "term-entry-title",
                entry_subtitle: "term-entry-subtitle",
                entry_meta: "term-entry-meta",
                muted: "term-muted",
                contact_link: "term-contact",
                boot_line: "term-boot-line",
            },
            boot: BootScript {
                lines: &[
                    "[  OK  ] Mounted /profile.json",
                    "[  OK  ] Loaded modules: skills projects experience",
                    "[  OK  ] Started portfolio.service",
                    "[  OK  ] Reached target: interactive shell",
                ],
                line_delay: Duration::from_millis(350),
            },
        }
    }

    /// Looks up a built-in theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "glass" => Some(Self::glass()),
            "terminal" => Some(Self::terminal()),
            _ => None,
        }
    }

    pub fn with_featured_marker(mut self, marker: impl Into<String>) -> Self {
        self.featured_marker = marker.into();
        self
    }

    pub fn with_boot_delay(mut self, delay: Duration) -> Self {
        self.boot.line_delay = delay;
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::glass()
    }
}

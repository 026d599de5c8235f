// Section renderer: one immutable profile, one pass per section in fixed order.
// Views hold the data policy, markup formats them, the surface receives the result.

pub mod markup;
pub mod surface;
pub mod view;

use maud::Markup;
use serde::Serialize;
use tracing::{debug, info};

use crate::models::profile::Profile;
use crate::theme::Theme;

pub use surface::{HostPage, MemorySurface, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Hero,
    HeroLinks,
    HeroProject,
    Skills,
    ProjectFilters,
    Projects,
    Experience,
    Education,
    Publications,
    Contact,
}

impl SectionKind {
    /// Render order. Filters precede projects so controls exist before cards.
    pub const ORDER: [SectionKind; 10] = [
        SectionKind::Hero,
        SectionKind::HeroLinks,
        SectionKind::HeroProject,
        SectionKind::Skills,
        SectionKind::ProjectFilters,
        SectionKind::Projects,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Publications,
        SectionKind::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::HeroLinks => "hero_links",
            SectionKind::HeroProject => "hero_project",
            SectionKind::Skills => "skills",
            SectionKind::ProjectFilters => "project_filters",
            SectionKind::Projects => "projects",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Publications => "publications",
            SectionKind::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Rendered,
    /// Target container absent from the page.
    MissingContainer,
    /// Nothing to show for this profile (no featured project, no publications).
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderReport {
    pub outcomes: Vec<(SectionKind, Outcome)>,
}

impl RenderReport {
    #[cfg(test)]
    pub fn outcome(&self, kind: SectionKind) -> Option<Outcome> {
        self.outcomes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, o)| *o)
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == outcome).count()
    }
}

pub struct Renderer<'a> {
    profile: &'a Profile,
    theme: &'a Theme,
}

impl<'a> Renderer<'a> {
    pub fn new(profile: &'a Profile, theme: &'a Theme) -> Self {
        Self { profile, theme }
    }

    /// Runs every section in [`SectionKind::ORDER`].
    pub fn render_all<S: Surface>(&self, surface: &mut S) -> RenderReport {
        info!("Rendering all sections (theme: {})", self.theme.name);
        let outcomes: Vec<(SectionKind, Outcome)> = SectionKind::ORDER
            .into_iter()
            .map(|kind| (kind, self.render(kind, surface)))
            .collect();
        let report = RenderReport { outcomes };
        info!(
            "All sections rendered: {} written, {} missing container, {} skipped",
            report.count(Outcome::Rendered),
            report.count(Outcome::MissingContainer),
            report.count(Outcome::Skipped)
        );
        report
    }

    pub fn render<S: Surface>(&self, kind: SectionKind, surface: &mut S) -> Outcome {
        match kind {
            SectionKind::Hero => self.hero(surface),
            SectionKind::HeroLinks => self.hero_links(surface),
            SectionKind::HeroProject => self.hero_project(surface),
            SectionKind::Skills => self.skills(surface),
            SectionKind::ProjectFilters => self.project_filters(surface),
            SectionKind::Projects => self.projects(surface),
            SectionKind::Experience => self.experience(surface),
            SectionKind::Education => self.education(surface),
            SectionKind::Publications => self.publications(surface),
            SectionKind::Contact => self.contact(surface),
        }
    }

    /// Writes four independent targets; each missing one is skipped on its own.
    pub fn hero<S: Surface>(&self, surface: &mut S) -> Outcome {
        let view = view::hero(self.profile, self.theme);
        let targets = &self.theme.targets;
        let mut written = 0;
        for (selector, value) in [
            (targets.hero_greeting, view.greeting),
            (targets.hero_name, view.name),
            (targets.hero_title, view.title),
            (targets.hero_description, view.tagline),
        ] {
            if surface.replace_children(selector, &markup::text(value).into_string()) {
                written += 1;
            }
        }

        if written == 0 {
            debug!("Section hero skipped: no hero targets on page");
            Outcome::MissingContainer
        } else {
            Outcome::Rendered
        }
    }

    pub fn hero_links<S: Surface>(&self, surface: &mut S) -> Outcome {
        let view = view::hero_links(self.profile);
        write(
            surface,
            SectionKind::HeroLinks,
            self.theme.targets.hero_cta,
            markup::hero_links(&view, &self.theme.classes),
        )
    }

    pub fn hero_project<S: Surface>(&self, surface: &mut S) -> Outcome {
        let Some(view) = view::featured_project(self.profile, &self.theme.featured_marker) else {
            debug!(
                "Section hero_project skipped: no project title contains '{}'",
                self.theme.featured_marker
            );
            return Outcome::Skipped;
        };
        write(
            surface,
            SectionKind::HeroProject,
            self.theme.targets.hero_project,
            markup::featured_project(&view, &self.theme.classes),
        )
    }

    pub fn skills<S: Surface>(&self, surface: &mut S) -> Outcome {
        let views = view::skills(self.profile);
        write(
            surface,
            SectionKind::Skills,
            self.theme.targets.skills,
            markup::skills(&views, &self.theme.classes),
        )
    }

    pub fn project_filters<S: Surface>(&self, surface: &mut S) -> Outcome {
        let view = view::project_filters(self.profile);
        write(
            surface,
            SectionKind::ProjectFilters,
            self.theme.targets.project_filters,
            markup::project_filters(&view),
        )
    }

    pub fn projects<S: Surface>(&self, surface: &mut S) -> Outcome {
        let views = view::project_cards(self.profile, &self.theme.featured_marker);
        write(
            surface,
            SectionKind::Projects,
            self.theme.targets.projects,
            markup::project_cards(&views, &self.theme.classes),
        )
    }

    pub fn experience<S: Surface>(&self, surface: &mut S) -> Outcome {
        let views = view::experience(self.profile);
        write(
            surface,
            SectionKind::Experience,
            self.theme.targets.experience,
            markup::experience(&views, &self.theme.classes),
        )
    }

    pub fn education<S: Surface>(&self, surface: &mut S) -> Outcome {
        let views = view::education(self.profile);
        write(
            surface,
            SectionKind::Education,
            self.theme.targets.education,
            markup::education(&views, &self.theme.classes),
        )
    }

    /// Leaves the container untouched when there are no publications.
    pub fn publications<S: Surface>(&self, surface: &mut S) -> Outcome {
        let Some(views) = view::publications(self.profile) else {
            debug!("Section publications skipped: no publications");
            return Outcome::Skipped;
        };
        write(
            surface,
            SectionKind::Publications,
            self.theme.targets.publications,
            markup::publications(&views, &self.theme.classes),
        )
    }

    pub fn contact<S: Surface>(&self, surface: &mut S) -> Outcome {
        let views = view::contact(self.profile);
        write(
            surface,
            SectionKind::Contact,
            self.theme.targets.contact,
            markup::contact(&views, &self.theme.classes),
        )
    }
}

fn write<S: Surface>(
    surface: &mut S,
    kind: SectionKind,
    selector: &str,
    markup: Markup,
) -> Outcome {
    if surface.replace_children(selector, &markup.into_string()) {
        Outcome::Rendered
    } else {
        debug!("Section {} skipped: container '{selector}' not found", kind.as_str());
        Outcome::MissingContainer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_profile, HOST_PAGE};
    use serde_json::json;

    fn all_targets(theme: &Theme) -> MemorySurface {
        let t = &theme.targets;
        MemorySurface::with_containers([
            t.hero_greeting,
            t.hero_name,
            t.hero_title,
            t.hero_description,
            t.hero_cta,
            t.hero_project,
            t.skills,
            t.project_filters,
            t.projects,
            t.experience,
            t.education,
            t.publications,
            t.contact,
        ])
    }

    #[test]
    fn test_render_all_runs_in_fixed_order() {
        let profile = sample_profile();
        let theme = Theme::glass();
        let mut surface = all_targets(&theme);
        let report = Renderer::new(&profile, &theme).render_all(&mut surface);
        let order: Vec<SectionKind> = report.outcomes.iter().map(|(k, _)| *k).collect();
        assert_eq!(order, SectionKind::ORDER);
        assert_eq!(report.count(Outcome::Rendered), 10);
    }

    #[test]
    fn test_render_all_is_idempotent_on_host_page() {
        let profile = sample_profile();
        let theme = Theme::glass();
        let renderer = Renderer::new(&profile, &theme);
        let mut page = HostPage::parse(HOST_PAGE);
        renderer.render_all(&mut page);
        let first = page.to_html();
        renderer.render_all(&mut page);
        assert_eq!(page.to_html(), first);
    }

    #[test]
    fn test_separate_builds_are_byte_identical() {
        let profile = sample_profile();
        let theme = Theme::terminal();
        let build = || {
            let mut page = HostPage::parse(HOST_PAGE);
            Renderer::new(&profile, &theme).render_all(&mut page);
            page.to_html()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_missing_containers_are_skipped() {
        let profile = sample_profile();
        let theme = Theme::glass();
        let mut surface = MemorySurface::with_containers([theme.targets.skills]);
        let report = Renderer::new(&profile, &theme).render_all(&mut surface);
        assert_eq!(report.outcome(SectionKind::Skills), Some(Outcome::Rendered));
        assert_eq!(report.outcome(SectionKind::Contact), Some(Outcome::MissingContainer));
        assert_eq!(report.outcome(SectionKind::Hero), Some(Outcome::MissingContainer));
    }

    #[test]
    fn test_publications_container_untouched_when_absent() {
        let profile: Profile = serde_json::from_value(json!({"basics": {"name": "A"}})).unwrap();
        let theme = Theme::glass();
        let mut page = HostPage::parse(HOST_PAGE);
        let before = page.inner_html(theme.targets.publications);
        let outcome = Renderer::new(&profile, &theme).publications(&mut page);
        assert_eq!(outcome, Outcome::Skipped);
        assert_eq!(page.inner_html(theme.targets.publications), before);
    }

    #[test]
    fn test_stock_ai_scenario_renders_featured_and_empty_grid() {
        let profile: Profile = serde_json::from_value(json!({
            "projects": [{
                "title": "Stock_AI Predictor",
                "tags": ["ml"],
                "bullet_pool": ["Predicts prices"],
                "links": ["https://github.com/x"],
                "tech": ["Python"]
            }]
        }))
        .unwrap();
        let theme = Theme::glass();
        let mut page = HostPage::parse(HOST_PAGE);
        Renderer::new(&profile, &theme).render_all(&mut page);
        let featured = page.inner_html(theme.targets.hero_project).unwrap();
        assert!(featured.contains("Stock_AI Predictor"));
        assert!(featured.contains("Predicts prices"));
        assert!(featured.contains(r#"<span class="tech-tag">Python</span>"#));
        assert_eq!(page.count(".project-card"), 0);
        assert_eq!(page.count(".filter-btn"), 2);
    }

    #[test]
    fn test_empty_links_fall_back_to_anchors() {
        let profile: Profile =
            serde_json::from_value(json!({"basics": {"name": "A", "links": []}})).unwrap();
        let theme = Theme::glass();
        let mut page = HostPage::parse(HOST_PAGE);
        Renderer::new(&profile, &theme).render_all(&mut page);
        let cta = page.inner_html(theme.targets.hero_cta).unwrap();
        assert!(cta.contains(r##"href="#contact""##));
        assert!(cta.contains(r##"href="#projects""##));
    }

    #[test]
    fn test_filter_count_is_capped_plus_all() {
        let tags: Vec<String> = (0..12).map(|i| format!("tag{i:02}")).collect();
        let profile: Profile = serde_json::from_value(json!({
            "projects": [{"title": "Wide", "tags": tags}]
        }))
        .unwrap();
        let theme = Theme::glass();
        let mut page = HostPage::parse(HOST_PAGE);
        Renderer::new(&profile, &theme).project_filters(&mut page);
        assert_eq!(page.count(".filter-btn"), 9);
        assert_eq!(page.count(r#".filter-btn[data-filter="all"]"#), 1);
        assert_eq!(page.count(r#".filter-btn[data-filter="tag07"]"#), 1);
        assert_eq!(page.count(r#".filter-btn[data-filter="tag08"]"#), 0);
    }

    #[test]
    fn test_hero_writes_text_targets() {
        let profile = sample_profile();
        let theme = Theme::terminal();
        let mut page = HostPage::parse(HOST_PAGE);
        assert_eq!(Renderer::new(&profile, &theme).hero(&mut page), Outcome::Rendered);
        assert_eq!(page.inner_html(".hero-name").as_deref(), Some("Ada Lovelace"));
        assert_eq!(page.inner_html(".hero-greeting").as_deref(), Some("$ whoami"));
    }

    #[test]
    fn test_skills_render_in_document_order_with_display_names() {
        let profile = sample_profile();
        let theme = Theme::glass();
        let mut surface = all_targets(&theme);
        Renderer::new(&profile, &theme).skills(&mut surface);
        let html = surface.get(theme.targets.skills).unwrap();
        let languages = html.find("Languages &amp; Tools").unwrap();
        let ml = html.find("Machine Learning").unwrap();
        assert!(languages < ml);
    }
}

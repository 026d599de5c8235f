//! Per-section view models built from a [`Profile`].
//!
//! All data-shape policy lives here: link selection, featured exclusion,
//! truncation limits and fallbacks. Templates only format these records.

use std::collections::BTreeSet;

use crate::models::profile::Profile;
use crate::theme::Theme;

pub const MAX_FILTER_TAGS: usize = 8;
pub const MAX_CARD_TAGS: usize = 3;
pub const MAX_EXPERIENCE_BULLETS: usize = 3;
pub const NO_DESCRIPTION: &str = "No description available";

const PRIMARY_LINK_LABEL: &str = "LinkedIn";
const SECONDARY_LINK_LABEL: &str = "GitHub";
const PRIMARY_FALLBACK: &str = "#contact";
const SECONDARY_FALLBACK: &str = "#projects";

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView<'a> {
    pub greeting: &'a str,
    pub name: &'a str,
    pub title: &'a str,
    pub tagline: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroLinksView<'a> {
    pub primary: &'a str,
    pub secondary: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedProjectView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub tech: &'a [String],
    pub demo_link: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategoryView<'a> {
    pub display_name: String,
    pub items: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardView<'a> {
    pub title: &'a str,
    /// All tags joined with `,`, consumed by the filter interaction.
    pub data_tags: String,
    pub tags: &'a [String],
    pub description: &'a str,
    pub code_link: Option<&'a str>,
    pub live_link: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FiltersView<'a> {
    pub tags: Vec<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceView<'a> {
    pub role: &'a str,
    pub company: &'a str,
    pub location: &'a str,
    pub dates: &'a str,
    pub bullets: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationView<'a> {
    pub degree: &'a str,
    pub school: &'a str,
    pub location: &'a str,
    pub dates: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PublicationView<'a> {
    pub author_position: &'a str,
    pub title: &'a str,
    pub venue_line: String,
    pub link: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    Phone,
    LinkedIn,
    GitHub,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 4] = [
        ContactChannel::Email,
        ContactChannel::Phone,
        ContactChannel::LinkedIn,
        ContactChannel::GitHub,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContactChannel::Email => "Email",
            ContactChannel::Phone => "Phone",
            ContactChannel::LinkedIn => "LinkedIn",
            ContactChannel::GitHub => "GitHub",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ContactChannel::Email => "✉️",
            ContactChannel::Phone => "📱",
            ContactChannel::LinkedIn => "💼",
            ContactChannel::GitHub => "💻",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactView {
    pub channel: ContactChannel,
    pub href: String,
}

pub fn hero<'a>(profile: &'a Profile, theme: &'a Theme) -> HeroView<'a> {
    HeroView {
        greeting: theme.greeting,
        name: &profile.basics.name,
        title: theme.title_caption,
        tagline: profile.tagline().unwrap_or_default(),
    }
}

pub fn hero_links(profile: &Profile) -> HeroLinksView<'_> {
    HeroLinksView {
        primary: non_empty(profile.basics.link(PRIMARY_LINK_LABEL)).unwrap_or(PRIMARY_FALLBACK),
        secondary: non_empty(profile.basics.link(SECONDARY_LINK_LABEL))
            .unwrap_or(SECONDARY_FALLBACK),
    }
}

/// `None` when no project title contains the marker.
pub fn featured_project<'a>(profile: &'a Profile, marker: &str) -> Option<FeaturedProjectView<'a>> {
    let project = profile.featured_project(marker)?;
    Some(FeaturedProjectView {
        title: &project.title,
        description: project.first_bullet().unwrap_or_default(),
        tech: &project.tech,
        demo_link: project.links.first().map(String::as_str),
    })
}

pub fn skills(profile: &Profile) -> Vec<SkillCategoryView<'_>> {
    profile
        .skills
        .iter()
        .map(|category| SkillCategoryView {
            display_name: category.display_name(),
            items: &category.items,
        })
        .collect()
}

/// Cards for every project except those matching the featured marker.
pub fn project_cards<'a>(profile: &'a Profile, marker: &str) -> Vec<ProjectCardView<'a>> {
    profile
        .projects
        .iter()
        .filter(|p| !p.is_featured(marker))
        .map(|project| ProjectCardView {
            title: &project.title,
            data_tags: project.tags.join(","),
            tags: &project.tags[..project.tags.len().min(MAX_CARD_TAGS)],
            description: project.first_bullet().unwrap_or(NO_DESCRIPTION),
            code_link: project.code_link(),
            live_link: project.live_link(),
        })
        .collect()
}

/// Distinct tags across all projects, ascending, capped at [`MAX_FILTER_TAGS`].
pub fn project_filters(profile: &Profile) -> FiltersView<'_> {
    let universe: BTreeSet<&str> = profile
        .projects
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .collect();
    FiltersView {
        tags: universe.into_iter().take(MAX_FILTER_TAGS).collect(),
    }
}

pub fn experience(profile: &Profile) -> Vec<ExperienceView<'_>> {
    profile
        .work_experience
        .iter()
        .map(|exp| ExperienceView {
            role: &exp.role,
            company: &exp.company,
            location: &exp.location,
            dates: &exp.dates,
            bullets: &exp.bullet_pool[..exp.bullet_pool.len().min(MAX_EXPERIENCE_BULLETS)],
        })
        .collect()
}

pub fn education(profile: &Profile) -> Vec<EducationView<'_>> {
    profile
        .education
        .iter()
        .map(|edu| EducationView {
            degree: &edu.degree,
            school: &edu.school,
            location: &edu.location,
            dates: &edu.dates,
        })
        .collect()
}

/// `None` when the profile has no publications, so the container stays untouched.
pub fn publications(profile: &Profile) -> Option<Vec<PublicationView<'_>>> {
    let publications = profile.publications();
    if publications.is_empty() {
        return None;
    }
    Some(
        publications
            .iter()
            .map(|pub_| PublicationView {
                author_position: &pub_.author_position,
                title: &pub_.title,
                venue_line: venue_line(&pub_.venue, &pub_.year),
                link: non_empty(pub_.link.as_deref()),
            })
            .collect(),
    )
}

/// Contact channels in fixed order. Channels without a value are omitted.
pub fn contact(profile: &Profile) -> Vec<ContactView> {
    let basics = &profile.basics;
    ContactChannel::ALL
        .into_iter()
        .filter_map(|channel| {
            let href = match channel {
                ContactChannel::Email => {
                    non_empty(basics.email.as_deref()).map(|e| format!("mailto:{e}"))
                }
                ContactChannel::Phone => {
                    non_empty(basics.phone.as_deref()).map(|p| format!("tel:{p}"))
                }
                ContactChannel::LinkedIn => {
                    non_empty(basics.link(PRIMARY_LINK_LABEL)).map(str::to_string)
                }
                ContactChannel::GitHub => {
                    non_empty(basics.link(SECONDARY_LINK_LABEL)).map(str::to_string)
                }
            }?;
            Some(ContactView { channel, href })
        })
        .collect()
}

fn venue_line(venue: &str, year: &str) -> String {
    match (venue.is_empty(), year.is_empty()) {
        (false, false) => format!("{venue}, {year}"),
        (false, true) => venue.to_string(),
        (true, false) => year.to_string(),
        (true, true) => String::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_profile;
    use serde_json::json;

    fn profile(value: serde_json::Value) -> Profile {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_hero_uses_name_and_first_summary() {
        let p = sample_profile();
        let theme = Theme::glass();
        let view = hero(&p, &theme);
        assert_eq!(view.name, "Ada Lovelace");
        assert_eq!(view.tagline, "Builds analytical engines.");
        assert_eq!(view.title, theme.title_caption);
    }

    #[test]
    fn test_hero_links_fallback_when_no_links() {
        let p = profile(json!({"basics": {"name": "A", "links": []}}));
        let view = hero_links(&p);
        assert_eq!(view.primary, "#contact");
        assert_eq!(view.secondary, "#projects");
    }

    #[test]
    fn test_hero_links_select_by_label() {
        let p = sample_profile();
        let view = hero_links(&p);
        assert_eq!(view.primary, "https://linkedin.com/in/ada");
        assert_eq!(view.secondary, "https://github.com/ada");
    }

    #[test]
    fn test_featured_project_scenario() {
        let p = profile(json!({
            "projects": [{
                "title": "Stock_AI Predictor",
                "tags": ["ml"],
                "bullet_pool": ["Predicts prices"],
                "links": ["https://github.com/x"],
                "tech": ["Python"]
            }]
        }));
        let featured = featured_project(&p, "Stock_AI").unwrap();
        assert_eq!(featured.title, "Stock_AI Predictor");
        assert_eq!(featured.description, "Predicts prices");
        assert_eq!(featured.tech, ["Python"]);
        assert_eq!(featured.demo_link, Some("https://github.com/x"));
        assert!(project_cards(&p, "Stock_AI").is_empty());
    }

    #[test]
    fn test_featured_project_absent() {
        let p = profile(json!({"projects": [{"title": "Plain"}]}));
        assert!(featured_project(&p, "Stock_AI").is_none());
        assert_eq!(project_cards(&p, "Stock_AI").len(), 1);
    }

    #[test]
    fn test_all_marker_matches_excluded_from_grid() {
        let p = profile(json!({
            "projects": [
                {"title": "Stock_AI one"},
                {"title": "Grid"},
                {"title": "Stock_AI two"}
            ]
        }));
        let cards = project_cards(&p, "Stock_AI");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Grid");
        assert_eq!(featured_project(&p, "Stock_AI").unwrap().title, "Stock_AI one");
    }

    #[test]
    fn test_project_card_links_and_fallbacks() {
        let p = profile(json!({
            "projects": [
                {
                    "title": "Both",
                    "links": ["https://site.dev", "https://github.com/a", "https://github.com/b"]
                },
                {"title": "None", "links": []},
                {"title": "CodeOnly", "links": ["https://github.com/c"], "bullet_pool": ["Does c"]}
            ]
        }));
        let cards = project_cards(&p, "Stock_AI");
        assert_eq!(cards[0].code_link, Some("https://github.com/a"));
        assert_eq!(cards[0].live_link, Some("https://site.dev"));
        assert_eq!(cards[0].description, NO_DESCRIPTION);
        assert_eq!(cards[1].code_link, None);
        assert_eq!(cards[1].live_link, None);
        assert_eq!(cards[2].live_link, None);
        assert_eq!(cards[2].description, "Does c");
    }

    #[test]
    fn test_project_card_tags_truncated_but_data_tags_complete() {
        let p = profile(json!({"projects": [{"title": "T", "tags": ["a", "b", "c", "d"]}]}));
        let cards = project_cards(&p, "Stock_AI");
        assert_eq!(cards[0].tags, ["a", "b", "c"]);
        assert_eq!(cards[0].data_tags, "a,b,c,d");
    }

    #[test]
    fn test_filters_sorted_distinct_capped() {
        let p = profile(json!({
            "projects": [
                {"title": "1", "tags": ["rust", "ml", "web", "c"]},
                {"title": "2", "tags": ["ml", "zig", "go", "ai", "db", "os", "k8s"]}
            ]
        }));
        let view = project_filters(&p);
        assert_eq!(view.tags, vec!["ai", "c", "db", "go", "k8s", "ml", "os", "rust"]);
    }

    #[test]
    fn test_filters_include_featured_project_tags() {
        let p = profile(json!({"projects": [{"title": "Stock_AI", "tags": ["ml"]}]}));
        assert_eq!(project_filters(&p).tags, vec!["ml"]);
    }

    #[test]
    fn test_experience_limited_to_three_bullets() {
        let p = profile(json!({
            "work_experience": [
                {"role": "Dev", "bullet_pool": ["1", "2", "3", "4", "5"]},
                {"role": "Intern"}
            ]
        }));
        let views = experience(&p);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].bullets, ["1", "2", "3"]);
        assert!(views[1].bullets.is_empty());
    }

    #[test]
    fn test_publications_absent_or_empty() {
        assert!(publications(&profile(json!({}))).is_none());
        assert!(publications(&profile(json!({"publications": []}))).is_none());
    }

    #[test]
    fn test_publications_link_optional() {
        let p = sample_profile();
        let views = publications(&p).unwrap();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].venue_line, "NeurIPS, 2024");
        assert!(views[0].link.is_some());
        assert!(views[1].link.is_none());
    }

    #[test]
    fn test_contact_full_channels_in_order() {
        let views = contact(&sample_profile());
        let channels: Vec<ContactChannel> = views.iter().map(|v| v.channel).collect();
        assert_eq!(channels, ContactChannel::ALL);
        assert_eq!(views[0].href, "mailto:ada@example.com");
        assert_eq!(views[1].href, "tel:+44 20 0000 0000");
    }

    #[test]
    fn test_contact_hides_channels_without_value() {
        let p = profile(json!({
            "basics": {
                "email": "a@b.c",
                "links": [{"label": "GitHub", "url": "https://github.com/a"}]
            }
        }));
        let views = contact(&p);
        let channels: Vec<ContactChannel> = views.iter().map(|v| v.channel).collect();
        assert_eq!(channels, vec![ContactChannel::Email, ContactChannel::GitHub]);
        assert!(views.iter().all(|v| !v.href.contains("undefined")));
    }
}

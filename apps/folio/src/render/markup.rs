//! Maud templates for each section view. All interpolation is escaped.

use maud::{html, Markup};

use crate::render::view::{
    ContactView, EducationView, ExperienceView, FeaturedProjectView, FiltersView,
    HeroLinksView, ProjectCardView, PublicationView, SkillCategoryView,
};
use crate::theme::{Classes, Theme};

/// Class the scroll-reveal interaction observes.
pub const REVEAL: &str = "reveal";

pub fn text(value: &str) -> Markup {
    html! { (value) }
}

pub fn hero_links(view: &HeroLinksView<'_>, c: &Classes) -> Markup {
    html! {
        a href=(view.primary) target="_blank" class=(c.button_primary) {
            span { "Let's Connect" }
            span { "→" }
        }
        a href=(view.secondary) target="_blank" class=(c.button_secondary) {
            span { "View My Work" }
            span { "↓" }
        }
    }
}

pub fn featured_project(view: &FeaturedProjectView<'_>, c: &Classes) -> Markup {
    html! {
        span class=(c.badge) { "⭐ Featured Project" }
        h3 class=(c.featured_title) { (view.title) }
        p class=(c.featured_description) { (view.description) }
        div class="hero-project-tech" {
            @for tech in view.tech {
                span class=(c.tech_tag) { (tech) }
            }
        }
        @if let Some(link) = view.demo_link {
            a href=(link) target="_blank" class=(c.featured_link) {
                span { "View Live Demo" }
                span { "→" }
            }
        }
    }
}

pub fn skills(views: &[SkillCategoryView<'_>], c: &Classes) -> Markup {
    html! {
        div class=(c.skills_grid) {
            @for category in views {
                div class={ (c.skill_category) " " (REVEAL) } {
                    h3 class="skill-category-title" { (category.display_name) }
                    ul class="skill-list" {
                        @for skill in category.items {
                            li class=(c.skill_item) { (skill) }
                        }
                    }
                }
            }
        }
    }
}

pub fn project_filters(view: &FiltersView<'_>) -> Markup {
    html! {
        button class="filter-btn active" data-filter="all" { "All" }
        @for tag in &view.tags {
            button class="filter-btn" data-filter=(tag) { (tag) }
        }
    }
}

pub fn project_cards(views: &[ProjectCardView<'_>], c: &Classes) -> Markup {
    html! {
        @for card in views {
            div class={ "project-card " (REVEAL) } data-tags=(card.data_tags) {
                div class="project-header" {
                    h3 class="project-title" { (card.title) }
                    div class="project-tags" {
                        @for tag in card.tags {
                            span class=(c.project_tag) { (tag) }
                        }
                    }
                }
                p class="project-description" { (card.description) }
                div class="project-links" {
                    @if let Some(link) = card.code_link {
                        a href=(link) target="_blank" class=(c.link) {
                            span { "Code" }
                            span { "→" }
                        }
                    }
                    @if let Some(link) = card.live_link {
                        a href=(link) target="_blank" class=(c.link) {
                            span { "Live Demo" }
                            span { "↗" }
                        }
                    }
                }
            }
        }
    }
}

pub fn experience(views: &[ExperienceView<'_>], c: &Classes) -> Markup {
    html! {
        div class=(c.timeline) {
            @for exp in views {
                div class={ "timeline-item " (REVEAL) } {
                    div class="experience-card" {
                        div class="experience-header" {
                            div {
                                h3 class=(c.entry_title) { (exp.role) }
                                div class=(c.entry_subtitle) { (exp.company) }
                            }
                            (meta(exp.location, exp.dates, c))
                        }
                        ul class="experience-description" {
                            @for bullet in exp.bullets {
                                li { (bullet) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn education(views: &[EducationView<'_>], c: &Classes) -> Markup {
    html! {
        @for edu in views {
            div class={ (c.card) " " (REVEAL) } {
                h3 class=(c.entry_title) { (edu.degree) }
                div class=(c.entry_subtitle) { (edu.school) }
                (meta(edu.location, edu.dates, c))
            }
        }
    }
}

pub fn publications(views: &[PublicationView<'_>], c: &Classes) -> Markup {
    html! {
        @for publication in views {
            div class={ (c.card) " " (REVEAL) } {
                span class=(c.badge) { "📄 " (publication.author_position) }
                h3 class="project-title" { (publication.title) }
                p class=(c.muted) { (publication.venue_line) }
                @if let Some(link) = publication.link {
                    a href=(link) target="_blank" class=(c.link) {
                        span { "View Publication" }
                        span { "→" }
                    }
                }
            }
        }
    }
}

pub fn contact(views: &[ContactView], c: &Classes) -> Markup {
    html! {
        @for item in views {
            a href=(item.href) target="_blank" class=(c.contact_link) {
                span { (item.channel.icon()) }
                span { (item.channel.label()) }
            }
        }
    }
}

pub fn boot_screen(theme: &Theme) -> Markup {
    html! {
        div class="boot-sequence" data-theme=(theme.name) {
            @for line in theme.boot.lines {
                p class=(theme.classes.boot_line) { (line) }
            }
        }
    }
}

/// Blocking notice shown when the profile cannot be loaded.
pub fn failure_notice() -> Markup {
    html! {
        div class="error-container" role="alert" {
            h2 { "⚠️ Failed to Load Profile Data" }
            p { "Please check your internet connection and refresh the page." }
        }
    }
}

fn meta(location: &str, dates: &str, c: &Classes) -> Markup {
    html! {
        div class=(c.entry_meta) {
            span { "📍 " (location) }
            span { "📅 " (dates) }
        }
    }
}

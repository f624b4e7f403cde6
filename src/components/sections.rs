//! Content sections: about, skills, experience, projects, education.
//!
//! Every block carrying `data-watch` is registered with the controller at
//! startup (see `content::reveal_ids`) and picks up `fade-in-up` once seen.

use dioxus::prelude::*;

use crate::components::{reveal_class, LazyImage};
use crate::content::{self, ABOUT, EDUCATION, EXPERIENCE, PROJECTS, SKILLS};
use crate::context::use_page;

#[component]
pub fn About() -> Element {
    let page = use_page();
    let revealed = page.state().read().is_revealed(content::ABOUT_CONTENT_ID);

    rsx! {
        section { id: "about", class: "section about",
            h2 { class: "section-title", "About Me" }
            div {
                id: content::ABOUT_CONTENT_ID,
                class: reveal_class("about-content", revealed),
                "data-watch": "true",
                for paragraph in ABOUT.iter() {
                    p { class: "about-text", "{paragraph}" }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();

    rsx! {
        section { id: "skills", class: "section skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-grid",
                for (i, category) in SKILLS.iter().enumerate() {
                    div {
                        key: "{i}",
                        id: content::skill_category_id(i),
                        class: reveal_class("skill-category", state.is_revealed(&content::skill_category_id(i))),
                        "data-watch": "true",
                        h3 {
                            i { class: "{category.icon}" }
                            " {category.title}"
                        }
                        div { class: "skill-items",
                            for item in category.items.iter() {
                                span { class: "skill-item", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Experience() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();

    rsx! {
        section { id: "experience", class: "section experience",
            h2 { class: "section-title", "Experience" }
            div { class: "timeline",
                for (i, item) in EXPERIENCE.iter().enumerate() {
                    div {
                        key: "{i}",
                        id: content::timeline_item_id(i),
                        class: reveal_class("timeline-item", state.is_revealed(&content::timeline_item_id(i))),
                        "data-watch": "true",
                        span { class: "timeline-date", "{item.period}" }
                        h3 { "{item.title}" }
                        h4 { "{item.place}" }
                        p { "{item.summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();

    rsx! {
        section { id: "projects", class: "section projects",
            h2 { class: "section-title", "Projects" }
            div { class: "projects-grid",
                for (i, project) in PROJECTS.iter().enumerate() {
                    div {
                        key: "{i}",
                        id: content::project_card_id(i),
                        class: reveal_class("project-card", state.is_revealed(&content::project_card_id(i))),
                        "data-watch": "true",
                        div { class: "project-image",
                            LazyImage { id: content::project_image_id(i), alt: project.title.to_string() }
                        }
                        div { class: "project-body",
                            h3 { "{project.title}" }
                            p { "{project.description}" }
                            div { class: "project-tags",
                                for tag in project.tags.iter() {
                                    span { class: "tag", "{tag}" }
                                }
                            }
                            a { class: "project-link", href: "{project.link}", target: "_blank", rel: "noopener noreferrer",
                                i { class: "fab fa-github" }
                                " Source"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Education() -> Element {
    let page = use_page();
    let state = page.state();
    let state = state.read();

    rsx! {
        section { id: "education", class: "section education",
            h2 { class: "section-title", "Education" }
            div { class: "education-grid",
                for (i, entry) in EDUCATION.iter().enumerate() {
                    div {
                        key: "{i}",
                        id: content::education_card_id(i),
                        class: reveal_class("education-card", state.is_revealed(&content::education_card_id(i))),
                        "data-watch": "true",
                        i { class: "fas fa-graduation-cap" }
                        h3 { "{entry.degree}" }
                        p { "{entry.school}" }
                        span { class: "education-period", "{entry.period}" }
                    }
                }
            }
        }
    }
}

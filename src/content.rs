//! Page content.
//!
//! Static copy for the portfolio sections. Element ids derived here are the
//! ones the controller watches for fade-in and lazy loading, so markup and
//! registration cannot drift apart.

/// Nav menu entries: section id and label, in menu order.
pub const NAV: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("education", "Education"),
    ("contact", "Contact"),
];

pub const ROLE: &str = "Software Developer";

pub const ABOUT: &[&str] = &[
    "I build reliable software end to end, from data pipelines to the interfaces people use every day.",
    "I care about readable code, fast feedback loops and shipping things that stay fixed.",
];

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        icon: "fas fa-code",
        items: &["Rust", "Python", "JavaScript", "Java", "SQL"],
    },
    SkillCategory {
        title: "Web",
        icon: "fas fa-globe",
        items: &["HTML", "CSS", "React", "Node.js"],
    },
    SkillCategory {
        title: "Tools",
        icon: "fas fa-tools",
        items: &["Git", "Docker", "Linux", "PostgreSQL"],
    },
];

pub struct TimelineItem {
    pub period: &'static str,
    pub title: &'static str,
    pub place: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: &[TimelineItem] = &[
    TimelineItem {
        period: "2023 - Present",
        title: "Software Developer",
        place: "Freelance",
        summary: "Web applications and automation tools for small businesses.",
    },
    TimelineItem {
        period: "2022 - 2023",
        title: "Software Engineering Intern",
        place: "Product studio",
        summary: "Built internal dashboards and REST integrations.",
    },
];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio",
        description: "This site: scroll-aware navigation, themes and a mail-client contact form.",
        image: "assets/projects/portfolio.png",
        tags: &["Rust", "Dioxus"],
        link: "https://github.com/Raos0nu",
    },
    Project {
        title: "Task Tracker",
        description: "Offline-first task lists with keyboard-driven editing.",
        image: "assets/projects/tasks.png",
        tags: &["TypeScript", "IndexedDB"],
        link: "https://github.com/Raos0nu",
    },
    Project {
        title: "Weather Board",
        description: "Forecast dashboard aggregating several public weather feeds.",
        image: "assets/projects/weather.png",
        tags: &["Python", "Flask"],
        link: "https://github.com/Raos0nu",
    },
];

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
}

pub const EDUCATION: &[Education] = &[Education {
    degree: "B.Tech in Computer Science",
    school: "University",
    period: "2019 - 2023",
}];

pub fn skill_category_id(index: usize) -> String {
    format!("skill-category-{}", index)
}

pub fn timeline_item_id(index: usize) -> String {
    format!("timeline-item-{}", index)
}

pub fn project_card_id(index: usize) -> String {
    format!("project-card-{}", index)
}

pub fn project_image_id(index: usize) -> String {
    format!("project-image-{}", index)
}

pub fn education_card_id(index: usize) -> String {
    format!("education-card-{}", index)
}

pub const ABOUT_CONTENT_ID: &str = "about-content";
pub const CONTACT_CONTENT_ID: &str = "contact-content";

/// Section ids the nav menu links to.
pub fn nav_ids() -> Vec<String> {
    NAV.iter().map(|(id, _)| id.to_string()).collect()
}

/// Every block that fades in on first view.
pub fn reveal_ids() -> Vec<String> {
    let mut ids = vec![ABOUT_CONTENT_ID.to_string()];
    ids.extend((0..SKILLS.len()).map(skill_category_id));
    ids.extend((0..EXPERIENCE.len()).map(timeline_item_id));
    ids.extend((0..PROJECTS.len()).map(project_card_id));
    ids.extend((0..EDUCATION.len()).map(education_card_id));
    ids.push(CONTACT_CONTENT_ID.to_string());
    ids
}

/// Images loaded only once they scroll into view: element id and source.
pub fn deferred_images() -> Vec<(String, &'static str)> {
    PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| (project_image_id(i), project.image))
        .collect()
}

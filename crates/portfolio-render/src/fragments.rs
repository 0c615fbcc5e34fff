//! HTML fragment renderers.
//!
//! Each renderer maps an ordered sequence of records to a fixed markup
//! snippet per record, concatenated with no separator, and is a pure
//! function of its input. An empty input sequence yields an empty string;
//! the single-item placeholder fragments for absent sections live with the
//! token defaults, not here.
//!
//! Text fields are HTML-escaped and URL fields sanitized on the way into
//! markup; see [`crate::escape`].

use crate::escape::{escape_html, sanitize_url};
use crate::icons::skill_icon;
use crate::resume::{EducationEntry, ExperienceEntry, Project};

/// Icon class used for projects that don't specify one.
const DEFAULT_PROJECT_ICON: &str = "fas fa-laptop-code";

/// Renders a list of skill names as skill-item markup.
///
/// Each skill gets an icon from the icon map, falling back to the generic
/// code icon for unrecognized names.
pub fn skill_items(skills: &[String]) -> String {
    skills
        .iter()
        .map(|skill| {
            format!(
                r#"<div class="skill-item">
    <div class="skill-icon">
        <i class="{icon}"></i>
    </div>
    <div class="skill-name">{name}</div>
</div>
"#,
                icon = skill_icon(skill),
                name = escape_html(skill),
            )
        })
        .collect()
}

/// Renders education entries as timeline items, in input order.
///
/// An entry with no description gets the stock "Relevant coursework and
/// achievements" line.
pub fn education_timeline(education: &[EducationEntry]) -> String {
    education
        .iter()
        .map(|edu| {
            let description = edu
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or("Relevant coursework and achievements");
            format!(
                r#"<div class="timeline-item">
    <div class="timeline-content">
        <h3 class="timeline-title">{degree}</h3>
        <h4 class="timeline-company">{institution}</h4>
        <p class="timeline-description">{description}</p>
    </div>
    <div class="timeline-date">{year}</div>
</div>
"#,
                degree = escape_html(&edu.degree),
                institution = escape_html(&edu.institution),
                description = escape_html(description),
                year = escape_html(&edu.year),
            )
        })
        .collect()
}

/// Renders work experience entries as timeline items, in input order.
pub fn experience_timeline(experience: &[ExperienceEntry]) -> String {
    experience
        .iter()
        .map(|exp| {
            format!(
                r#"<div class="timeline-item">
    <div class="timeline-content">
        <h3 class="timeline-title">{position}</h3>
        <h4 class="timeline-company">{company}</h4>
        <p class="timeline-description">{description}</p>
    </div>
    <div class="timeline-date">{start} - {end}</div>
</div>
"#,
                position = escape_html(&exp.position),
                company = escape_html(&exp.company),
                description = escape_html(&exp.description),
                start = escape_html(&exp.start_date),
                end = escape_html(&exp.end_date),
            )
        })
        .collect()
}

/// Renders project entries as cards, in input order.
///
/// The live-demo and source-code links are emitted only when the
/// corresponding URL is present and non-empty; absent links produce no
/// markup at all.
pub fn project_cards(projects: &[Project]) -> String {
    projects.iter().map(project_card).collect()
}

fn project_card(project: &Project) -> String {
    let icon = project
        .icon
        .as_deref()
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_PROJECT_ICON);

    let tech_tags: String = project
        .technologies
        .iter()
        .map(|tech| format!(r#"<span class="tech-tag">{}</span>"#, escape_html(tech)))
        .collect();

    let mut links = String::new();
    if let Some(url) = non_empty(project.live_url.as_deref()) {
        links.push_str(&format!(
            r#"<a href="{}" class="project-link" target="_blank"><i class="fas fa-external-link-alt"></i> Live Demo</a>
"#,
            sanitize_url(url)
        ));
    }
    if let Some(url) = non_empty(project.github_url.as_deref()) {
        links.push_str(&format!(
            r#"<a href="{}" class="project-link" target="_blank"><i class="fab fa-github"></i> Source Code</a>
"#,
            sanitize_url(url)
        ));
    }

    format!(
        r#"<div class="project-card">
    <div class="project-image">
        <i class="{icon}"></i>
    </div>
    <div class="project-content">
        <h3 class="project-title">{name}</h3>
        <p class="project-description">{description}</p>
        <div class="project-tech">{tech_tags}</div>
        <div class="project-links">
{links}    </div>
    </div>
</div>
"#,
        icon = escape_html(icon),
        name = escape_html(&project.name),
        description = escape_html(&project.description),
        tech_tags = tech_tags,
        links = links,
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

//! The placeholder token set and the token resolver.
//!
//! Tokens are a fixed, closed enumeration. Each resolves to either plain
//! text or a pre-rendered HTML fragment, with a built-in default covering
//! every absent field: after resolution, every token has a non-empty
//! value. The table is built fresh on every call; nothing is shared or
//! mutated across calls.
//!
//! # Example
//!
//! ```rust
//! use portfolio_render::{resolve_tokens, ResumeData, Token};
//!
//! let table = resolve_tokens(&ResumeData::default());
//! assert_eq!(table.get(Token::FullName), "Your Name");
//! assert_eq!(Token::FullName.marker(), "{{FULL_NAME}}");
//! ```

use std::collections::BTreeMap;

use crate::escape::{escape_html, sanitize_url};
use crate::fragments::{education_timeline, experience_timeline, project_cards, skill_items};
use crate::resume::{Project, ResumeData};

/// A placeholder recognized by the generator.
///
/// Declaration order is the replacement order used by the populator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    FullName,
    FirstName,
    Email,
    Phone,
    Location,
    LinkedinUrl,
    GithubUrl,
    TwitterUrl,
    ResumeDownloadLink,
    JobTitle,
    CurrentPosition,
    ProfessionalSummary,
    AboutDescription,
    ContactMessage,
    YearsExperience,
    ProjectCount,
    SkillCount,
    EducationDegree,
    EducationHistory,
    PrimarySkills,
    ProgrammingLanguages,
    Frameworks,
    DatabasesTools,
    CloudDevops,
    WorkExperience,
    ProjectsList,
    SecondaryTitle1,
    SecondaryTitle2,
    SecondaryTitle3,
}

impl Token {
    /// Every recognized token, in replacement order.
    pub const ALL: [Token; 29] = [
        Token::FullName,
        Token::FirstName,
        Token::Email,
        Token::Phone,
        Token::Location,
        Token::LinkedinUrl,
        Token::GithubUrl,
        Token::TwitterUrl,
        Token::ResumeDownloadLink,
        Token::JobTitle,
        Token::CurrentPosition,
        Token::ProfessionalSummary,
        Token::AboutDescription,
        Token::ContactMessage,
        Token::YearsExperience,
        Token::ProjectCount,
        Token::SkillCount,
        Token::EducationDegree,
        Token::EducationHistory,
        Token::PrimarySkills,
        Token::ProgrammingLanguages,
        Token::Frameworks,
        Token::DatabasesTools,
        Token::CloudDevops,
        Token::WorkExperience,
        Token::ProjectsList,
        Token::SecondaryTitle1,
        Token::SecondaryTitle2,
        Token::SecondaryTitle3,
    ];

    /// The bare token name, e.g. `FULL_NAME`.
    pub fn name(self) -> &'static str {
        match self {
            Token::FullName => "FULL_NAME",
            Token::FirstName => "FIRST_NAME",
            Token::Email => "EMAIL",
            Token::Phone => "PHONE",
            Token::Location => "LOCATION",
            Token::LinkedinUrl => "LINKEDIN_URL",
            Token::GithubUrl => "GITHUB_URL",
            Token::TwitterUrl => "TWITTER_URL",
            Token::ResumeDownloadLink => "RESUME_DOWNLOAD_LINK",
            Token::JobTitle => "JOB_TITLE",
            Token::CurrentPosition => "CURRENT_POSITION",
            Token::ProfessionalSummary => "PROFESSIONAL_SUMMARY",
            Token::AboutDescription => "ABOUT_DESCRIPTION",
            Token::ContactMessage => "CONTACT_MESSAGE",
            Token::YearsExperience => "YEARS_EXPERIENCE",
            Token::ProjectCount => "PROJECT_COUNT",
            Token::SkillCount => "SKILL_COUNT",
            Token::EducationDegree => "EDUCATION_DEGREE",
            Token::EducationHistory => "EDUCATION_HISTORY",
            Token::PrimarySkills => "PRIMARY_SKILLS",
            Token::ProgrammingLanguages => "PROGRAMMING_LANGUAGES",
            Token::Frameworks => "FRAMEWORKS",
            Token::DatabasesTools => "DATABASES_TOOLS",
            Token::CloudDevops => "CLOUD_DEVOPS",
            Token::WorkExperience => "WORK_EXPERIENCE",
            Token::ProjectsList => "PROJECTS_LIST",
            Token::SecondaryTitle1 => "SECONDARY_TITLE_1",
            Token::SecondaryTitle2 => "SECONDARY_TITLE_2",
            Token::SecondaryTitle3 => "SECONDARY_TITLE_3",
        }
    }

    /// The delimited marker form matched in templates, e.g. `{{FULL_NAME}}`.
    ///
    /// Markers are matched as literal text; they contain no pattern syntax
    /// and no token's marker is a substring of another's.
    pub fn marker(self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

/// A resolved token table: every token mapped to a non-empty value.
///
/// Built fresh by [`resolve_tokens`] on each call and never mutated
/// afterwards. Iteration follows [`Token::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenTable {
    values: BTreeMap<Token, String>,
}

impl TokenTable {
    /// Returns the resolved value for a token.
    ///
    /// Tables produced by [`resolve_tokens`] contain every token; the
    /// empty-string return only occurs for hand-built partial tables.
    pub fn get(&self, token: Token) -> &str {
        self.values.get(&token).map_or("", String::as_str)
    }

    /// Iterates tokens and values in replacement order.
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> {
        self.values.iter().map(|(t, v)| (*t, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn insert(&mut self, token: Token, value: String) {
        self.values.insert(token, value);
    }
}

// Default literals, verbatim from the original template data.
const DEFAULT_FULL_NAME: &str = "Your Name";
const DEFAULT_FIRST_NAME: &str = "Your";
const DEFAULT_EMAIL: &str = "your.email@example.com";
const DEFAULT_PHONE: &str = "+1 (555) 123-4567";
const DEFAULT_LOCATION: &str = "Your City, Country";
const DEFAULT_LINKEDIN_URL: &str = "https://linkedin.com/in/yourprofile";
const DEFAULT_GITHUB_URL: &str = "https://github.com/yourusername";
const DEFAULT_TWITTER_URL: &str = "https://twitter.com/yourusername";
const DEFAULT_RESUME_LINK: &str = "#";
const DEFAULT_JOB_TITLE: &str = "Software Developer";
const DEFAULT_SUMMARY: &str = "Passionate developer with expertise in modern web technologies \
     and a love for creating innovative solutions.";
const DEFAULT_ABOUT: &str = "I am a dedicated software developer with a passion for creating \
     efficient, scalable, and user-friendly applications. With experience in various \
     technologies and frameworks, I enjoy tackling complex problems and turning ideas into \
     reality.";
const DEFAULT_CONTACT_MESSAGE: &str = "I'm always interested in new opportunities and exciting \
     projects. Whether you have a question or just want to say hi, feel free to reach out!";
const DEFAULT_YEARS_EXPERIENCE: &str = "3";
const DEFAULT_PROJECT_COUNT: &str = "15";
const DEFAULT_SKILL_COUNT: &str = "20";
const DEFAULT_EDUCATION_DEGREE: &str = "Bachelor's Degree";
const DEFAULT_PRIMARY_SKILLS: &str = "JavaScript, Python, React, Node.js";
const DEFAULT_TITLE_1: &str = "Full Stack Developer";
const DEFAULT_TITLE_2: &str = "Problem Solver";
const DEFAULT_TITLE_3: &str = "Tech Enthusiast";

const FALLBACK_LANGUAGES: [&str; 4] = ["JavaScript", "Python", "Java", "TypeScript"];
const FALLBACK_FRAMEWORKS: [&str; 4] = ["React", "Node.js", "Express", "Django"];
const FALLBACK_DATABASES: [&str; 4] = ["MySQL", "MongoDB", "PostgreSQL", "Redis"];
const FALLBACK_CLOUD: [&str; 4] = ["AWS", "Docker", "Git", "Jenkins"];

const EDUCATION_PLACEHOLDER: &str = r#"<div class="timeline-item"><div class="timeline-content"><h3 class="timeline-title">Your Education</h3><h4 class="timeline-company">Your Institution</h4><p class="timeline-description">Add your educational background</p></div><div class="timeline-date">Year</div></div>"#;

const EXPERIENCE_PLACEHOLDER: &str = r#"<div class="timeline-item"><div class="timeline-content"><h3 class="timeline-title">Your Position</h3><h4 class="timeline-company">Your Company</h4><p class="timeline-description">Add your work experience details</p></div><div class="timeline-date">Start - End</div></div>"#;

fn sample_project() -> Project {
    Project {
        name: "Sample Project".to_string(),
        description: "A brief description of your project and its key features.".to_string(),
        technologies: vec![
            "React".to_string(),
            "Node.js".to_string(),
            "MongoDB".to_string(),
        ],
        icon: Some("fas fa-laptop-code".to_string()),
        live_url: Some("#".to_string()),
        github_url: Some("#".to_string()),
    }
}

/// Resolves every token for a resume record.
///
/// Precedence per token: the corresponding field chain if present and
/// non-empty, otherwise the built-in default. Missing optional fields are
/// an expected case and never error. The returned table is freshly
/// allocated; resolving the same record twice yields identical tables.
pub fn resolve_tokens(data: &ResumeData) -> TokenTable {
    let mut table = TokenTable::default();

    let personal = data.personal_info.as_ref();
    let social = data.social_links.as_ref();
    let professional = data.professional_info.as_ref();
    let stats = data.stats.as_ref();

    // Personal information
    table.insert(
        Token::FullName,
        text_or(
            personal.and_then(|p| p.full_name.as_deref()),
            DEFAULT_FULL_NAME,
        ),
    );
    table.insert(
        Token::FirstName,
        text_or(
            personal.and_then(|p| p.first_name.as_deref()),
            DEFAULT_FIRST_NAME,
        ),
    );
    table.insert(
        Token::Email,
        text_or(personal.and_then(|p| p.email.as_deref()), DEFAULT_EMAIL),
    );
    table.insert(
        Token::Phone,
        text_or(personal.and_then(|p| p.phone.as_deref()), DEFAULT_PHONE),
    );
    table.insert(
        Token::Location,
        text_or(
            personal.and_then(|p| p.location.as_deref()),
            DEFAULT_LOCATION,
        ),
    );

    // Social links
    table.insert(
        Token::LinkedinUrl,
        url_or(
            social.and_then(|s| s.linkedin.as_deref()),
            DEFAULT_LINKEDIN_URL,
        ),
    );
    table.insert(
        Token::GithubUrl,
        url_or(social.and_then(|s| s.github.as_deref()), DEFAULT_GITHUB_URL),
    );
    table.insert(
        Token::TwitterUrl,
        url_or(
            social.and_then(|s| s.twitter.as_deref()),
            DEFAULT_TWITTER_URL,
        ),
    );
    table.insert(
        Token::ResumeDownloadLink,
        url_or(data.resume_url.as_deref(), DEFAULT_RESUME_LINK),
    );

    // Professional information
    table.insert(
        Token::JobTitle,
        text_or(
            professional.and_then(|p| p.current_title.as_deref()),
            DEFAULT_JOB_TITLE,
        ),
    );
    table.insert(
        Token::CurrentPosition,
        text_or(
            professional.and_then(|p| p.current_position.as_deref()),
            DEFAULT_JOB_TITLE,
        ),
    );
    table.insert(
        Token::ProfessionalSummary,
        text_or(
            professional.and_then(|p| p.summary.as_deref()),
            DEFAULT_SUMMARY,
        ),
    );
    table.insert(
        Token::AboutDescription,
        text_or(
            data.about.as_ref().and_then(|a| a.description.as_deref()),
            DEFAULT_ABOUT,
        ),
    );
    table.insert(
        Token::ContactMessage,
        text_or(
            data.contact.as_ref().and_then(|c| c.message.as_deref()),
            DEFAULT_CONTACT_MESSAGE,
        ),
    );

    // Statistics
    table.insert(
        Token::YearsExperience,
        stat_or(
            stats.and_then(|s| s.years_experience.as_ref()),
            DEFAULT_YEARS_EXPERIENCE,
        ),
    );
    table.insert(
        Token::ProjectCount,
        stat_or(
            stats.and_then(|s| s.project_count.as_ref()),
            DEFAULT_PROJECT_COUNT,
        ),
    );
    // The flat count covers whichever categories are provided; the literal
    // default applies only when the skills section is absent entirely.
    table.insert(
        Token::SkillCount,
        match data.skills.as_ref() {
            Some(skills) => skills.total_count().to_string(),
            None => DEFAULT_SKILL_COUNT.to_string(),
        },
    );

    // Education
    let education = non_empty_list(data.education.as_deref());
    table.insert(
        Token::EducationDegree,
        text_or(
            education
                .and_then(|e| e.first())
                .map(|e| e.degree.as_str())
                .filter(|d| !d.is_empty()),
            DEFAULT_EDUCATION_DEGREE,
        ),
    );
    table.insert(
        Token::EducationHistory,
        match education {
            Some(entries) => education_timeline(entries),
            None => EDUCATION_PLACEHOLDER.to_string(),
        },
    );

    // Skills
    let skills = data.skills.as_ref();
    table.insert(
        Token::PrimarySkills,
        text_or(
            skills
                .and_then(|s| non_empty_list(s.primary.as_deref()))
                .map(|list| list.join(", "))
                .as_deref(),
            DEFAULT_PRIMARY_SKILLS,
        ),
    );
    table.insert(
        Token::ProgrammingLanguages,
        skill_fragment(
            skills.and_then(|s| s.programming_languages.as_deref()),
            &FALLBACK_LANGUAGES,
        ),
    );
    table.insert(
        Token::Frameworks,
        skill_fragment(
            skills.and_then(|s| s.frameworks.as_deref()),
            &FALLBACK_FRAMEWORKS,
        ),
    );
    table.insert(
        Token::DatabasesTools,
        skill_fragment(
            skills.and_then(|s| s.databases.as_deref()),
            &FALLBACK_DATABASES,
        ),
    );
    table.insert(
        Token::CloudDevops,
        skill_fragment(
            skills.and_then(|s| s.cloud_devops.as_deref()),
            &FALLBACK_CLOUD,
        ),
    );

    // Experience and projects
    table.insert(
        Token::WorkExperience,
        match non_empty_list(data.experience.as_deref()) {
            Some(entries) => experience_timeline(entries),
            None => EXPERIENCE_PLACEHOLDER.to_string(),
        },
    );
    table.insert(
        Token::ProjectsList,
        match non_empty_list(data.projects.as_deref()) {
            Some(entries) => project_cards(entries),
            None => project_cards(&[sample_project()]),
        },
    );

    // Typewriter titles
    let titles = data.typewriter_titles.as_deref().unwrap_or(&[]);
    table.insert(
        Token::SecondaryTitle1,
        text_or(title_at(titles, 0), DEFAULT_TITLE_1),
    );
    table.insert(
        Token::SecondaryTitle2,
        text_or(title_at(titles, 1), DEFAULT_TITLE_2),
    );
    table.insert(
        Token::SecondaryTitle3,
        text_or(title_at(titles, 2), DEFAULT_TITLE_3),
    );

    table
}

/// Escapes a present, non-empty text value; falls back to the default
/// literal otherwise. Defaults are authored safe and bypass escaping.
fn text_or(value: Option<&str>, default: &str) -> String {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => escape_html(v),
        None => default.to_string(),
    }
}

fn url_or(value: Option<&str>, default: &str) -> String {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => sanitize_url(v),
        None => default.to_string(),
    }
}

fn stat_or(value: Option<&crate::resume::StatValue>, default: &str) -> String {
    match value.map(|v| v.to_string()).filter(|v| !v.is_empty()) {
        Some(v) => escape_html(&v),
        None => default.to_string(),
    }
}

fn skill_fragment(list: Option<&[String]>, fallback: &[&str]) -> String {
    match non_empty_list(list) {
        Some(list) => skill_items(list),
        None => {
            let owned: Vec<String> = fallback.iter().map(|s| s.to_string()).collect();
            skill_items(&owned)
        }
    }
}

/// Treats empty lists as absent, per the fallback policy.
fn non_empty_list<T>(list: Option<&[T]>) -> Option<&[T]> {
    list.filter(|l| !l.is_empty())
}

fn title_at(titles: &[String], index: usize) -> Option<&str> {
    titles.get(index).map(String::as_str)
}

//! # Portfolio Render - Resume-to-Portfolio HTML Generation
//!
//! `portfolio-render` turns a structured resume record into a populated
//! portfolio page. It resolves a fixed set of `{{TOKEN}}` placeholders to
//! plain text and pre-rendered HTML fragments, then rewrites a template
//! string (or a whole template directory) by literal substitution.
//!
//! ## Core Concepts
//!
//! - [`ResumeData`]: the all-optional resume record, loadable from JSON or
//!   YAML in the original camelCase schema
//! - [`Token`] / [`TokenTable`]: the closed placeholder set and its
//!   per-call resolved values
//! - [`populate`]: template string in, rewritten HTML out
//! - [`populate_dir`]: populate an entire site template tree
//! - Fragment renderers: skills, education/experience timelines, project
//!   cards
//!
//! ## Quick Start
//!
//! ```rust
//! use portfolio_render::{populate, ResumeData};
//!
//! let data = ResumeData::from_json_str(r#"{
//!     "personalInfo": { "firstName": "Ana", "email": "a@x.com" },
//!     "professionalInfo": {}
//! }"#).unwrap();
//!
//! let out = populate("Hello {{FIRST_NAME}}, your email is {{EMAIL}}", &data);
//! assert_eq!(out.html, "Hello Ana, your email is a@x.com");
//! ```
//!
//! ## Defaults
//!
//! Every token has a built-in default, so a sparse (even empty) record
//! still yields a fully populated page:
//!
//! ```rust
//! use portfolio_render::{resolve_tokens, ResumeData, Token};
//!
//! let table = resolve_tokens(&ResumeData::default());
//! assert_eq!(table.get(Token::JobTitle), "Software Developer");
//! ```
//!
//! ## Safety
//!
//! Record text lands inside markup, so it is HTML-escaped during
//! resolution and fragment rendering, and URL fields pass a scheme
//! allow-list (`javascript:` links collapse to `#`). Validation is
//! separate and opt-in: [`ResumeData::validate`] checks only that the two
//! required top-level sections are present.
//!
//! ## Thread Safety
//!
//! Resolution and population are pure functions over their inputs; the
//! only shared state is the immutable icon map. Concurrent callers with
//! distinct inputs need no coordination.

mod error;
mod escape;
mod fragments;
mod icons;
mod populate;
mod resume;
mod site;
mod tokens;

pub use error::PortfolioError;

pub use escape::{escape_html, sanitize_url};

pub use icons::{skill_icon, DEFAULT_SKILL_ICON};

pub use resume::{
    About, Contact, EducationEntry, ExperienceEntry, PersonalInfo, ProfessionalInfo, Project,
    ResumeData, Skills, SocialLinks, StatValue, Stats,
};

pub use fragments::{education_timeline, experience_timeline, project_cards, skill_items};

pub use tokens::{resolve_tokens, Token, TokenTable};

pub use populate::{populate, Populated};

pub use site::{populate_dir, SITE_EXTENSIONS};

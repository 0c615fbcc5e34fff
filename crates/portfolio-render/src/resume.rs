//! The resume data model.
//!
//! [`ResumeData`] is the structured input the generator consumes. Every
//! field is optional; absent values fall back to built-in defaults during
//! token resolution. Field names on the wire use the camelCase form of the
//! original data files, so existing resume JSON/YAML loads unchanged.
//!
//! # Example
//!
//! ```rust
//! use portfolio_render::ResumeData;
//!
//! let data = ResumeData::from_json_str(r#"{
//!     "personalInfo": { "fullName": "Ana Lima", "email": "ana@example.com" },
//!     "professionalInfo": { "currentTitle": "Systems Engineer" }
//! }"#).unwrap();
//!
//! assert!(data.validate().is_ok());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// A structured resume record.
///
/// All fields are optional and read-only to the generator. List order is
/// display order; most-recent-first ordering is the caller's responsibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: Option<PersonalInfo>,
    pub social_links: Option<SocialLinks>,
    pub professional_info: Option<ProfessionalInfo>,
    pub about: Option<About>,
    pub contact: Option<Contact>,
    pub stats: Option<Stats>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<Skills>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub projects: Option<Vec<Project>>,
    pub typewriter_titles: Option<Vec<String>>,
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalInfo {
    pub current_title: Option<String>,
    pub current_position: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub message: Option<String>,
}

/// Headline statistics. Resume files supply these as either numbers or
/// strings, so both forms deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub years_experience: Option<StatValue>,
    pub project_count: Option<StatValue>,
}

/// A statistic value: a number or its string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Int(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Int(n) => write!(f, "{}", n),
            StatValue::Float(n) => write!(f, "{}", n),
            StatValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: Option<String>,
}

/// Skill lists grouped by category. Each list is ordered; order is
/// preserved in rendered output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    pub primary: Option<Vec<String>>,
    pub programming_languages: Option<Vec<String>>,
    pub frameworks: Option<Vec<String>>,
    pub databases: Option<Vec<String>>,
    pub cloud_devops: Option<Vec<String>>,
}

impl Skills {
    /// Total entry count across all provided category lists.
    pub fn total_count(&self) -> usize {
        [
            &self.primary,
            &self.programming_languages,
            &self.frameworks,
            &self.databases,
            &self.cloud_devops,
        ]
        .into_iter()
        .flatten()
        .map(Vec::len)
        .sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub icon: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

impl ResumeData {
    /// Parses a resume record from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, PortfolioError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a resume record from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PortfolioError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Checks that the required top-level sections are present.
    ///
    /// Only `personalInfo` and `professionalInfo` are required; nested
    /// fields are never validated. All missing sections are reported in a
    /// single [`PortfolioError::MissingFields`].
    pub fn validate(&self) -> Result<(), PortfolioError> {
        let mut missing = Vec::new();
        if self.personal_info.is_none() {
            missing.push("personalInfo".to_string());
        }
        if self.professional_info.is_none() {
            missing.push("professionalInfo".to_string());
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(PortfolioError::MissingFields(missing))
        }
    }
}

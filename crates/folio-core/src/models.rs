// Rust guideline compliant 2026-10-12

//! Core data models for Folio.
//!
//! Each portfolio section is a flat document stored one-per-line in its own
//! collection. List-valued fields accept either a JSON array or the escaped
//! comma-list text produced by form inputs, and are always stored as arrays.

use crate::{identity, period::Boundary, Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A content section, one collection per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Work experience.
    Experience,
    /// Schooling and degrees.
    Education,
    /// Clubs, communities and volunteer roles.
    Organizations,
    /// Portfolio projects.
    Projects,
    /// Certificates and credentials.
    Certificates,
    /// Contact methods.
    Contacts,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 6] = [
        Section::Experience,
        Section::Education,
        Section::Organizations,
        Section::Projects,
        Section::Certificates,
        Section::Contacts,
    ];

    /// Returns the collection name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Organizations => "organizations",
            Section::Projects => "projects",
            Section::Certificates => "certificates",
            Section::Contacts => "contacts",
        }
    }

    /// Returns the heading used on the rendered page.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Experience => "Experience",
            Section::Education => "Education",
            Section::Organizations => "Organizations",
            Section::Projects => "Projects",
            Section::Certificates => "Certificates",
            Section::Contacts => "Contact",
        }
    }

    /// Returns the JSONL file name of the collection.
    pub fn file_name(&self) -> String {
        format!("{}.jsonl", self.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "experience" | "experiences" | "exp" => Ok(Section::Experience),
            "education" | "edu" => Ok(Section::Education),
            "organizations" | "organization" | "org" | "orgs" => Ok(Section::Organizations),
            "projects" | "project" | "prj" => Ok(Section::Projects),
            "certificates" | "certificate" | "certs" | "crt" => Ok(Section::Certificates),
            "contacts" | "contact" | "cnt" => Ok(Section::Contacts),
            other => Err(Error::InvalidRecord(format!("Unknown section: {other}"))),
        }
    }
}

/// Reference to an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobRef {
    /// Public URL of the image.
    pub url: String,
    /// Key the blob store uses for deletion.
    pub key: String,
}

/// Behavior shared by every stored document.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Section the record belongs to.
    const SECTION: Section;
    /// ID prefix for new records.
    const PREFIX: &'static str;

    /// Returns the record ID.
    fn id(&self) -> &str;

    /// Replaces the record ID.
    fn set_id(&mut self, id: String);

    /// Returns the main display line.
    fn title(&self) -> &str;

    /// Returns the secondary display line.
    fn subtitle(&self) -> String {
        String::new()
    }

    /// Returns the start and end boundary values, for dated records.
    fn timeframe(&self) -> Option<(&str, Option<&str>)> {
        None
    }

    /// Returns the attached image, if any.
    fn image(&self) -> Option<&BlobRef> {
        None
    }

    /// Replaces the attached image and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error for sections that cannot carry an image.
    fn set_image(&mut self, image: Option<BlobRef>) -> Result<Option<BlobRef>> {
        let _ = image;
        Err(Error::InvalidRecord(format!(
            "{} records do not carry images",
            Self::SECTION
        )))
    }

    /// Returns labeled field values for detail views.
    fn display_fields(&self) -> Vec<(&'static str, String)>;

    /// Checks section-specific field rules.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field.
    fn validate_fields(&self) -> Result<()>;

    /// Validates the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID is malformed or a field is invalid.
    fn validate(&self) -> Result<()> {
        identity::validate_id_format(self.id())?;
        self.validate_fields()?;
        if let Some((start, end)) = self.timeframe() {
            check_date("start_date", Some(start))?;
            check_date("end_date", end)?;
        }
        if let Some(image) = self.image() {
            check_url("image", &image.url)?;
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidRecord(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn check_url(field: &str, value: &str) -> Result<()> {
    if value.is_empty()
        || value.starts_with("http://")
        || value.starts_with("https://")
        || value.starts_with("mailto:")
        || value.starts_with('/')
    {
        return Ok(());
    }
    Err(Error::InvalidRecord(format!(
        "{field} must be an http(s), mailto or site-relative URL, got {value}"
    )))
}

fn check_date(field: &str, value: Option<&str>) -> Result<()> {
    Boundary::parse(value)
        .map(|_| ())
        .map_err(|err| Error::InvalidRecord(format!("{field}: {err}")))
}

/// Deserializes optional text, treating blank strings as absent.
fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

/// A position held at a company.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Experience {
    /// Record ID (format: exp-XXXXXX).
    #[serde(default)]
    pub id: String,
    /// Employer name.
    pub company: String,
    /// Job title.
    pub position: String,
    /// City or "Remote".
    #[serde(default)]
    pub location: String,
    /// Full-time, internship, contract, ...
    #[serde(default)]
    pub employment_type: String,
    /// Start boundary.
    pub start_date: String,
    /// End boundary; absent or "Present" while ongoing.
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Markdown description.
    #[serde(default)]
    pub description: String,
    /// Skills used in the role.
    #[serde(default, with = "crate::codec::tokens")]
    pub skills: Vec<String>,
    /// Company logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<BlobRef>,
}

impl Record for Experience {
    const SECTION: Section = Section::Experience;
    const PREFIX: &'static str = "exp";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.position
    }

    fn subtitle(&self) -> String {
        if self.location.is_empty() {
            self.company.clone()
        } else {
            format!("{} · {}", self.company, self.location)
        }
    }

    fn timeframe(&self) -> Option<(&str, Option<&str>)> {
        Some((&self.start_date, self.end_date.as_deref()))
    }

    fn image(&self) -> Option<&BlobRef> {
        self.logo.as_ref()
    }

    fn set_image(&mut self, image: Option<BlobRef>) -> Result<Option<BlobRef>> {
        Ok(std::mem::replace(&mut self.logo, image))
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Company", self.company.clone()),
            ("Position", self.position.clone()),
            ("Location", self.location.clone()),
            ("Type", self.employment_type.clone()),
            ("Skills", self.skills.join(", ")),
            ("Description", self.description.clone()),
        ]
    }

    fn validate_fields(&self) -> Result<()> {
        require("company", &self.company)?;
        require("position", &self.position)?;
        require("start_date", &self.start_date)
    }
}

/// A degree or course of study.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Education {
    /// Record ID (format: edu-XXXXXX).
    #[serde(default)]
    pub id: String,
    /// School or university.
    pub institution: String,
    /// Degree or certificate name.
    pub degree: String,
    /// Major.
    #[serde(default)]
    pub field_of_study: String,
    /// Start boundary.
    pub start_date: String,
    /// End boundary; absent or "Present" while ongoing.
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// GPA or final grade.
    #[serde(default)]
    pub grade: String,
    /// Notable subjects.
    #[serde(default, with = "crate::codec::tokens")]
    pub subjects: Vec<String>,
    /// Institution logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<BlobRef>,
}

impl Record for Education {
    const SECTION: Section = Section::Education;
    const PREFIX: &'static str = "edu";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.institution
    }

    fn subtitle(&self) -> String {
        if self.field_of_study.is_empty() {
            self.degree.clone()
        } else {
            format!("{}, {}", self.degree, self.field_of_study)
        }
    }

    fn timeframe(&self) -> Option<(&str, Option<&str>)> {
        Some((&self.start_date, self.end_date.as_deref()))
    }

    fn image(&self) -> Option<&BlobRef> {
        self.logo.as_ref()
    }

    fn set_image(&mut self, image: Option<BlobRef>) -> Result<Option<BlobRef>> {
        Ok(std::mem::replace(&mut self.logo, image))
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Institution", self.institution.clone()),
            ("Degree", self.degree.clone()),
            ("Field", self.field_of_study.clone()),
            ("Grade", self.grade.clone()),
            ("Subjects", self.subjects.join(", ")),
        ]
    }

    fn validate_fields(&self) -> Result<()> {
        require("institution", &self.institution)?;
        require("degree", &self.degree)?;
        require("start_date", &self.start_date)
    }
}

/// Membership in a club, community or volunteer group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Organization {
    /// Record ID (format: org-XXXXXX).
    #[serde(default)]
    pub id: String,
    /// Organization name.
    pub name: String,
    /// Role held.
    #[serde(default)]
    pub role: String,
    /// Start boundary.
    pub start_date: String,
    /// End boundary; absent or "Present" while ongoing.
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Markdown description.
    #[serde(default)]
    pub description: String,
    /// Organization logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<BlobRef>,
}

impl Record for Organization {
    const SECTION: Section = Section::Organizations;
    const PREFIX: &'static str = "org";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn subtitle(&self) -> String {
        self.role.clone()
    }

    fn timeframe(&self) -> Option<(&str, Option<&str>)> {
        Some((&self.start_date, self.end_date.as_deref()))
    }

    fn image(&self) -> Option<&BlobRef> {
        self.logo.as_ref()
    }

    fn set_image(&mut self, image: Option<BlobRef>) -> Result<Option<BlobRef>> {
        Ok(std::mem::replace(&mut self.logo, image))
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Role", self.role.clone()),
            ("Description", self.description.clone()),
        ]
    }

    fn validate_fields(&self) -> Result<()> {
        require("name", &self.name)?;
        require("start_date", &self.start_date)
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Project {
    /// Record ID (format: prj-XXXXXX).
    #[serde(default)]
    pub id: String,
    /// Project name.
    pub title: String,
    /// Markdown description.
    #[serde(default)]
    pub description: String,
    /// Technologies used.
    #[serde(default, with = "crate::codec::tokens")]
    pub technologies: Vec<String>,
    /// Live demo URL.
    #[serde(default)]
    pub link: String,
    /// Source repository URL.
    #[serde(default)]
    pub repository: String,
    /// Optional start boundary.
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Optional end boundary.
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Screenshot or cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<BlobRef>,
}

impl Record for Project {
    const SECTION: Section = Section::Projects;
    const PREFIX: &'static str = "prj";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> String {
        self.technologies.join(", ")
    }

    fn timeframe(&self) -> Option<(&str, Option<&str>)> {
        self.start_date
            .as_deref()
            .map(|start| (start, self.end_date.as_deref()))
    }

    fn image(&self) -> Option<&BlobRef> {
        self.image.as_ref()
    }

    fn set_image(&mut self, image: Option<BlobRef>) -> Result<Option<BlobRef>> {
        Ok(std::mem::replace(&mut self.image, image))
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Technologies", self.technologies.join(", ")),
            ("Link", self.link.clone()),
            ("Repository", self.repository.clone()),
            ("Description", self.description.clone()),
        ]
    }

    fn validate_fields(&self) -> Result<()> {
        require("title", &self.title)?;
        check_url("link", &self.link)?;
        check_url("repository", &self.repository)
    }
}

/// A certificate or credential.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Certificate {
    /// Record ID (format: crt-XXXXXX).
    #[serde(default)]
    pub id: String,
    /// Certificate name.
    pub title: String,
    /// Issuing body.
    pub issuer: String,
    /// Issue date.
    #[serde(default)]
    pub issue_date: String,
    /// Credential identifier printed on the certificate.
    #[serde(default)]
    pub credential_id: String,
    /// Verification URL.
    #[serde(default)]
    pub credential_url: String,
    /// Scan of the certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<BlobRef>,
}

impl Record for Certificate {
    const SECTION: Section = Section::Certificates;
    const PREFIX: &'static str = "crt";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> String {
        self.issuer.clone()
    }

    fn image(&self) -> Option<&BlobRef> {
        self.image.as_ref()
    }

    fn set_image(&mut self, image: Option<BlobRef>) -> Result<Option<BlobRef>> {
        Ok(std::mem::replace(&mut self.image, image))
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Title", self.title.clone()),
            ("Issuer", self.issuer.clone()),
            ("Issued", self.issue_date.clone()),
            ("Credential ID", self.credential_id.clone()),
            ("Credential URL", self.credential_url.clone()),
        ]
    }

    fn validate_fields(&self) -> Result<()> {
        require("title", &self.title)?;
        require("issuer", &self.issuer)?;
        check_date("issue_date", Some(&self.issue_date))?;
        check_url("credential_url", &self.credential_url)
    }
}

/// A way to reach the site owner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    /// Record ID (format: cnt-XXXXXX).
    #[serde(default)]
    pub id: String,
    /// Platform name (GitHub, LinkedIn, Email, ...).
    pub platform: String,
    /// Text shown for the link; defaults to the URL.
    #[serde(default)]
    pub label: String,
    /// Target URL.
    pub url: String,
}

impl Record for Contact {
    const SECTION: Section = Section::Contacts;
    const PREFIX: &'static str = "cnt";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn title(&self) -> &str {
        &self.platform
    }

    fn subtitle(&self) -> String {
        if self.label.is_empty() {
            self.url.clone()
        } else {
            self.label.clone()
        }
    }

    fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Platform", self.platform.clone()),
            ("Label", self.label.clone()),
            ("URL", self.url.clone()),
        ]
    }

    fn validate_fields(&self) -> Result<()> {
        require("platform", &self.platform)?;
        require("url", &self.url)?;
        check_url("url", &self.url)
    }
}

use crate::config::LINE_ENDING;
use crate::utils::error::{MeltError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_single_line, validate_url, Validate,
};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

const RELEASE_DATE_FORMAT: &str = "%d %b %Y";
const RELEASE_DATE_DISPLAY: &str = "%-d %b %Y";
const LABEL_WIDTH: usize = 10;

/// The four labelled lines of a descriptor, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Version,
    Website,
    License,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Title, Field::Version, Field::Website, Field::License];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "TITLE",
            Field::Version => "VERSION",
            Field::Website => "WEBSITE",
            Field::License => "LICENSE",
        }
    }

    fn from_label(label: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.label() == label)
    }
}

/// Typed view of a module's about text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub title: String,
    pub version: String,
    pub release_date: NaiveDate,
    pub website: String,
    pub license: String,
    pub copyright: String,
}

const SEMVER: &str = r"v?\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?";

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^({SEMVER})\s+\(Released on ([^)]+)\)$")).unwrap()
    })
}

fn semver_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(&format!("^{SEMVER}$")).unwrap())
}

impl ModuleDescriptor {
    /// Parses the `LABEL: value` block produced by any module variant.
    ///
    /// Blank lines, indentation and either line terminator are accepted.
    pub fn parse(text: &str) -> Result<Self> {
        let mut values: [Option<&str>; 4] = [None; 4];

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let (label, value) = line
                .split_once(':')
                .ok_or(MeltError::MalformedLine { line: index + 1 })?;
            let label = label.trim();
            let field = Field::from_label(label).ok_or_else(|| MeltError::UnknownField {
                label: label.to_string(),
            })?;

            let slot = &mut values[field as usize];
            if slot.is_some() {
                return Err(MeltError::DuplicateField {
                    field: field.label(),
                });
            }
            *slot = Some(value.trim());
        }

        let get = |field: Field| {
            values[field as usize].ok_or(MeltError::MissingField {
                field: field.label(),
            })
        };

        let title = get(Field::Title)?;
        let (version, release_date) = parse_version(get(Field::Version)?)?;
        let website = get(Field::Website)?;
        let (license, copyright) = parse_license(get(Field::License)?)?;

        Ok(Self {
            title: title.to_string(),
            version: version.to_string(),
            release_date,
            website: website.to_string(),
            license: license.to_string(),
            copyright: copyright.to_string(),
        })
    }

    /// Renders the canonical four-line text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let descriptor: Self = serde_json::from_str(content)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let descriptor: Self = toml::from_str(content)?;
        descriptor.validate()?;
        Ok(descriptor)
    }
}

fn parse_version(value: &str) -> Result<(&str, NaiveDate)> {
    let captures = version_pattern()
        .captures(value)
        .ok_or_else(|| MeltError::InvalidVersion {
            value: value.to_string(),
        })?;

    let (Some(version), Some(released)) = (captures.get(1), captures.get(2)) else {
        return Err(MeltError::InvalidVersion {
            value: value.to_string(),
        });
    };

    let released = released.as_str().trim();
    let release_date = NaiveDate::parse_from_str(released, RELEASE_DATE_FORMAT).map_err(|source| {
        MeltError::InvalidReleaseDate {
            value: released.to_string(),
            source,
        }
    })?;

    Ok((version.as_str(), release_date))
}

fn parse_license(value: &str) -> Result<(&str, &str)> {
    match value.split_once('/') {
        Some((license, copyright)) if !license.trim().is_empty() && !copyright.trim().is_empty() => {
            Ok((license.trim(), copyright.trim()))
        }
        _ => Err(MeltError::InvalidLicense {
            value: value.to_string(),
        }),
    }
}

impl fmt::Display for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = |field: Field| format!("{}:", field.label());

        write!(f, "{:<LABEL_WIDTH$}{}{}", label(Field::Title), self.title, LINE_ENDING)?;
        write!(
            f,
            "{:<LABEL_WIDTH$}{} (Released on {}){}",
            label(Field::Version),
            self.version,
            self.release_date.format(RELEASE_DATE_DISPLAY),
            LINE_ENDING
        )?;
        write!(f, "{:<LABEL_WIDTH$}{}{}", label(Field::Website), self.website, LINE_ENDING)?;
        write!(
            f,
            "{:<LABEL_WIDTH$}{} / {}{}",
            label(Field::License),
            self.license,
            self.copyright,
            LINE_ENDING
        )
    }
}

impl Validate for ModuleDescriptor {
    fn validate(&self) -> Result<()> {
        let text_fields = [
            ("title", self.title.as_str()),
            ("version", self.version.as_str()),
            ("license", self.license.as_str()),
            ("copyright", self.copyright.as_str()),
        ];
        for (name, value) in text_fields {
            validate_non_empty_string(name, value)?;
            validate_single_line(name, value)?;
        }

        if !semver_pattern().is_match(&self.version) {
            return Err(MeltError::InvalidConfigValueError {
                field: "version".to_string(),
                value: self.version.clone(),
                reason: "Expected a semantic version such as v0.1.0".to_string(),
            });
        }

        // The renderer joins license and copyright with " / ".
        if self.license.contains('/') {
            return Err(MeltError::InvalidConfigValueError {
                field: "license".to_string(),
                value: self.license.clone(),
                reason: "License id cannot contain '/'".to_string(),
            });
        }

        validate_single_line("website", &self.website)?;

        let all_fields = text_fields
            .into_iter()
            .chain(std::iter::once(("website", self.website.as_str())));
        for (name, value) in all_fields {
            if let Some(field) = Field::ALL
                .into_iter()
                .find(|field| value.contains(&format!("{}:", field.label())))
            {
                return Err(MeltError::InvalidConfigValueError {
                    field: name.to_string(),
                    value: value.to_string(),
                    reason: format!("Value cannot contain the {} label", field.label()),
                });
            }
        }

        if let Err(e) = validate_url("website", &self.website) {
            tracing::debug!("Descriptor '{}' has an unusable website: {}", self.title, e);
            return Err(e);
        }

        Ok(())
    }
}

/// Counts how often each `LABEL:` occurs in `text`.
pub fn count_labels(text: &str) -> [(Field, usize); 4] {
    Field::ALL.map(|field| (field, text.matches(&format!("{}:", field.label())).count()))
}

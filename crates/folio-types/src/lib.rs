use serde::{Deserialize, Serialize};

/// Visual mode of the page. Light is the default and is never written to storage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Value stored under the `theme` key. `None` means the key is removed.
    pub fn storage_value(self) -> Option<&'static str> {
        match self {
            ThemePreference::Light => None,
            ThemePreference::Dark => Some("dark-theme"),
        }
    }

    pub fn from_storage_value(value: &str) -> Option<Self> {
        match value {
            "dark-theme" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    /// Icon class shown on the toggle while this mode is active.
    pub fn icon_class(self) -> &'static str {
        match self {
            ThemePreference::Light => "fa-moon",
            ThemePreference::Dark => "fa-sun",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "image")]
    pub image_path: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactReceipt {
    pub accepted: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

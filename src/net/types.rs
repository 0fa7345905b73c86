//! Wire types exchanged with the backend REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// A course as returned by the course collection endpoint, and as carried
/// by the fixed popular-courses content on the homepage.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Course {
    pub name: String,
    #[serde(rename = "shortDescription")]
    pub short_description: String,
    pub duration: String,
    pub level: String,
    pub icon: String,
}

/// A student record. `id` is unique per backend record; `email` is counted
/// for distinctness but never validated here.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Fallback institute name shown when the metadata read fails.
pub const DEFAULT_NAME: &str = "Excellence Institute";
/// Fallback tagline for the homepage hero.
pub const DEFAULT_TAGLINE: &str = "Transforming careers through quality education";
/// Fallback contact email.
pub const DEFAULT_EMAIL: &str = "info@excellenceinstitute.edu";
/// Fallback contact phone number.
pub const DEFAULT_PHONE: &str = "+1 (555) 012-3456";
/// Fallback street address.
pub const DEFAULT_ADDRESS: &str = "123 Learning Lane, Tech City";

/// Institute metadata from `/api/public/institute-info`.
///
/// Every field is optional on the wire; the `display_*` accessors fall back
/// to the built-in defaults so the views never render a hole.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InstituteInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl InstituteInfo {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn display_tagline(&self) -> &str {
        self.tagline.as_deref().unwrap_or(DEFAULT_TAGLINE)
    }

    pub fn display_email(&self) -> &str {
        self.email.as_deref().unwrap_or(DEFAULT_EMAIL)
    }

    pub fn display_phone(&self) -> &str {
        self.phone.as_deref().unwrap_or(DEFAULT_PHONE)
    }

    pub fn display_address(&self) -> &str {
        self.address.as_deref().unwrap_or(DEFAULT_ADDRESS)
    }
}

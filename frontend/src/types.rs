use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user behind a live session, as reported by the hosted
/// identity service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl SessionUser {
    /// Full name if set, otherwise the email, otherwise the id.
    pub fn display_name(&self) -> String {
        non_blank(self.full_name.as_deref())
            .or_else(|| non_blank(self.email.as_deref()))
            .unwrap_or(self.id.as_str())
            .to_string()
    }

    /// Up to two uppercase initials taken from the display name.
    pub fn initials(&self) -> String {
        let name = self.display_name();
        let base = name.split('@').next().unwrap_or_default();
        let mut initials: String = base
            .split(|c: char| c.is_whitespace() || c == '.' || c == '_' || c == '-')
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            initials.push('?');
        }
        initials
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

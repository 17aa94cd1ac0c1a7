use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Sentinel selecting every launch site.
pub const ALL_SITES: &str = "ALL";

/// Launch sites present in the reference SpaceX dataset.
pub const KNOWN_SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// Site picked in the dashboard: every site, or exactly one identifier.
///
/// Any string is accepted. An identifier that matches no row simply selects
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(name) => name,
        }
    }

    /// True when a row launched from `launch_site` belongs to this selection.
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == launch_site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        value.as_str().to_string()
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_parses_to_all() {
        assert_eq!("ALL".parse::<SiteSelection>().unwrap(), SiteSelection::All);
        assert_eq!(
            SiteSelection::from("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".into())
        );
        // The sentinel is case sensitive, like the dropdown value it mirrors.
        assert!(!SiteSelection::from("all").is_all());
    }

    #[test]
    fn selection_round_trips_through_serde_as_plain_string() {
        let json = serde_json::to_string(&SiteSelection::site("VAFB SLC-4E")).unwrap();
        assert_eq!(json, "\"VAFB SLC-4E\"");
        let parsed: SiteSelection = serde_json::from_str("\"ALL\"").unwrap();
        assert!(parsed.is_all());
    }

    #[test]
    fn all_matches_every_site() {
        assert!(SiteSelection::All.matches("anything"));
        assert!(!SiteSelection::site("KSC LC-39A").matches("CCAFS LC-40"));
    }
}

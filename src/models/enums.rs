//! Shared domain enums

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// Beach
// ---------------------------------------------------------------------------

/// Beaches along the Bantul coast covered by the application.
///
/// The display name is the wire value, so JSON bodies carry
/// `"Pantai Parangtritis"` rather than a variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Beach {
    #[serde(rename = "Pantai Parangtritis")]
    Parangtritis,
    #[serde(rename = "Pantai Parangkusumo")]
    Parangkusumo,
    #[serde(rename = "Pantai Depok")]
    Depok,
    #[serde(rename = "Pantai Cemara Sewu")]
    CemaraSewu,
    #[serde(rename = "Pantai Goa Cemara")]
    GoaCemara,
    #[serde(rename = "Pantai Samas")]
    Samas,
    #[serde(rename = "Pantai Pandansari")]
    Pandansari,
    #[serde(rename = "Pantai Kuwaru")]
    Kuwaru,
    #[serde(rename = "Pantai Baru")]
    Baru,
    #[serde(rename = "Pantai Baros")]
    Baros,
}

impl Beach {
    /// All beaches in selection-list order
    pub const ALL: [Beach; 10] = [
        Beach::Parangtritis,
        Beach::Parangkusumo,
        Beach::Depok,
        Beach::CemaraSewu,
        Beach::GoaCemara,
        Beach::Samas,
        Beach::Pandansari,
        Beach::Kuwaru,
        Beach::Baru,
        Beach::Baros,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Beach::Parangtritis => "Pantai Parangtritis",
            Beach::Parangkusumo => "Pantai Parangkusumo",
            Beach::Depok => "Pantai Depok",
            Beach::CemaraSewu => "Pantai Cemara Sewu",
            Beach::GoaCemara => "Pantai Goa Cemara",
            Beach::Samas => "Pantai Samas",
            Beach::Pandansari => "Pantai Pandansari",
            Beach::Kuwaru => "Pantai Kuwaru",
            Beach::Baru => "Pantai Baru",
            Beach::Baros => "Pantai Baros",
        }
    }
}

impl fmt::Display for Beach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Beach {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Beach::ALL
            .iter()
            .copied()
            .find(|b| b.name() == s)
            .ok_or_else(|| format!("Unknown beach: {}", s))
    }
}

// ---------------------------------------------------------------------------
// BeachFilter
// ---------------------------------------------------------------------------

/// Beach selection for the visitor list: a single beach or the `all` sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BeachFilter {
    #[default]
    All,
    Only(Beach),
}

impl BeachFilter {
    pub fn matches(&self, beach: Beach) -> bool {
        match self {
            BeachFilter::All => true,
            BeachFilter::Only(selected) => *selected == beach,
        }
    }
}

impl FromStr for BeachFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(BeachFilter::All)
        } else {
            s.parse().map(BeachFilter::Only)
        }
    }
}

impl TryFrom<String> for BeachFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BeachFilter> for String {
    fn from(filter: BeachFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for BeachFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeachFilter::All => f.write_str("all"),
            BeachFilter::Only(beach) => f.write_str(beach.name()),
        }
    }
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Visit date ordering for the visitor list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Newest => f.write_str("newest"),
            SortOrder::Oldest => f.write_str("oldest"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beach_round_trips_through_name() {
        for beach in Beach::ALL {
            assert_eq!(beach.name().parse::<Beach>(), Ok(beach));
        }
        assert!("Pantai Kuta".parse::<Beach>().is_err());
    }

    #[test]
    fn test_beach_serializes_as_display_name() {
        let json = serde_json::to_string(&Beach::CemaraSewu).unwrap();
        assert_eq!(json, "\"Pantai Cemara Sewu\"");
    }

    #[test]
    fn test_beach_filter_parse() {
        assert_eq!("all".parse::<BeachFilter>(), Ok(BeachFilter::All));
        assert_eq!(
            "Pantai Baru".parse::<BeachFilter>(),
            Ok(BeachFilter::Only(Beach::Baru))
        );
        assert!("everything".parse::<BeachFilter>().is_err());
    }

    #[test]
    fn test_beach_filter_matches() {
        assert!(BeachFilter::All.matches(Beach::Samas));
        assert!(BeachFilter::Only(Beach::Samas).matches(Beach::Samas));
        assert!(!BeachFilter::Only(Beach::Samas).matches(Beach::Baros));
    }

    #[test]
    fn test_sort_order_wire_format() {
        let order: SortOrder = serde_json::from_str("\"oldest\"").unwrap();
        assert_eq!(order, SortOrder::Oldest);
        assert_eq!(SortOrder::default(), SortOrder::Newest);
        assert_eq!(" Oldest".parse::<SortOrder>(), Ok(SortOrder::Oldest));
        assert!("sideways".parse::<SortOrder>().is_err());
    }
}

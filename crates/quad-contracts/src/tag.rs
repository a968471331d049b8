// Event tag vocabulary
//
// Tags are a fixed, controlled vocabulary. On the wire and in storage they
// travel as plain lowercase strings; this enum is the single source of truth
// for which strings are valid.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Controlled tag vocabulary for events.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Tech,
    Food,
    Games,
    Study,
    Social,
    Career,
    Networking,
}

impl Tag {
    /// Every tag, in display order.
    pub const ALL: [Tag; 7] = [
        Tag::Tech,
        Tag::Food,
        Tag::Games,
        Tag::Study,
        Tag::Social,
        Tag::Career,
        Tag::Networking,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Tag::Tech => "tech",
            Tag::Food => "food",
            Tag::Games => "games",
            Tag::Study => "study",
            Tag::Social => "social",
            Tag::Career => "career",
            Tag::Networking => "networking",
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tech" => Ok(Tag::Tech),
            "food" => Ok(Tag::Food),
            "games" => Ok(Tag::Games),
            "study" => Ok(Tag::Study),
            "social" => Ok(Tag::Social),
            "career" => Ok(Tag::Career),
            "networking" => Ok(Tag::Networking),
            _ => Err(format!("Unknown tag: {}", s)),
        }
    }
}

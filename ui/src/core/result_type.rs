//! Result descriptors and their presentation mapping (glyph + banner gradient).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of result archetypes. Anything unrecognised becomes [`ResultKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultKind {
    Fox,
    Retriever,
    Raccoon,
    Cat,
    Boar,
    Rabbit,
    Sloth,
    Rock,
    #[serde(other)]
    Unknown,
}

impl ResultKind {
    pub const ARCHETYPES: [ResultKind; 8] = [
        ResultKind::Fox,
        ResultKind::Retriever,
        ResultKind::Raccoon,
        ResultKind::Cat,
        ResultKind::Boar,
        ResultKind::Rabbit,
        ResultKind::Sloth,
        ResultKind::Rock,
    ];

    /// Wire identifier (`"FOX"`, `"RETRIEVER"`, …).
    pub fn id(self) -> &'static str {
        match self {
            ResultKind::Fox => "FOX",
            ResultKind::Retriever => "RETRIEVER",
            ResultKind::Raccoon => "RACCOON",
            ResultKind::Cat => "CAT",
            ResultKind::Boar => "BOAR",
            ResultKind::Rabbit => "RABBIT",
            ResultKind::Sloth => "SLOTH",
            ResultKind::Rock => "ROCK",
            ResultKind::Unknown => "UNKNOWN",
        }
    }

    /// Lowercase slug used in CSS modifiers, message ids and routes.
    pub fn slug(self) -> &'static str {
        match self {
            ResultKind::Fox => "fox",
            ResultKind::Retriever => "retriever",
            ResultKind::Raccoon => "raccoon",
            ResultKind::Cat => "cat",
            ResultKind::Boar => "boar",
            ResultKind::Rabbit => "rabbit",
            ResultKind::Sloth => "sloth",
            ResultKind::Rock => "rock",
            ResultKind::Unknown => "unknown",
        }
    }

    /// Avatar glyph shown on the result card.
    pub fn glyph(self) -> &'static str {
        match self {
            ResultKind::Fox => "🦊",
            ResultKind::Retriever => "🐶",
            ResultKind::Raccoon => "🦝",
            ResultKind::Cat => "🐈",
            ResultKind::Boar => "🐗",
            ResultKind::Rabbit => "🐰",
            ResultKind::Sloth => "🦥",
            ResultKind::Rock => "🪨",
            ResultKind::Unknown => FALLBACK_GLYPH,
        }
    }

    /// Banner gradient for the result card.
    pub fn gradient(self) -> Gradient {
        match self {
            ResultKind::Fox => Gradient::new("rose-400", "pink-500"),
            ResultKind::Retriever => Gradient::new("yellow-400", "orange-400"),
            ResultKind::Raccoon => Gradient::new("indigo-400", "blue-500"),
            ResultKind::Cat => Gradient::new("purple-400", "violet-500"),
            ResultKind::Boar => Gradient::new("red-500", "orange-600"),
            ResultKind::Rabbit => Gradient::new("pink-300", "rose-300"),
            ResultKind::Sloth => Gradient::new("green-400", "emerald-500"),
            ResultKind::Rock => Gradient::new("gray-400", "slate-500"),
            ResultKind::Unknown => FALLBACK_GRADIENT,
        }
    }

    /// Theme class painting the banner (`result-banner--fox`, …).
    pub fn banner_class(self) -> String {
        format!("result-banner--{}", self.slug())
    }
}

impl FromStr for ResultKind {
    type Err = std::convert::Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let id = raw.trim();
        Ok(ResultKind::ARCHETYPES
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(id))
            .unwrap_or(ResultKind::Unknown))
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

pub const FALLBACK_GLYPH: &str = "❓";
pub const FALLBACK_GRADIENT: Gradient = Gradient::new("gray-400", "slate-500");

/// Two-stop banner gradient expressed as palette tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    /// Utility-class form, e.g. `from-rose-400 to-pink-500`.
    pub fn token(&self) -> String {
        format!("from-{} to-{}", self.from, self.to)
    }
}

/// Glyph for a raw identifier; unknown ids get [`FALLBACK_GLYPH`].
pub fn glyph_for_id(id: &str) -> &'static str {
    parse_kind(id).glyph()
}

/// Gradient for a raw identifier; unknown ids get [`FALLBACK_GRADIENT`].
pub fn gradient_for_id(id: &str) -> Gradient {
    parse_kind(id).gradient()
}

fn parse_kind(id: &str) -> ResultKind {
    match id.parse() {
        Ok(kind) => kind,
        Err(never) => match never {},
    }
}

/// Resolved, human-readable descriptor for a quiz outcome.
///
/// Built once per completed quiz and never mutated while the result view is up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultType {
    pub id: ResultKind,
    pub title: String,
    pub subtitle: String,
    /// Display score printed on the badge and in the share text.
    pub score: i32,
    pub description: String,
    /// Styling hint for the score badge (a theme text-color class).
    pub color: String,
    pub advice: Vec<String>,
}

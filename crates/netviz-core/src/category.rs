//! Node categorization and label cleaning.
//!
//! Categories are derived from a name-prefix convention. The rules live in
//! an ordered table ([`CATEGORY_RULES`]) evaluated first-match-wins, so a
//! name like `Vol_School_X` resolves to [`Category::Volunteer`] — the
//! `School_` rule is never reached.

use serde::Serialize;

/// Node category derived from the name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    /// Names starting with `Vol_`.
    Volunteer,
    /// Names starting with `School_`.
    School,
    /// Names starting with `Partner_`.
    #[serde(rename = "Community Partner")]
    CommunityPartner,
    /// Everything else.
    Other,
}

/// Ordered prefix rules, first match wins.
pub const CATEGORY_RULES: [(&str, Category); 3] = [
    ("Vol_", Category::Volunteer),
    ("School_", Category::School),
    ("Partner_", Category::CommunityPartner),
];

impl Category {
    /// Categorize a node name via the ordered prefix rules.
    #[must_use]
    pub fn of(name: &str) -> Self {
        CATEGORY_RULES
            .iter()
            .find(|(prefix, _)| name.starts_with(prefix))
            .map_or(Self::Other, |(_, category)| *category)
    }

    /// Display name, matching the vis-network `group` values in the report.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Volunteer => "Volunteer",
            Self::School => "School",
            Self::CommunityPartner => "Community Partner",
            Self::Other => "Other",
        }
    }

    /// Base node color for this category.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Volunteer => "#1f77b4",
            Self::School => "#ff7f0e",
            Self::CommunityPartner => "#2ca02c",
            Self::Other => "#808080",
        }
    }

    /// Rendered node size for this category.
    #[must_use]
    pub const fn size(self) -> u32 {
        match self {
            Self::Volunteer => 28,
            Self::School => 38,
            Self::CommunityPartner => 32,
            Self::Other => 20,
        }
    }

    /// The prefix this category strips from node names, if any.
    #[must_use]
    const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Volunteer => Some("Vol_"),
            Self::School => Some("School_"),
            Self::CommunityPartner => Some("Partner_"),
            Self::Other => None,
        }
    }
}

/// Produce the display label for a node name: strip the one matched category
/// prefix, then replace every underscore with a space.
#[must_use]
pub fn clean_label(name: &str) -> String {
    let category = Category::of(name);
    let stripped = category
        .prefix()
        .and_then(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name);
    stripped.replace('_', " ")
}

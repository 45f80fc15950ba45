use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Subject area an article is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Topic {
    Technology,
    Science,
    Business,
    Culture,
    Innovation,
    Future,
    Environment,
    Health,
    Education,
    Philosophy,
}

impl Topic {
    pub const ALL: [Topic; 10] = [
        Topic::Technology,
        Topic::Science,
        Topic::Business,
        Topic::Culture,
        Topic::Innovation,
        Topic::Future,
        Topic::Environment,
        Topic::Health,
        Topic::Education,
        Topic::Philosophy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Technology => "Technology",
            Topic::Science => "Science",
            Topic::Business => "Business",
            Topic::Culture => "Culture",
            Topic::Innovation => "Innovation",
            Topic::Future => "Future",
            Topic::Environment => "Environment",
            Topic::Health => "Health",
            Topic::Education => "Education",
            Topic::Philosophy => "Philosophy",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTopic(s.to_string()))
    }
}

// src/icons/source.rs
// =============================================================================
// The fixed set of places icon names can come from.
//
// android / ios / web  -> subdirectories of symbols/<source> in the repo
// code                 -> the flat MaterialIcons-Regular.codepoints file
// =============================================================================

use std::fmt;
use std::str::FromStr;

use crate::error::ListError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Android,
    Ios,
    Web,
    Code,
}

impl Source {
    pub const ALL: [Source; 4] = [Source::Android, Source::Ios, Source::Web, Source::Code];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Android => "android",
            Source::Ios => "ios",
            Source::Web => "web",
            Source::Code => "code",
        }
    }

    /// Repository directory whose subdirectories are the icons, or None for
    /// the codepoints file
    pub fn tree_path(&self) -> Option<String> {
        match self {
            Source::Code => None,
            other => Some(format!("symbols/{}", other.as_str())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| ListError::InvalidSource(s.to_string()))
    }
}

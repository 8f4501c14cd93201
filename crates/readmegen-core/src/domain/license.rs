//! License selection and its derived presentation values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The closed set of offered licenses.
///
/// `None` is a real choice, not an absence: it means the README carries
/// no badge and no license link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum License {
    Mit,
    Apache2,
    Gpl3,
    Bsd3,
    None,
}

impl License {
    /// Choice labels exactly as presented in the selection list.
    pub const CHOICES: &'static [&'static str] = &["MIT", "Apache 2.0", "GPL 3.0", "BSD 3", "None"];

    /// Display name, identical to the choice label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache 2.0",
            Self::Gpl3 => "GPL 3.0",
            Self::Bsd3 => "BSD 3",
            Self::None => "None",
        }
    }

    /// Shields.io badge markup for the title line.
    ///
    /// Empty for `None`. The license name is percent-encoded so that
    /// `Apache 2.0` becomes `Apache%202.0` in the badge URL.
    pub fn badge(&self) -> String {
        if *self == Self::None {
            return String::new();
        }
        format!(
            "![License](https://img.shields.io/badge/license-{}-blue.svg)",
            urlencoding::encode(self.as_str())
        )
    }

    /// Canonical license URL for the License section.
    ///
    /// Empty for `None`.
    pub fn link(&self) -> &'static str {
        match self {
            Self::Mit => "https://opensource.org/licenses/MIT",
            Self::Apache2 => "https://opensource.org/licenses/Apache-2.0",
            Self::Gpl3 => "https://www.gnu.org/licenses/gpl-3.0",
            Self::Bsd3 => "https://opensource.org/licenses/BSD-3-Clause",
            Self::None => "",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    /// Parse a choice label back into a `License`.
    ///
    /// The selection list guarantees one of the five labels; anything
    /// else is an invariant violation and fails loudly instead of
    /// leaking placeholder text into the document.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MIT" => Ok(Self::Mit),
            "Apache 2.0" => Ok(Self::Apache2),
            "GPL 3.0" => Ok(Self::Gpl3),
            "BSD 3" => Ok(Self::Bsd3),
            "None" => Ok(Self::None),
            other => Err(DomainError::UnknownLicense {
                value: other.to_string(),
            }),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

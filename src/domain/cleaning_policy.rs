use std::fmt;

/// How the raw engine output is reduced to the response transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleaningPolicy {
    /// Keep only the first surviving line, with any leading bracketed
    /// timestamp range stripped.
    FirstUtterance,
    /// Join every surviving line into one whitespace-collapsed string.
    FullUtterance,
}

impl CleaningPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleaningPolicy::FirstUtterance => "first",
            CleaningPolicy::FullUtterance => "full",
        }
    }
}

impl TryFrom<String> for CleaningPolicy {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "first" | "first-utterance" => Ok(Self::FirstUtterance),
            "full" | "full-utterance" => Ok(Self::FullUtterance),
            other => Err(format!(
                "Invalid cleaning policy: {}. Expected: first or full",
                other
            )),
        }
    }
}

impl fmt::Display for CleaningPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Learning path selection.

use std::fmt;

/// A named learning track used to filter the course catalog.
///
/// The set is fixed and ordered; [`LearningPath::ALL`] is the order the
/// selector presents them in. The first entry is the default selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LearningPath {
    #[default]
    FullStack,
    FrontEnd,
    BackEnd,
    DevOps,
    Cybersecurity,
    Dsa,
    AiMl,
}

impl LearningPath {
    /// Every path, in display order.
    pub const ALL: [LearningPath; 7] = [
        Self::FullStack,
        Self::FrontEnd,
        Self::BackEnd,
        Self::DevOps,
        Self::Cybersecurity,
        Self::Dsa,
        Self::AiMl,
    ];

    /// Human-readable label, also sent verbatim as the `path` query value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullStack => "Full Stack",
            Self::FrontEnd => "Front End",
            Self::BackEnd => "Back End",
            Self::DevOps => "DevOps",
            Self::Cybersecurity => "Cybersecurity",
            Self::Dsa => "DSA",
            Self::AiMl => "AI/ML",
        }
    }

    /// Look up a path by its exact label.
    #[cfg(test)]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl fmt::Display for LearningPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

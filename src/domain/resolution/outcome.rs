use std::fmt;

use serde::Serialize;

/// Where a candidate output location came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateSource {
    /// The directory named by the job itself.
    Requested,
    /// The acting user's default output path setting.
    UserSetting,
    /// The system-wide default output path setting.
    SystemSetting,
    /// The acting user's home folder.
    HomeFolder,
}

impl CandidateSource {
    /// Fallbacks in the order they are consulted.
    pub const FALLBACKS: [CandidateSource; 3] =
        [CandidateSource::UserSetting, CandidateSource::SystemSetting, CandidateSource::HomeFolder];

    pub fn as_str(self) -> &'static str {
        match self {
            CandidateSource::Requested => "requested",
            CandidateSource::UserSetting => "user-setting",
            CandidateSource::SystemSetting => "system-setting",
            CandidateSource::HomeFolder => "home-folder",
        }
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authoritative file path a job writes its output to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPath {
    pub path: String,
    pub source: CandidateSource,
}

impl ResolvedPath {
    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

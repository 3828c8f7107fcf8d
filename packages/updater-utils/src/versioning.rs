use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Tags whose second hyphen-delimited token is an integer, e.g. "build-22-abc1234".
static BUILD_TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^-]+-(\d+)(?:-|$)").unwrap());

/// GitHub assigns this prefix to releases created without a tag.
const UNTAGGED_PREFIX: &str = "untagged-";

/// Version string and optional build number extracted from a release tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
    pub version: String,
    pub build: Option<u32>,
}

/// Splits a free-form release tag into a version string and an optional
/// build number. Rules are tried in order, first match wins:
///
/// 1. `untagged-*` carries no version info, keep the current version;
/// 2. a numeric second hyphen token (`build-22-abc1234`) is a build number
///    on top of the current version;
/// 3. a `v` prefix is stripped (`v1.2.0` -> `1.2.0`);
/// 4. anything else is taken verbatim.
pub fn parse_tag(tag: &str, current_version: &str) -> ParsedTag {
    if tag.starts_with(UNTAGGED_PREFIX) {
        return ParsedTag {
            version: current_version.to_string(),
            build: None,
        };
    }
    if let Some(caps) = BUILD_TOKEN_REGEX.captures(tag) {
        if let Ok(build) = caps[1].parse() {
            return ParsedTag {
                version: current_version.to_string(),
                build: Some(build),
            };
        }
    }
    if let Some(stripped) = tag.strip_prefix('v') {
        return ParsedTag {
            version: stripped.to_string(),
            build: None,
        };
    }
    ParsedTag {
        version: tag.to_string(),
        build: None,
    }
}

/// A fully resolved application version. Ordering is lexicographic on
/// (major, minor, patch, build); the first unequal field decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AppVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: u32,
}

impl AppVersion {
    /// Builds an `AppVersion` from a dotted version string and a build
    /// string. Non-numeric dot components are skipped; fewer than two
    /// numeric components means the string carries no usable version and
    /// `None` is returned. A missing patch defaults to 0, and so does an
    /// unparseable build string.
    pub fn parse(version: &str, build: &str) -> Option<Self> {
        let components: Vec<u32> = version
            .split('.')
            .filter_map(|part| part.parse().ok())
            .collect();
        if components.len() < 2 {
            return None;
        }
        Some(Self {
            major: components[0],
            minor: components[1],
            patch: components.get(2).copied().unwrap_or(0),
            build: build.parse().unwrap_or(0),
        })
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{} ({})",
            self.major, self.minor, self.patch, self.build
        )
    }
}

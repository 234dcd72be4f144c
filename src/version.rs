use std::cmp::Ordering;

use semver::Version;

/// Total order over version labels, used to sort the version list.
///
/// Implementations decide which labels are well-formed versions
/// (`is_conform`) and how any two labels compare (`compare`).
pub trait VersionOrder {
    /// Whether `label` is a well-formed version.
    fn is_conform(&self, label: &str) -> bool;

    /// Compares two labels. Must be a total order.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Semantic version order.
///
/// Labels may carry a `v`/`V` prefix and may omit minor and patch components
/// (`1`, `1.2`). Non-conforming labels sort before all versions, among
/// themselves by plain string order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverOrder;

impl SemverOrder {
    /// Parses a label into a semantic version.
    ///
    /// # Example
    /// ```
    /// # use svn_version::version::SemverOrder;
    /// assert_eq!(SemverOrder::parse("v1.2").unwrap().to_string(), "1.2.0");
    /// assert!(SemverOrder::parse("dev-fix").is_none());
    /// ```
    pub fn parse(label: &str) -> Option<Version> {
        let clean = label.strip_prefix(['v', 'V']).unwrap_or(label);
        if let Ok(version) = Version::parse(clean) {
            return Some(version);
        }

        // short numeric forms: "1" and "1.2"
        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() > 2 || !parts.iter().all(|p| is_numeric_component(p)) {
            return None;
        }
        let mut padded = parts.join(".");
        for _ in parts.len()..3 {
            padded.push_str(".0");
        }
        Version::parse(&padded).ok()
    }
}

fn is_numeric_component(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl VersionOrder for SemverOrder {
    fn is_conform(&self, label: &str) -> bool {
        Self::parse(label).is_some()
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match (Self::parse(a), Self::parse(b)) {
            (Some(va), Some(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }
}

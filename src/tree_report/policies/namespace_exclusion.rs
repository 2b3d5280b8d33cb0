use crate::shared::error::ReportError;
use std::cell::Cell;

/// Maximum number of excluded namespaces to prevent DoS attacks
const MAX_EXCLUDED_NAMESPACES: usize = 64;

/// Maximum length of a single namespace fragment
const MAX_NAMESPACE_LENGTH: usize = 255;

/// NamespaceExclusion - Group-ID fragments whose subtrees are kept out of
/// the direct dependency report.
///
/// A coordinate is excluded when its raw text contains any fragment as a
/// substring. Typically these are the organization's own group IDs, which
/// would otherwise show up as dependencies of the artifact under build.
#[derive(Debug, Default)]
pub struct NamespaceExclusion {
    namespaces: Vec<ExcludedNamespace>,
}

impl NamespaceExclusion {
    /// Creates a policy from raw namespace fragments.
    ///
    /// # Errors
    /// - Too many fragments (> MAX_EXCLUDED_NAMESPACES)
    /// - A fragment is empty, too long, or contains characters that never
    ///   appear in a Maven coordinate
    pub fn new(namespaces: Vec<String>) -> Result<Self, ReportError> {
        if namespaces.len() > MAX_EXCLUDED_NAMESPACES {
            return Err(ReportError::Validation {
                message: format!(
                    "Too many excluded namespaces: {} (maximum: {})",
                    namespaces.len(),
                    MAX_EXCLUDED_NAMESPACES
                ),
            });
        }

        let namespaces = namespaces
            .into_iter()
            .map(ExcludedNamespace::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { namespaces })
    }

    /// A policy that excludes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Checks whether a raw coordinate falls in an excluded namespace
    pub fn is_excluded(&self, coordinate: &str) -> bool {
        // Every fragment is tested so each one records whether it ever matched.
        self.namespaces
            .iter()
            .fold(false, |excluded, ns| ns.matches(coordinate) || excluded)
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Returns the fragments that did not match any scanned coordinate
    pub fn unmatched_namespaces(&self) -> Vec<String> {
        self.namespaces
            .iter()
            .filter(|ns| !ns.matched.get())
            .map(|ns| ns.fragment.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludedNamespace {
    fragment: String,
    matched: Cell<bool>,
}

impl ExcludedNamespace {
    fn new(fragment: String) -> Result<Self, ReportError> {
        validate_fragment(&fragment)?;
        Ok(Self {
            fragment,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, coordinate: &str) -> bool {
        let is_match = coordinate.contains(&self.fragment);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

fn validate_fragment(fragment: &str) -> Result<(), ReportError> {
    if fragment.trim().is_empty() {
        return Err(ReportError::Validation {
            message: "Excluded namespace cannot be empty".to_string(),
        });
    }

    if fragment.len() > MAX_NAMESPACE_LENGTH {
        return Err(ReportError::Validation {
            message: format!(
                "Excluded namespace is too long ({} chars). Maximum: {} chars",
                fragment.len(),
                MAX_NAMESPACE_LENGTH
            ),
        });
    }

    if let Some(ch) = fragment.chars().find(|c| !is_valid_namespace_char(*c)) {
        return Err(ReportError::Validation {
            message: format!(
                "Excluded namespace '{}' contains invalid character '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, and colons are allowed.",
                fragment, ch
            ),
        });
    }

    Ok(())
}

fn is_valid_namespace_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')
}

use crate::shared::error::ReportError;
use std::fmt;
use std::str::FromStr;

/// Number of colon-delimited fields in a tree coordinate
const COORDINATE_FIELDS: usize = 5;

/// A dependency coordinate as printed by `mvn dependency:tree`:
/// `group:artifact:packaging:version:scope`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub packaging: String,
    pub version: String,
    pub scope: String,
}

impl Coordinate {
    /// Parses a raw coordinate string.
    ///
    /// Only the first four colons split; the scope absorbs anything after them.
    /// Empty fields are accepted as-is.
    ///
    /// # Errors
    /// Returns `ReportError::MalformedCoordinate` when fewer than five fields
    /// are present.
    pub fn parse(raw: &str) -> Result<Self, ReportError> {
        let fields: Vec<&str> = raw.splitn(COORDINATE_FIELDS, ':').collect();
        let [group, artifact, packaging, version, scope] = fields[..] else {
            return Err(ReportError::MalformedCoordinate {
                coordinate: raw.to_string(),
            });
        };

        Ok(Self {
            group: group.to_string(),
            artifact: artifact.to_string(),
            packaging: packaging.to_string(),
            version: version.to_string(),
            scope: scope.to_string(),
        })
    }

    /// The library name, `group:artifact`
    pub fn name(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }

    pub fn key(&self) -> DependencyKey {
        DependencyKey::new(self.name(), self.version.clone())
    }
}

impl FromStr for Coordinate {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.group, self.artifact, self.packaging, self.version, self.scope
        )
    }
}

/// Join key for one resolved dependency: library name plus version.
///
/// Ordering is by name, then version, which is the export order of the
/// version table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyKey {
    pub name: String,
    pub version: String,
}

impl DependencyKey {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Both halves must be present for the key to identify anything
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.version.is_empty()
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_coordinate() {
        let coordinate = Coordinate::parse("com.example:foo:jar:1.2:compile").unwrap();
        assert_eq!(coordinate.group, "com.example");
        assert_eq!(coordinate.artifact, "foo");
        assert_eq!(coordinate.packaging, "jar");
        assert_eq!(coordinate.version, "1.2");
        assert_eq!(coordinate.scope, "compile");
    }

    #[test]
    fn test_parse_scope_absorbs_extra_colons() {
        let coordinate = Coordinate::parse("g:a:jar:1.0:compile:extra:more").unwrap();
        assert_eq!(coordinate.scope, "compile:extra:more");
        assert_eq!(coordinate.to_string(), "g:a:jar:1.0:compile:extra:more");
    }

    #[test]
    fn test_parse_accepts_empty_fields() {
        let coordinate = Coordinate::parse("::::").unwrap();
        assert_eq!(coordinate.group, "");
        assert_eq!(coordinate.scope, "");
    }

    #[test]
    fn test_parse_too_few_fields() {
        let result = Coordinate::parse("com.example:foo:jar:1.2");
        assert_eq!(
            result,
            Err(ReportError::MalformedCoordinate {
                coordinate: "com.example:foo:jar:1.2".to_string()
            })
        );
    }

    #[test]
    fn test_parse_empty_string() {
        assert!(Coordinate::parse("").is_err());
    }

    #[test]
    fn test_from_str() {
        let coordinate: Coordinate = "org.slf4j:slf4j-api:jar:2.0.9:compile".parse().unwrap();
        assert_eq!(coordinate.name(), "org.slf4j:slf4j-api");
    }

    #[test]
    fn test_display_reconstructs_original() {
        let raw = "io.netty:netty-all:jar:4.1.100.Final:runtime";
        assert_eq!(Coordinate::parse(raw).unwrap().to_string(), raw);
    }

    #[test]
    fn test_key() {
        let coordinate = Coordinate::parse("a:b:jar:1.0:test").unwrap();
        assert_eq!(coordinate.key(), DependencyKey::new("a:b", "1.0"));
    }

    #[test]
    fn test_dependency_key_ordering() {
        let mut keys = vec![
            DependencyKey::new("b:b", "1.0"),
            DependencyKey::new("a:a", "2.0"),
            DependencyKey::new("a:a", "1.0"),
        ];
        keys.sort();
        assert_eq!(
            keys,
            vec![
                DependencyKey::new("a:a", "1.0"),
                DependencyKey::new("a:a", "2.0"),
                DependencyKey::new("b:b", "1.0"),
            ]
        );
    }

    #[test]
    fn test_dependency_key_display_and_completeness() {
        let key = DependencyKey::new("a:b", "1.0");
        assert_eq!(key.to_string(), "a:b+1.0");
        assert!(key.is_complete());
        assert!(!DependencyKey::new("a:b", "").is_complete());
        assert!(!DependencyKey::new("", "1.0").is_complete());
    }
}

/// Prefix Maven puts in front of every informational log line
const INFO_MARKER: &str = "[INFO] ";

/// Continuation markers, one per ancestor level
const INDENT_UNITS: [&str; 2] = ["|  ", "   "];

/// Branch markers introducing a node (`\- ` marks the last sibling)
const BRANCH_MARKERS: [&str; 2] = ["+- ", "\\- "];

/// One node of a printed dependency tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeEntry<'a> {
    /// Raw coordinate text, e.g. `com.example:foo:jar:1.2:compile`
    pub coordinate: &'a str,
    /// Depth below the root artifact; direct dependencies are at level 1
    pub level: usize,
}

/// LineClassifier - Recognizes dependency nodes in `mvn dependency:tree`
/// console output.
///
/// Anything that is not a node (section headers, the root artifact line,
/// blank lines, build log noise) classifies as `None`. Classification
/// never fails.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(line: &str) -> Option<TreeEntry<'_>> {
        let mut rest = line.strip_prefix(INFO_MARKER)?;

        let mut level = 1;
        while let Some(stripped) = INDENT_UNITS.iter().find_map(move |unit| rest.strip_prefix(unit)) {
            level += 1;
            rest = stripped;
        }

        let coordinate = BRANCH_MARKERS
            .iter()
            .find_map(move |marker| rest.strip_prefix(marker))?;

        Some(TreeEntry { coordinate, level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_dependency() {
        let entry = LineClassifier::classify("[INFO] +- com.example:foo:jar:1.2:compile").unwrap();
        assert_eq!(entry.coordinate, "com.example:foo:jar:1.2:compile");
        assert_eq!(entry.level, 1);
    }

    #[test]
    fn test_last_sibling_marker() {
        let entry = LineClassifier::classify("[INFO] \\- junit:junit:jar:4.13.2:test").unwrap();
        assert_eq!(entry.coordinate, "junit:junit:jar:4.13.2:test");
        assert_eq!(entry.level, 1);
    }

    #[test]
    fn test_pipe_indentation() {
        let entry =
            LineClassifier::classify("[INFO] |  +- org.slf4j:slf4j-api:jar:2.0.9:compile").unwrap();
        assert_eq!(entry.level, 2);
        assert_eq!(entry.coordinate, "org.slf4j:slf4j-api:jar:2.0.9:compile");
    }

    #[test]
    fn test_mixed_indentation() {
        let entry =
            LineClassifier::classify("[INFO] |     |  \\- a:b:jar:1.0:runtime").unwrap();
        assert_eq!(entry.level, 4);
        assert_eq!(entry.coordinate, "a:b:jar:1.0:runtime");
    }

    #[test]
    fn test_root_artifact_is_not_a_node() {
        assert_eq!(
            LineClassifier::classify("[INFO] com.example:app:jar:1.0-SNAPSHOT"),
            None
        );
    }

    #[test]
    fn test_missing_info_marker() {
        assert_eq!(
            LineClassifier::classify("+- com.example:foo:jar:1.2:compile"),
            None
        );
        assert_eq!(
            LineClassifier::classify("[WARNING] +- com.example:foo:jar:1.2:compile"),
            None
        );
    }

    #[test]
    fn test_noise_lines() {
        assert_eq!(LineClassifier::classify(""), None);
        assert_eq!(LineClassifier::classify("[INFO] "), None);
        assert_eq!(
            LineClassifier::classify("[INFO] --- maven-dependency-plugin:3.6.0:tree (default-cli) @ app ---"),
            None
        );
        assert_eq!(
            LineClassifier::classify("[INFO] ------------------------------------------------------------------------"),
            None
        );
        assert_eq!(LineClassifier::classify("[INFO] BUILD SUCCESS"), None);
    }

    #[test]
    fn test_indentation_without_branch_marker() {
        assert_eq!(LineClassifier::classify("[INFO] |  |  "), None);
    }
}

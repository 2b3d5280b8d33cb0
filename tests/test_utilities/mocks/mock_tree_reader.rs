use mvn_dependency_tree::prelude::*;
use std::path::Path;

/// Mock TreeReader serving fixed `dependency:tree` output
pub struct MockTreeReader {
    content: String,
    should_fail: bool,
}

impl MockTreeReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl TreeReader for MockTreeReader {
    fn read_tree(&self, _path: Option<&Path>) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock failure: could not read dependency tree");
        }
        Ok(self.content.clone())
    }
}

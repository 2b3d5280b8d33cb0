mod namespace_exclusion;

pub use namespace_exclusion::NamespaceExclusion;

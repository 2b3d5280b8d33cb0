//! Dependency tree analysis: domain types, the tree scanning services, the
//! namespace exclusion policy, and the reference tables.
pub mod domain;
pub mod policies;
pub mod services;
pub mod tables;

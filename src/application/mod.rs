/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the tree scanning services and reference tables,
/// and coordinates with infrastructure through ports.
pub mod dto;
pub mod use_cases;

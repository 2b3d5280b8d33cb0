/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the driven side: the interfaces the use cases call to
/// read inputs, present outputs, and report progress.
pub mod outbound;

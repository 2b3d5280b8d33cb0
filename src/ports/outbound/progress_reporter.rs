/// ProgressReporter port for reporting progress during operations
///
/// Progress goes to a side channel (stderr) so that standard output stays
/// reserved for the CSV report.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a sequence of inputs
    ///
    /// # Arguments
    /// * `current` - Number of inputs processed so far
    /// * `total` - Total number of inputs
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

/// Settings for the `$request_vrf` variable.
///
/// # Examples
///
/// ```
/// use vrf_ext::VrfExtConfig;
///
/// let config = VrfExtConfig::default().log_resolved(false);
/// assert!(!config.logs_resolved());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VrfExtConfig {
    log_resolved: bool,
}

impl VrfExtConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self { log_resolved: true }
    }

    /// Emit a debug line with the resolved device name on every successful
    /// lookup. Enabled by default.
    pub fn log_resolved(mut self, enabled: bool) -> Self {
        self.log_resolved = enabled;
        self
    }

    /// Returns whether successful lookups are logged.
    pub fn logs_resolved(&self) -> bool {
        self.log_resolved
    }
}

impl Default for VrfExtConfig {
    fn default() -> Self {
        Self::new()
    }
}

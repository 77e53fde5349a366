use crate::config::VrfExtConfig;
use crate::error::Result;
use crate::resolver::{RequestVrf, REQUEST_VRF};
use crate::variable::{handler, VariableFlags, VariableRegistry};

/// A module plugged into the request pipeline.
///
/// Only the preconfiguration stage is exposed; it runs once, before any
/// request is processed.
pub trait HttpModule {
    /// Module name, for logs.
    fn name(&self) -> &'static str;

    /// Registers the module's variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be registered.
    fn preconfiguration(&self, registry: &mut VariableRegistry) -> Result<()>;
}

/// Provides the `$request_vrf` variable.
///
/// # Examples
///
/// ```
/// use vrf_ext::{VariableRegistry, VrfExtModule, REQUEST_VRF};
///
/// let mut registry = VariableRegistry::new();
/// registry.configure(&[&VrfExtModule::default()]).expect("registered once");
/// assert!(registry.get(REQUEST_VRF).is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct VrfExtModule {
    config: VrfExtConfig,
}

impl VrfExtModule {
    /// Creates the module with `config`.
    pub fn new(config: VrfExtConfig) -> Self {
        Self { config }
    }

    /// Returns the module configuration.
    pub fn config(&self) -> &VrfExtConfig {
        &self.config
    }
}

impl HttpModule for VrfExtModule {
    fn name(&self) -> &'static str {
        "vrf_ext"
    }

    fn preconfiguration(&self, registry: &mut VariableRegistry) -> Result<()> {
        let vrf = RequestVrf::new(self.config);
        registry.add(
            REQUEST_VRF,
            VariableFlags::NONE,
            handler(move |request| vrf.get(request)),
        )
    }
}

//! Named request variables and the registry that resolves them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::module::HttpModule;
use crate::request::Request;
use crate::value::VariableValue;

/// Callback producing a variable's value for one request.
pub type GetHandler = Arc<dyn Fn(&Request<'_>) -> VariableValue + Send + Sync>;

/// Boxes a closure as a [`GetHandler`].
pub fn handler<F>(f: F) -> GetHandler
where
    F: Fn(&Request<'_>) -> VariableValue + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Registration flags for a variable.
///
/// The default is a cacheable, non-changeable variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariableFlags {
    /// Re-evaluate on every lookup instead of caching per request.
    pub no_cacheable: bool,
    /// Allow a later registration with the same name to replace this one.
    pub changeable: bool,
}

impl VariableFlags {
    /// Cacheable and not changeable.
    pub const NONE: Self = Self {
        no_cacheable: false,
        changeable: false,
    };
}

/// A registered variable.
#[derive(Clone)]
pub struct Variable {
    name: String,
    flags: VariableFlags,
    handler: GetHandler,
}

impl Variable {
    /// The variable name, without the leading `$`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flags the variable was registered with.
    pub fn flags(&self) -> VariableFlags {
        self.flags
    }

    /// Evaluates the variable for `request`, bypassing the request cache.
    pub fn evaluate(&self, request: &Request<'_>) -> VariableValue {
        (self.handler)(request)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

/// Configuration-time table of named variables.
///
/// Modules add their variables during preconfiguration; requests look them
/// up by name afterwards through [`Request::variable`].
///
/// # Examples
///
/// ```
/// use vrf_ext::{handler, VariableFlags, VariableRegistry, VariableValue};
///
/// let mut registry = VariableRegistry::new();
/// registry
///     .add("answer", VariableFlags::NONE, handler(|_req| {
///         VariableValue::new(b"42".to_vec())
///     }))
///     .expect("first registration");
///
/// assert!(registry.get("answer").is_some());
/// assert!(registry
///     .add("answer", VariableFlags::NONE, handler(|_req| VariableValue::not_found()))
///     .is_err());
/// ```
#[derive(Debug, Default)]
pub struct VariableRegistry {
    variables: HashMap<String, Variable>,
}

impl VariableRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` with `handler`.
    ///
    /// Names are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateVariable`] if `name` is taken, unless both the
    /// existing and the new registration are `changeable`, in which case the
    /// new handler replaces the old one.
    pub fn add(&mut self, name: &str, flags: VariableFlags, handler: GetHandler) -> Result<()> {
        let key = name.to_ascii_lowercase();

        if let Some(existing) = self.variables.get(&key) {
            if !(existing.flags.changeable && flags.changeable) {
                return Err(Error::DuplicateVariable {
                    name: name.to_string(),
                });
            }
        }

        self.variables.insert(
            key.clone(),
            Variable {
                name: key,
                flags,
                handler,
            },
        );
        Ok(())
    }

    /// Looks up a variable by name.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(&name.to_ascii_lowercase())
    }

    /// Number of registered variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Runs the preconfiguration hook of every module, in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first module error.
    pub fn configure(&mut self, modules: &[&dyn HttpModule]) -> Result<()> {
        for module in modules {
            module.preconfiguration(self)?;
            tracing::info!(module = module.name(), "module preconfigured");
        }
        Ok(())
    }
}

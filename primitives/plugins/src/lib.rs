#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! secretgen Plugins
//!
//! This crate defines the plugin system for extending generation steps.
//! Every step is identified by an [`Event`]; interceptors registered for that
//! event can rewrite its parameters before it runs, answer in place of it, and
//! rewrite its output afterwards. A step called through
//! [`PluginRegistry::invoke`] with no interceptors behaves exactly like calling
//! the step directly.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Boxed error returned by interceptor hooks.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Plugin trait for extending generator functionality
pub trait Plugin: Send + Sync {
    /// Plugin name
    fn name(&self) -> &'static str;

    /// Plugin description
    fn description(&self) -> &'static str { "" }
}

/// A named, interceptable generation step.
pub trait Event: 'static {
    /// Stable event name interceptors are registered under
    const NAME: &'static str;
    /// Input of the step
    type Params: 'static;
    /// Output of the step
    type Output: 'static;
}

/// Hooks a plugin can run around an [`Event`].
///
/// All hooks default to pass-through, so an interceptor only implements the
/// ones it needs.
pub trait Interceptor<E: Event>: Plugin {
    /// Rewrite the parameters before the step runs.
    fn before(&self, params: E::Params) -> Result<E::Params, HookError> { Ok(params) }

    /// Produce the output instead of the step. `None` lets the step run.
    fn replace(&self, _params: &E::Params) -> Option<Result<E::Output, HookError>> { None }

    /// Rewrite the output after the step (or its replacement) ran.
    fn after(&self, _params: &E::Params, output: E::Output) -> Result<E::Output, HookError> {
        Ok(output)
    }
}

/// Which hook of an interceptor was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookStage {
    /// [`Interceptor::before`]
    Before,
    /// [`Interceptor::replace`]
    Replace,
    /// [`Interceptor::after`]
    After,
}

impl std::fmt::Display for HookStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HookStage::Before => write!(f, "before"),
            HookStage::Replace => write!(f, "replace"),
            HookStage::After => write!(f, "after"),
        }
    }
}

/// Plugin error type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginError {
    /// An interceptor hook failed
    ExecutionFailed {
        /// Event the interceptor was registered for
        event: String,
        /// Plugin name of the interceptor
        interceptor: String,
        /// Hook that failed
        stage: HookStage,
        /// Error reported by the hook
        message: String,
    },
    /// The registry holds interceptors of another type under this event name
    ConfigurationError(String),
}

impl std::fmt::Display for PluginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginError::ExecutionFailed { event, interceptor, stage, message } => write!(
                f,
                "Execution failed: {} hook of '{}' on {}: {}",
                stage, interceptor, event, message
            ),
            PluginError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for PluginError {}

impl PluginError {
    fn execution<E: Event>(interceptor: &str, stage: HookStage, source: HookError) -> Self {
        PluginError::ExecutionFailed {
            event: E::NAME.to_string(),
            interceptor: interceptor.to_string(),
            stage,
            message: source.to_string(),
        }
    }
}

/// Type-erased `Arc<dyn Interceptor<E>>`.
type ErasedInterceptor = Box<dyn Any + Send + Sync>;

/// Plugin registry mapping event names to their interceptors
///
/// Interceptors run in registration order.
#[derive(Default)]
pub struct PluginRegistry {
    interceptors: BTreeMap<&'static str, Vec<ErasedInterceptor>>,
}

impl PluginRegistry {
    /// Create a new plugin registry
    pub fn new() -> Self { Self::default() }

    /// Register an interceptor for event `E`
    pub fn register<E: Event>(&mut self, interceptor: Arc<dyn Interceptor<E>>) {
        logging::debug(
            "plugins",
            &format!("registering '{}' for {}", interceptor.name(), E::NAME),
        );
        self.interceptors.entry(E::NAME).or_default().push(Box::new(interceptor));
    }

    /// Number of interceptors registered under an event name
    pub fn interceptor_count(&self, event: &str) -> usize {
        self.interceptors.get(event).map_or(0, Vec::len)
    }

    /// List all event names with at least one interceptor
    pub fn list_events(&self) -> Vec<&str> { self.interceptors.keys().copied().collect() }

    /// Interceptors registered for `E`, in registration order
    pub fn interceptors_for<E: Event>(&self) -> Result<Vec<Arc<dyn Interceptor<E>>>, PluginError> {
        let Some(entries) = self.interceptors.get(E::NAME) else {
            return Ok(Vec::new());
        };

        entries
            .iter()
            .map(|entry| {
                entry.downcast_ref::<Arc<dyn Interceptor<E>>>().cloned().ok_or_else(|| {
                    PluginError::ConfigurationError(format!(
                        "interceptor registered under '{}' does not match the event's types",
                        E::NAME
                    ))
                })
            })
            .collect()
    }

    /// Run `core` as event `E`, composing every registered interceptor around it
    ///
    /// Order: all `before` hooks, then the first `replace` hook that answers
    /// (or `core` if none does), then all `after` hooks. The first failure
    /// aborts the call.
    pub fn invoke<E, F, Err>(&self, params: E::Params, core: F) -> Result<E::Output, Err>
    where
        E: Event,
        F: FnOnce(&E::Params) -> Result<E::Output, Err>,
        Err: From<PluginError>,
    {
        let interceptors = self.interceptors_for::<E>()?;
        if interceptors.is_empty() {
            return core(&params);
        }

        logging::trace(
            "plugins",
            &format!("{} → {} interceptor(s)", E::NAME, interceptors.len()),
        );

        let mut params = params;
        for interceptor in &interceptors {
            params = interceptor.before(params).map_err(|e| {
                PluginError::execution::<E>(interceptor.name(), HookStage::Before, e)
            })?;
        }

        let replacement = interceptors
            .iter()
            .find_map(|interceptor| interceptor.replace(&params).map(|r| (interceptor, r)));

        let mut output = match replacement {
            Some((interceptor, result)) => {
                logging::debug(
                    "plugins",
                    &format!("{} replaced by '{}'", E::NAME, interceptor.name()),
                );
                result.map_err(|e| {
                    PluginError::execution::<E>(interceptor.name(), HookStage::Replace, e)
                })?
            }
            None => core(&params)?,
        };

        for interceptor in &interceptors {
            output = interceptor.after(&params, output).map_err(|e| {
                PluginError::execution::<E>(interceptor.name(), HookStage::After, e)
            })?;
        }

        Ok(output)
    }
}

//! Navigation engine: resolution, prerequisite satisfaction, and the
//! retrying execution loop.
//!
//! A navigate call moves through `CheckingArrival → ResolvingPrerequisite
//! → Executing → VerifyingArrival`. Arrival probes that error are treated
//! as "not arrived"; execute failures consume one attempt from a bounded
//! retry budget; prerequisite failures and post-success verification
//! timeouts are fatal and never retried.

use crate::error::NavigationError;
use crate::navigable::{short_type_name, Navigable};
use crate::registry::StepRegistry;
use crate::step::{NavigateArgs, NavigateStep, StepContext};
use crate::wait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Attempt budget for a single step's execute phase.
pub const DEFAULT_MAX_TRIES: usize = 2;

/// Interval between arrival polls during post-execution verification.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Engine tunables. The attempt budget is deliberately a config-level
/// constant rather than a per-call override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum execute attempts per navigate call.
    #[serde(default = "default_max_tries")]
    pub max_tries: usize,

    /// Arrival-poll interval in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_max_tries() -> usize {
    DEFAULT_MAX_TRIES
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_tries: default_max_tries(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

/// Per-call options for [`Navigator::navigate_with`].
pub struct NavigateOptions {
    /// Pass-through arguments delivered to the step's probe and execute.
    pub args: NavigateArgs,
    /// When set, poll the arrival probe after execution until it returns
    /// true or this window elapses. Elapsing fails the call.
    pub wait_for_view: Option<Duration>,
    /// Run the step's reset hook between failed attempts.
    pub use_resetter: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            args: NavigateArgs::default(),
            wait_for_view: None,
            use_resetter: true,
        }
    }
}

/// The navigation engine. Owns the step registry; registration is
/// expected to complete before the first navigate call.
///
/// Navigation is synchronous and recursive: prerequisite destinations
/// are reached by re-entering [`Navigator::navigate`] on the same
/// thread. The engine holds no mutable state across calls.
pub struct Navigator {
    registry: RwLock<StepRegistry>,
    config: EngineConfig,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            registry: RwLock::new(StepRegistry::new()),
            config,
        }
    }

    /// Register `step` against owner type `T` under the step's own
    /// declared identifier.
    pub fn register<T: Navigable>(&self, step: Arc<dyn NavigateStep>) {
        let name = step.name().to_string();
        self.register_as::<T>(name, step);
    }

    /// Register `step` against owner type `T` under an explicit
    /// destination name. Last registration for a `(type, name)` pair
    /// wins.
    pub fn register_as<T: Navigable>(&self, name: impl Into<String>, step: Arc<dyn NavigateStep>) {
        let name = name.into();
        trace!(
            owner = short_type_name::<T>(),
            destination = %name,
            "registering navigation step"
        );
        self.registry
            .write()
            .register(std::any::TypeId::of::<T>(), name, step);
    }

    /// Destination names registered directly against `T`, ignoring
    /// ancestors and descendants.
    pub fn list_destinations<T: Navigable>(&self) -> BTreeSet<String> {
        self.registry
            .read()
            .destinations_for(std::any::TypeId::of::<T>())
    }

    /// Exact lookup of the step registered for `(T, name)`; no ancestor
    /// fallback.
    pub fn get_step<T: Navigable>(&self, name: &str) -> Result<Arc<dyn NavigateStep>, NavigationError> {
        self.registry
            .read()
            .lookup(std::any::TypeId::of::<T>(), name)
            .ok_or_else(|| NavigationError::StepNotFound {
                type_name: short_type_name::<T>().to_string(),
                name: name.to_string(),
            })
    }

    /// Navigate `obj` to `destination` with default options: no
    /// pass-through arguments, no post-execution wait, reset hook
    /// enabled.
    pub fn navigate(&self, obj: &dyn Navigable, destination: &str) -> Result<(), NavigationError> {
        self.navigate_with(obj, destination, NavigateOptions::default())
    }

    /// Navigate `obj` to `destination`.
    ///
    /// Resolves the step through the object's declared type chain, then
    /// runs the attempt loop: arrival check, prerequisite satisfaction,
    /// execute, and (once, after the final successful execute) bounded
    /// arrival verification when `wait_for_view` is set.
    pub fn navigate_with(
        &self,
        obj: &dyn Navigable,
        destination: &str,
        options: NavigateOptions,
    ) -> Result<(), NavigationError> {
        let chain = obj.type_chain();

        // Clone the step handle out so no registry lock is held while
        // user code runs; prerequisite recursion re-enters navigate.
        let step = {
            let registry = self.registry.read();
            match registry.resolve(&chain, destination) {
                Some(step) => step,
                None => {
                    let available: Vec<String> =
                        registry.available_from(&chain).into_iter().collect();
                    return Err(NavigationError::DestinationNotFound {
                        destination: destination.to_string(),
                        type_name: obj.type_name().to_string(),
                        available: available.join(", "),
                    });
                }
            }
        };

        debug!(
            destination,
            object = obj.type_name(),
            "navigating"
        );

        let ctx = StepContext {
            obj,
            destination,
            args: &options.args,
        };

        let mut executed = false;
        for attempt in 1..=self.config.max_tries {
            if self.already_arrived(step.as_ref(), &ctx) {
                debug!(destination, "already at destination");
                return Ok(());
            }

            // Prerequisite failures propagate unchanged; they are
            // configuration or exhaustion errors at their own level.
            step.prerequisite().satisfy(self, &ctx)?;

            match step.step(&ctx) {
                Ok(()) => {
                    trace!(destination, attempt, "step executed");
                    executed = true;
                    break;
                }
                Err(err) => {
                    warn!(destination, attempt, error = %err, "step execution failed");
                    if options.use_resetter {
                        step.resetter(&ctx);
                    }
                }
            }
        }

        if !executed {
            return Err(NavigationError::TriesExceeded {
                destination: destination.to_string(),
            });
        }

        if let Some(timeout) = options.wait_for_view {
            let interval = Duration::from_millis(self.config.poll_interval_ms);
            wait::wait_for(
                || self.already_arrived(step.as_ref(), &ctx),
                timeout,
                interval,
            )
            .map_err(|_| NavigationError::ArrivalTimedOut {
                destination: destination.to_string(),
                timeout,
            })?;
        }

        Ok(())
    }

    /// Run the arrival probe, swallowing probe errors as "not arrived".
    fn already_arrived(&self, step: &dyn NavigateStep, ctx: &StepContext<'_>) -> bool {
        match step.am_i_here(ctx) {
            Ok(here) => here,
            Err(err) => {
                debug!(
                    destination = ctx.destination,
                    error = %err,
                    "arrival probe errored, treating as not arrived"
                );
                false
            }
        }
    }
}

//! Step definitions: the registered unit of navigation behavior.

use crate::navigable::Navigable;
use crate::prerequisite::Prerequisite;
use serde_json::Value;
use std::collections::HashMap;

/// Pass-through arguments delivered unmodified to a step's arrival probe
/// and execute action.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigateArgs {
    /// Positional values, in call order.
    pub positional: Vec<Value>,
    /// Keyword values, keyed by name.
    pub keyword: HashMap<String, Value>,
}

impl NavigateArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional value.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a keyword value.
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(key.into(), value.into());
        self
    }
}

/// Per-call view handed to every step hook.
///
/// `destination` is the name the step was registered under, which may
/// differ from [`NavigateStep::name`] when registration overrode it.
pub struct StepContext<'a> {
    /// The object being navigated.
    pub obj: &'a dyn Navigable,
    /// The registered destination name being navigated to.
    pub destination: &'a str,
    /// Pass-through arguments from the top of this navigate call.
    pub args: &'a NavigateArgs,
}

/// A registered navigation step: arrival probe, execute action, optional
/// reset hook, and a declared prerequisite.
///
/// Implementations are registered against an owner type via
/// [`crate::engine::Navigator::register`] and looked up through the
/// owner's ancestor chain at navigation time.
pub trait NavigateStep: Send + Sync {
    /// Declared identifier, used as the destination name when
    /// registration does not supply one.
    fn name(&self) -> &str;

    /// The step(s) that must be reached before [`NavigateStep::step`]
    /// may run. Resolved fresh on every attempt; defaults to none.
    fn prerequisite(&self) -> Prerequisite {
        Prerequisite::None
    }

    /// Arrival probe: is the object already at this destination?
    ///
    /// Defaults to `false`, meaning arrival is never assumed and the
    /// step always runs. Errors returned here are swallowed by the
    /// engine and treated as "not arrived".
    fn am_i_here(&self, _ctx: &StepContext<'_>) -> anyhow::Result<bool> {
        Ok(false)
    }

    /// The action that attempts to realize the transition. A returned
    /// error consumes one attempt from the retry budget.
    fn step(&self, ctx: &StepContext<'_>) -> anyhow::Result<()>;

    /// Recovery hook run after a failed attempt, before the next one.
    /// No-op by default.
    fn resetter(&self, _ctx: &StepContext<'_>) {}
}

impl std::fmt::Debug for dyn NavigateStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigateStep")
            .field("name", &self.name())
            .finish()
    }
}

//! Prerequisite declarations and their interpretation.
//!
//! A prerequisite is the destination that must be reached before a step's
//! execute action may run. Prerequisites form an implicit dependency
//! chain that is resolved lazily on every navigate call rather than
//! materialized into a graph, so targets that only exist at runtime
//! (e.g. a parent object created just-in-time) resolve naturally.

use crate::engine::Navigator;
use crate::error::NavigationError;
use crate::navigable::Navigable;
use crate::step::StepContext;
use std::fmt;
use std::sync::Arc;

/// Escape hatch for prerequisites that don't fit the static shapes of
/// [`Prerequisite`]. The resolver receives the engine and the current
/// step context and performs any recursive navigation it needs.
pub trait PrerequisiteResolver: Send + Sync {
    fn resolve(
        &self,
        navigator: &Navigator,
        ctx: &StepContext<'_>,
    ) -> Result<(), NavigationError>;
}

/// A step's declared prerequisite.
#[derive(Clone)]
pub enum Prerequisite {
    /// No prerequisite; the step runs immediately.
    None,
    /// Navigate the same object to a sibling destination first.
    Sibling(String),
    /// Read a named attribute off the current object to obtain another
    /// navigable object, then navigate that object to `destination`.
    Attribute {
        attribute: String,
        destination: String,
    },
    /// Navigate an unrelated subject directly. The target is usually a
    /// type-token value (a unit struct standing for a class) whose steps
    /// are not reachable via attribute traversal from the current object.
    Object {
        target: Arc<dyn Navigable>,
        destination: String,
    },
    /// Delegate to a custom resolver.
    Custom(Arc<dyn PrerequisiteResolver>),
}

impl Prerequisite {
    /// Sibling-destination prerequisite on the same object.
    pub fn sibling(destination: impl Into<String>) -> Self {
        Prerequisite::Sibling(destination.into())
    }

    /// Attribute-derived prerequisite on a parent object.
    pub fn attribute(attribute: impl Into<String>, destination: impl Into<String>) -> Self {
        Prerequisite::Attribute {
            attribute: attribute.into(),
            destination: destination.into(),
        }
    }

    /// Absolute prerequisite on an unrelated navigation subject.
    pub fn object(target: Arc<dyn Navigable>, destination: impl Into<String>) -> Self {
        Prerequisite::Object {
            target,
            destination: destination.into(),
        }
    }

    /// Custom-resolver prerequisite.
    pub fn custom(resolver: Arc<dyn PrerequisiteResolver>) -> Self {
        Prerequisite::Custom(resolver)
    }

    /// Interpret the prerequisite into at most one recursive navigate
    /// call. Failures from the recursive call propagate unchanged; they
    /// are never retried at the caller's level.
    pub(crate) fn satisfy(
        &self,
        navigator: &Navigator,
        ctx: &StepContext<'_>,
    ) -> Result<(), NavigationError> {
        match self {
            Prerequisite::None => Ok(()),
            Prerequisite::Sibling(destination) => navigator.navigate(ctx.obj, destination),
            Prerequisite::Attribute {
                attribute,
                destination,
            } => {
                let parent = ctx.obj.attribute(attribute).ok_or_else(|| {
                    NavigationError::MissingAttribute {
                        type_name: ctx.obj.type_name().to_string(),
                        attribute: attribute.clone(),
                    }
                })?;
                navigator.navigate(parent.as_ref(), destination)
            }
            Prerequisite::Object {
                target,
                destination,
            } => navigator.navigate(target.as_ref(), destination),
            Prerequisite::Custom(resolver) => resolver.resolve(navigator, ctx),
        }
    }
}

impl fmt::Debug for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prerequisite::None => write!(f, "None"),
            Prerequisite::Sibling(destination) => {
                f.debug_tuple("Sibling").field(destination).finish()
            }
            Prerequisite::Attribute {
                attribute,
                destination,
            } => f
                .debug_struct("Attribute")
                .field("attribute", attribute)
                .field("destination", destination)
                .finish(),
            Prerequisite::Object {
                target,
                destination,
            } => f
                .debug_struct("Object")
                .field("target", &target.type_name())
                .field("destination", destination)
                .finish(),
            Prerequisite::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

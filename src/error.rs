//! Error types for the navigation-resolution engine.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration and logging-setup errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid logging configuration: {0}")]
    Logging(String),
}

/// Errors surfaced by [`crate::engine::Navigator`] and the step registry.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The requested destination is not registered for the object's type
    /// or any of its declared ancestors. The available list enumerates
    /// every destination reachable from that type, sorted; an empty list
    /// renders as empty brackets rather than being omitted.
    #[error("Couldn't find the destination [{destination}] with the given class [{type_name}] the following were available [{available}]")]
    DestinationNotFound {
        destination: String,
        type_name: String,
        available: String,
    },

    /// The step's execute phase failed on every attempt in the retry budget.
    #[error("Navigation failed to reach [{destination}] in the specified tries")]
    TriesExceeded { destination: String },

    /// Post-execution arrival verification never completed within the
    /// requested wait window.
    #[error("Timed out after {timeout:?} waiting to arrive at [{destination}]")]
    ArrivalTimedOut {
        destination: String,
        timeout: Duration,
    },

    /// Exact registry lookup failed; unlike [`Self::DestinationNotFound`]
    /// this never consults the ancestor chain.
    #[error("No step named [{name}] registered directly on class [{type_name}]")]
    StepNotFound { type_name: String, name: String },

    /// An attribute-derived prerequisite named an attribute the object
    /// does not expose. A configuration error, never retried.
    #[error("Object of class [{type_name}] has no attribute [{attribute}] to derive a prerequisite from")]
    MissingAttribute {
        type_name: String,
        attribute: String,
    },
}

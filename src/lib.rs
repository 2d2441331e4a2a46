//! Waypath: Navigation-Resolution Engine
//!
//! Given a typed object and a named destination, waypath resolves the
//! registered step for that destination through the object's declared
//! type ancestry, satisfies the step's prerequisite chain recursively,
//! executes the step with a bounded retry budget, and optionally
//! verifies arrival by polling the step's arrival probe.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod navigable;
pub mod prerequisite;
pub mod registry;
pub mod step;
pub mod wait;

pub use config::WaypathConfig;
pub use engine::{EngineConfig, NavigateOptions, Navigator};
pub use error::{ConfigError, NavigationError};
pub use logging::{init_logging, LoggingConfig};
pub use navigable::Navigable;
pub use prerequisite::{Prerequisite, PrerequisiteResolver};
pub use registry::StepRegistry;
pub use step::{NavigateArgs, NavigateStep, StepContext};

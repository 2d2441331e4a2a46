//! Shared test fixtures: a small cluster/host domain with recording steps.
//!
//! Steps push the destination name they reached into a shared trace so
//! tests can assert the order in which prerequisite chains execute.

use std::sync::{Arc, Mutex};
use waypath::{Navigable, NavigateStep, Navigator, Prerequisite, StepContext};

/// Ordered record of externally observable step effects.
pub struct Trace(Mutex<Vec<String>>);

impl Trace {
    pub fn new() -> Arc<Self> {
        Arc::new(Trace(Mutex::new(Vec::new())))
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

/// Top-level entity with directly registered destinations.
pub struct Cluster {
    pub name: String,
}

impl Navigable for Cluster {}

/// Entity contained in a cluster; reaches cluster destinations through
/// the `cluster` attribute.
pub struct Host {
    pub name: String,
    pub cluster: Arc<Cluster>,
}

impl Navigable for Host {
    fn attribute(&self, name: &str) -> Option<Arc<dyn Navigable>> {
        match name {
            "cluster" => Some(self.cluster.clone()),
            _ => None,
        }
    }
}

/// Step that records its destination name and succeeds.
pub struct RecordingStep {
    pub name: &'static str,
    pub trace: Arc<Trace>,
    pub prerequisite: Prerequisite,
}

impl NavigateStep for RecordingStep {
    fn name(&self) -> &str {
        self.name
    }

    fn prerequisite(&self) -> Prerequisite {
        self.prerequisite.clone()
    }

    fn step(&self, ctx: &StepContext<'_>) -> anyhow::Result<()> {
        self.trace.push(ctx.destination);
        Ok(())
    }
}

/// Entry-point step: arrived once anything has been recorded, so
/// repeated prerequisite chains do not re-execute it.
pub struct RootStep {
    pub trace: Arc<Trace>,
}

impl NavigateStep for RootStep {
    fn name(&self) -> &str {
        "Root"
    }

    fn am_i_here(&self, _ctx: &StepContext<'_>) -> anyhow::Result<bool> {
        Ok(!self.trace.is_empty())
    }

    fn step(&self, ctx: &StepContext<'_>) -> anyhow::Result<()> {
        self.trace.push(ctx.destination);
        Ok(())
    }
}

/// Navigator with the standard cluster/host destinations registered:
///
/// - `Cluster::Root` — entry point, arrival-checked against the trace
/// - `Cluster::AllView` — sibling prerequisite on `Root`
/// - `Host::Details` — attribute-derived prerequisite on the host's
///   cluster reaching `AllView`
pub fn standard_navigator(trace: &Arc<Trace>) -> Navigator {
    let navigator = Navigator::new();

    navigator.register::<Cluster>(Arc::new(RootStep {
        trace: trace.clone(),
    }));
    navigator.register::<Cluster>(Arc::new(RecordingStep {
        name: "AllView",
        trace: trace.clone(),
        prerequisite: Prerequisite::sibling("Root"),
    }));
    navigator.register::<Host>(Arc::new(RecordingStep {
        name: "Details",
        trace: trace.clone(),
        prerequisite: Prerequisite::attribute("cluster", "AllView"),
    }));

    navigator
}

pub fn cluster(name: &str) -> Arc<Cluster> {
    Arc::new(Cluster {
        name: name.to_string(),
    })
}

pub fn host(name: &str, cluster: Arc<Cluster>) -> Host {
    Host {
        name: name.to_string(),
        cluster,
    }
}

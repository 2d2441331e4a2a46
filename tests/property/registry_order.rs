//! Property-based tests for registration semantics

use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};
use waypath::{Navigable, NavigateStep, Navigator, StepContext};

struct Panel;

impl Navigable for Panel {}

/// Step that reports its tag when executed, so registrations are
/// distinguishable through navigation behavior.
struct TaggedStep {
    name: String,
    tag: u32,
    observed: Arc<Mutex<Option<u32>>>,
}

impl NavigateStep for TaggedStep {
    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, _ctx: &StepContext<'_>) -> anyhow::Result<()> {
        *self.observed.lock().unwrap() = Some(self.tag);
        Ok(())
    }
}

fn register_all(pairs: &[(String, u32)]) -> (Navigator, Arc<Mutex<Option<u32>>>) {
    let navigator = Navigator::new();
    let observed = Arc::new(Mutex::new(None));
    for (name, tag) in pairs {
        navigator.register::<Panel>(Arc::new(TaggedStep {
            name: name.clone(),
            tag: *tag,
            observed: observed.clone(),
        }));
    }
    (navigator, observed)
}

/// Destination listings are a set: independent of registration order.
#[test]
fn test_list_destinations_order_independence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec("[A-E][a-z]{0,4}", 1..12),
            |names| {
                let forward: Vec<(String, u32)> =
                    names.iter().cloned().map(|n| (n, 0)).collect();
                let mut backward = forward.clone();
                backward.reverse();

                let (nav_forward, _) = register_all(&forward);
                let (nav_backward, _) = register_all(&backward);

                let expected: BTreeSet<String> = names.iter().cloned().collect();
                assert_eq!(nav_forward.list_destinations::<Panel>(), expected);
                assert_eq!(nav_backward.list_destinations::<Panel>(), expected);

                Ok(())
            },
        )
        .unwrap();
}

/// For every (type, name) pair, the definition last registered for that
/// pair is the one navigation executes, across arbitrary interleavings.
#[test]
fn test_last_registration_wins_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &proptest::collection::vec(("[A-C]", any::<u32>()), 1..20),
            |pairs| {
                let (navigator, observed) = register_all(&pairs);

                let mut last_tag: HashMap<&str, u32> = HashMap::new();
                for (name, tag) in &pairs {
                    last_tag.insert(name.as_str(), *tag);
                }

                for (name, expected) in last_tag {
                    *observed.lock().unwrap() = None;
                    navigator.navigate(&Panel, name).unwrap();
                    assert_eq!(*observed.lock().unwrap(), Some(expected));
                }

                Ok(())
            },
        )
        .unwrap();
}

//! The ReconciliationEngine keeps the tracked entries in step with the
//! window manager and applies the user's intents.

mod intents;
mod lifecycle;
mod reconcile;
mod types;

pub use types::*;


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::surface::PanelSurface;
    use crate::{EntryId, TaskbarEntry};
    use proptest::prelude::*;
    use std::collections::HashSet;
    use taskstrip_common::{Intent, WindowHandle, WindowSnapshot};
    use taskstrip_config::EntryIdentity;
    use taskstrip_gateway::ScriptedGateway;

    const OWN: u64 = 7;

    #[derive(Debug, Clone)]
    enum Step {
        Poll(Vec<(u64, &'static str)>),
        FailedPoll,
        Close(u64),
    }

    fn step() -> impl Strategy<Value = Step> {
        let window = (0u64..8, prop::sample::select(vec!["", "  ", "a", "b", " b "]));
        prop_oneof![
            4 => prop::collection::vec(window, 0..10).prop_map(Step::Poll),
            1 => Just(Step::FailedPoll),
            2 => (0u64..8).prop_map(Step::Close),
        ]
    }

    fn identity() -> impl Strategy<Value = EntryIdentity> {
        prop_oneof![Just(EntryIdentity::HandleAndName), Just(EntryIdentity::Handle)]
    }

    #[derive(Default)]
    struct MirrorSurface {
        strip: Vec<(EntryId, WindowHandle)>,
    }

    impl PanelSurface for MirrorSurface {
        fn on_entry_created(&mut self, position: usize, entry: &TaskbarEntry) {
            let position = position.min(self.strip.len());
            self.strip.insert(position, (entry.id(), entry.handle()));
        }

        fn on_entry_destroyed(&mut self, entry: &TaskbarEntry) {
            self.strip.retain(|(id, _)| *id != entry.id());
        }

        fn own_window_handle(&self) -> Option<WindowHandle> {
            Some(WindowHandle(OWN))
        }
    }

    proptest! {
        #[test]
        fn tracked_set_follows_snapshots(
            identity in identity(),
            steps in prop::collection::vec(step(), 1..24),
        ) {
            let (gateway, script) = ScriptedGateway::new();
            let mut engine = ReconciliationEngine::new(Box::new(gateway), identity);
            let mut surface = MirrorSurface::default();
            // Handles of the last successful snapshot, minus those closed since
            let mut allowed: HashSet<u64> = HashSet::new();

            for step in steps {
                match step {
                    Step::Poll(pairs) => {
                        script.set_windows(WindowSnapshot::from_pairs(pairs.iter().copied()));
                        prop_assert!(engine.poll(&mut surface).is_applied());
                        allowed = pairs
                            .iter()
                            .filter(|(_, name)| !name.trim().is_empty())
                            .map(|(handle, _)| *handle)
                            .collect();
                    }
                    Step::FailedPoll => {
                        script.fail_next_lists(1);
                        prop_assert!(!engine.poll(&mut surface).is_applied());
                    }
                    Step::Close(handle) => {
                        let outcome =
                            engine.handle_intent(Intent::Close(WindowHandle(handle)), &mut surface);
                        if matches!(outcome, IntentOutcome::Closed) {
                            allowed.remove(&handle);
                        }
                    }
                }

                let handles: Vec<u64> = engine.tracked().handles().map(|h| h.0).collect();
                let unique: HashSet<u64> = handles.iter().copied().collect();
                prop_assert_eq!(unique.len(), handles.len());
                prop_assert!(unique.is_subset(&allowed), "{:?} not in {:?}", handles, allowed);
                prop_assert!(!unique.contains(&OWN));

                let tracked: Vec<(EntryId, WindowHandle)> = engine
                    .tracked()
                    .iter()
                    .map(|e| (e.id(), e.handle()))
                    .collect();
                prop_assert_eq!(&surface.strip, &tracked);
            }
        }
    }
}

//! Environment selection controller.
//!
//! The controller is the state machine behind "which environment is
//! current": it reads the authoritative value from the store on every
//! request, self-heals an empty store to the reserved no-environment entry,
//! drives the pick-and-confirm flow, and broadcasts changes.

use crate::config::RequestConfig;
use crate::error::Result;
use crate::state::SelectionStore;
use crate::ui::{EnvironmentPicker, StatusPresenter};

use super::notifier::ChangeNotifier;
use super::selection::{EnvironmentSelection, SHARED_ENVIRONMENT_NAME};

/// Prompt shown above the candidate list.
pub const SWITCH_PROMPT: &str = "Select request environment";

/// Build the candidate list for a switch.
///
/// The reserved no-environment entry always comes first, followed by every
/// configured environment in document order, skipping `$shared`. The
/// candidate matching `current` carries the current-selection marker; the
/// no-environment entry keeps its fixed description regardless.
pub fn candidate_list(
    config: &RequestConfig,
    current: &EnvironmentSelection,
) -> Vec<EnvironmentSelection> {
    let mut candidates = vec![EnvironmentSelection::no_environment()];

    for name in config.environment_names() {
        if name == SHARED_ENVIRONMENT_NAME {
            continue;
        }
        let mut candidate = EnvironmentSelection::named(name);
        if candidate.name == current.name {
            candidate.mark_current();
        }
        candidates.push(candidate);
    }

    candidates
}

/// Owns the in-process notion of "current environment".
///
/// No selection is cached: every read goes to the store, so two controllers
/// over the same store always agree. Dropping the controller releases the
/// status presenter but leaves the notification channel untouched; its
/// lifetime is independent of any one controller.
pub struct EnvironmentController {
    store: Box<dyn SelectionStore>,
    notifier: ChangeNotifier,
    status: Box<dyn StatusPresenter>,
}

impl EnvironmentController {
    /// Create a controller and show the current selection on the status
    /// presenter.
    ///
    /// Reading the current selection may perform the self-healing default
    /// write, so construction can touch the store.
    pub fn new(
        store: Box<dyn SelectionStore>,
        notifier: ChangeNotifier,
        status: Box<dyn StatusPresenter>,
    ) -> Result<Self> {
        let mut controller = Self {
            store,
            notifier,
            status,
        };
        let current = controller.current_environment()?;
        controller.status.update(&current.label);
        Ok(controller)
    }

    /// The current selection, read from the store.
    ///
    /// An empty (or unreadable) store yields the no-environment entry, which
    /// is written through immediately so the store is never left empty after
    /// first use. Idempotent: repeated calls with no intervening switch
    /// return equal selections.
    pub fn current_environment(&self) -> Result<EnvironmentSelection> {
        match self.store.load_environment()? {
            Some(current) => Ok(current),
            None => {
                let current = EnvironmentSelection::no_environment();
                tracing::debug!("no persisted selection, defaulting to no-environment");
                self.store.save_environment(&current)?;
                Ok(current)
            }
        }
    }

    /// Run the interactive switch flow.
    ///
    /// Presents the candidate list built from `config` and, on a choice,
    /// notifies subscribers, updates the status presenter, and persists the
    /// selection before returning. Cancellation returns `Ok(None)` and
    /// changes nothing.
    pub fn switch_environment(
        &mut self,
        config: &RequestConfig,
        picker: &mut dyn EnvironmentPicker,
    ) -> Result<Option<EnvironmentSelection>> {
        let current = self.current_environment()?;
        let candidates = candidate_list(config, &current);

        let Some(choice) = picker.show(&candidates, SWITCH_PROMPT)? else {
            tracing::debug!("environment switch canceled");
            return Ok(None);
        };

        tracing::info!(from = %current.name, to = %choice.name, "switching environment");
        self.notifier.notify(&choice.label);
        self.status.update(&choice.label);
        self.store.save_environment(&choice)?;

        Ok(Some(choice))
    }

    /// Handle to the change notification channel.
    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }
}

impl Drop for EnvironmentController {
    fn drop(&mut self) {
        self.status.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{CURRENT_MARKER, NO_ENVIRONMENT_NAME};
    use crate::state::MemorySelectionStore;
    use crate::ui::{MockPicker, MockStatus};
    use std::sync::{Arc, Mutex};

    fn config_with(yaml: &str) -> RequestConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn controller_over(
        store: Box<dyn SelectionStore>,
    ) -> (EnvironmentController, ChangeNotifier, MockStatus) {
        let notifier = ChangeNotifier::new();
        let status = MockStatus::new();
        let controller =
            EnvironmentController::new(store, notifier.clone(), Box::new(status.clone())).unwrap();
        (controller, notifier, status)
    }

    #[test]
    fn empty_store_self_heals_to_no_environment() {
        let (controller, _notifier, _status) = controller_over(Box::new(MemorySelectionStore::new()));

        let current = controller.current_environment().unwrap();
        assert_eq!(current.name, "NoEnvironmentSelectedName");
        assert_eq!(current.label, "No Environment");
    }

    #[test]
    fn current_environment_is_idempotent() {
        let (controller, _notifier, _status) = controller_over(Box::new(MemorySelectionStore::new()));

        let first = controller.current_environment().unwrap();
        let second = controller.current_environment().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn self_healing_write_happens_once() {
        let notifier = ChangeNotifier::new();
        let store = Arc::new(CountingStore::default());
        let controller = EnvironmentController::new(
            Box::new(SharedStore(Arc::clone(&store))),
            notifier,
            Box::new(MockStatus::new()),
        )
        .unwrap();

        controller.current_environment().unwrap();
        controller.current_environment().unwrap();

        // One write from construction's read, none after
        assert_eq!(*store.saves.lock().unwrap(), 1);
    }

    #[test]
    fn construction_shows_current_label_on_status() {
        let store = MemorySelectionStore::with_selection(EnvironmentSelection::named("prod"));
        let (_controller, _notifier, status) = controller_over(Box::new(store));
        assert_eq!(status.last_update().as_deref(), Some("prod"));
    }

    #[test]
    fn candidate_list_starts_with_no_environment_and_skips_shared() {
        let config = config_with(
            "environments:\n  dev: {}\n  prod: {}\n  $shared:\n    token: abc\n",
        );
        let current = EnvironmentSelection::no_environment();

        let candidates = candidate_list(&config, &current);

        let names: Vec<_> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec![NO_ENVIRONMENT_NAME, "dev", "prod"]);
    }

    #[test]
    fn candidate_matching_current_is_marked() {
        let config = config_with("environments:\n  dev: {}\n  prod: {}\n");
        let current = EnvironmentSelection::named("prod");

        let candidates = candidate_list(&config, &current);

        let marked: Vec<_> = candidates
            .iter()
            .filter(|c| c.description.as_deref() == Some(CURRENT_MARKER))
            .collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].name, "prod");
    }

    #[test]
    fn no_environment_keeps_reserved_text_when_current() {
        let config = config_with("environments:\n  dev: {}\n");
        let current = EnvironmentSelection::no_environment();

        let candidates = candidate_list(&config, &current);

        assert!(candidates[0].description.as_ref().unwrap().contains("$shared"));
        assert!(candidates
            .iter()
            .all(|c| c.description.as_deref() != Some(CURRENT_MARKER)));
    }

    #[test]
    fn empty_config_offers_only_no_environment() {
        let candidates = candidate_list(
            &RequestConfig::default(),
            &EnvironmentSelection::no_environment(),
        );
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_no_environment());
    }

    #[test]
    fn switch_persists_notifies_and_updates_status_in_order() {
        let store = Arc::new(CountingStore::default());
        let notifier = ChangeNotifier::new();
        let status = MockStatus::new();
        let mut controller = EnvironmentController::new(
            Box::new(SharedStore(Arc::clone(&store))),
            notifier.clone(),
            Box::new(status.clone()),
        )
        .unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = notifier.subscribe(move |label| sink.lock().unwrap().push(label.to_string()));

        let config = config_with("environments:\n  dev: {}\n  prod: {}\n");
        let mut picker = MockPicker::choosing("prod");

        let chosen = controller
            .switch_environment(&config, &mut picker)
            .unwrap()
            .unwrap();

        assert_eq!(chosen.name, "prod");
        assert_eq!(*seen.lock().unwrap(), vec!["prod".to_string()]);
        assert_eq!(status.last_update().as_deref(), Some("prod"));
        assert_eq!(
            controller.current_environment().unwrap(),
            EnvironmentSelection::named("prod")
        );
    }

    #[test]
    fn cancel_changes_nothing() {
        let store = MemorySelectionStore::with_selection(EnvironmentSelection::named("dev"));
        let notifier = ChangeNotifier::new();
        let status = MockStatus::new();
        let mut controller = EnvironmentController::new(
            Box::new(store),
            notifier.clone(),
            Box::new(status.clone()),
        )
        .unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = notifier.subscribe(move |label| sink.lock().unwrap().push(label.to_string()));

        let updates_before = status.updates().len();
        let config = config_with("environments:\n  dev: {}\n  prod: {}\n");
        let mut picker = MockPicker::cancelling();

        let outcome = controller.switch_environment(&config, &mut picker).unwrap();

        assert!(outcome.is_none());
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(status.updates().len(), updates_before);
        assert_eq!(
            controller.current_environment().unwrap(),
            EnvironmentSelection::named("dev")
        );
    }

    #[test]
    fn switching_to_no_environment_is_allowed() {
        let store = MemorySelectionStore::with_selection(EnvironmentSelection::named("prod"));
        let (mut controller, _notifier, status) = controller_over(Box::new(store));

        let config = config_with("environments:\n  prod: {}\n");
        let mut picker = MockPicker::choosing(NO_ENVIRONMENT_NAME);

        let chosen = controller
            .switch_environment(&config, &mut picker)
            .unwrap()
            .unwrap();

        assert!(chosen.is_no_environment());
        assert_eq!(status.last_update().as_deref(), Some("No Environment"));
        assert!(controller
            .current_environment()
            .unwrap()
            .is_no_environment());
    }

    #[test]
    fn drop_releases_status_but_not_notifier() {
        let notifier = ChangeNotifier::new();
        let status = MockStatus::new();
        let _sub = notifier.subscribe(|_| {});
        {
            let _controller = EnvironmentController::new(
                Box::new(MemorySelectionStore::new()),
                notifier.clone(),
                Box::new(status.clone()),
            )
            .unwrap();
            assert!(!status.is_released());
        }
        assert!(status.is_released());
        assert_eq!(notifier.subscriber_count(), 1);
    }

    #[test]
    fn picker_sees_switch_prompt() {
        let (mut controller, _notifier, _status) =
            controller_over(Box::new(MemorySelectionStore::new()));
        let mut picker = MockPicker::cancelling();

        controller
            .switch_environment(&RequestConfig::default(), &mut picker)
            .unwrap();

        assert_eq!(picker.prompts_shown(), [SWITCH_PROMPT]);
    }

    /// Store wrapper counting writes, shareable with the test body.
    #[derive(Default)]
    struct CountingStore {
        current: Mutex<Option<EnvironmentSelection>>,
        saves: Mutex<usize>,
    }

    struct SharedStore(Arc<CountingStore>);

    impl SelectionStore for SharedStore {
        fn load_environment(&self) -> Result<Option<EnvironmentSelection>> {
            Ok(self.0.current.lock().unwrap().clone())
        }

        fn save_environment(&self, selection: &EnvironmentSelection) -> Result<()> {
            *self.0.current.lock().unwrap() = Some(selection.clone());
            *self.0.saves.lock().unwrap() += 1;
            Ok(())
        }
    }
}

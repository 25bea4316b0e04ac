//! Controller Integration Tests
//!
//! Drives PickerController and the dispatch helpers with in-memory
//! collaborators.

#[cfg(test)]
mod tests {
    use crate::{
        begin_window_drag, CatalogKind, Item, ItemCatalog, Notifier, PasteDispatcher, PasteTarget,
        PickerConfig, PickerController, PickerError, PickerResult, WindowDrag,
        DEFAULT_PASTE_FAILURE_MESSAGE,
    };
    use async_trait::async_trait;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Clone, Copy, PartialEq)]
    enum Behavior {
        Accept,
        Reject,
        Hang,
    }

    #[derive(Clone)]
    struct FakePaste {
        behavior: Rc<Cell<Behavior>>,
        pasted: Rc<RefCell<Vec<String>>>,
    }

    impl FakePaste {
        fn new(behavior: Behavior) -> Self {
            Self {
                behavior: Rc::new(Cell::new(behavior)),
                pasted: Rc::new(RefCell::new(Vec::new())),
            }
        }
    }

    #[async_trait(?Send)]
    impl PasteTarget for FakePaste {
        async fn paste(&self, text: &str) -> PickerResult<()> {
            self.pasted.borrow_mut().push(text.to_string());
            match self.behavior.get() {
                Behavior::Accept => Ok(()),
                Behavior::Reject => Err(PickerError::PasteFailed("target rejected".to_string())),
                Behavior::Hang => std::future::pending().await,
            }
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        messages: Rc<RefCell<Vec<String>>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    struct FakeWindow {
        fail: bool,
        calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl WindowDrag for FakeWindow {
        async fn begin_drag(&self) -> PickerResult<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(PickerError::DragFailed("no window manager".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn catalog() -> ItemCatalog {
        ItemCatalog::new(
            CatalogKind::Kaomoji,
            vec![
                Item::new("1", "(^_^)", "Happy"),
                Item::new("2", "(T_T)", "Sad"),
                Item::new("3", "ʕ•ᴥ•ʔ", "Animals").with_name("Bear"),
            ],
        )
        .expect("valid catalog")
    }

    fn setup(behavior: Behavior) -> (PickerController<FakePaste, RecordingNotifier>, FakePaste, RecordingNotifier) {
        let paste = FakePaste::new(behavior);
        let notifier = RecordingNotifier::default();
        let controller = PickerController::new(catalog(), paste.clone(), notifier.clone());
        (controller, paste, notifier)
    }

    #[tokio::test]
    async fn test_select_pastes_and_records() {
        let (controller, paste, notifier) = setup(Behavior::Accept);
        let item = controller.catalog().get("2").cloned().unwrap();

        controller.select(item.clone()).await.expect("paste should succeed");

        assert_eq!(*paste.pasted.borrow(), vec!["(T_T)".to_string()]);
        assert_eq!(controller.recents(), vec![item]);
        assert!(notifier.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_rejected_paste_notifies_once_and_keeps_state() {
        let (mut controller, _paste, notifier) = setup(Behavior::Reject);
        controller.set_search("t_t");
        let item = controller.results()[0].clone();

        let result = controller.select(item).await;

        assert!(matches!(result, Err(PickerError::PasteFailed(_))));
        assert_eq!(*notifier.messages.borrow(), vec![DEFAULT_PASTE_FAILURE_MESSAGE.to_string()]);
        assert!(controller.recents().is_empty());
        assert_eq!(controller.search(), "t_t");
    }

    #[tokio::test]
    async fn test_failure_then_success() {
        let (controller, paste, notifier) = setup(Behavior::Reject);
        let item = controller.catalog().get("1").cloned().unwrap();

        assert!(controller.select(item.clone()).await.is_err());
        paste.behavior.set(Behavior::Accept);
        assert!(controller.select(item.clone()).await.is_ok());

        assert_eq!(paste.pasted.borrow().len(), 2);
        assert_eq!(notifier.messages.borrow().len(), 1);
        assert_eq!(controller.recents(), vec![item]);
    }

    #[tokio::test]
    async fn test_pending_select_does_not_block_input() {
        let (mut controller, _paste, _notifier) = setup(Behavior::Hang);
        let item = controller.catalog().get("3").cloned().unwrap();

        let pending = controller.select(item.clone());
        controller.set_search("bear");
        controller.set_category(Some("Animals".to_string()));

        assert_eq!(controller.results(), vec![item]);
        let outcome = tokio::time::timeout(Duration::from_millis(20), pending).await;
        assert!(outcome.is_err());
        assert_eq!(controller.search(), "bear");
    }

    #[tokio::test]
    async fn test_successful_paste_resets_view() {
        let (mut controller, _paste, _notifier) = setup(Behavior::Accept);
        controller.set_search("bear");
        controller.set_category(Some("Animals".to_string()));
        let item = controller.results()[0].clone();
        controller.set_hovered(Some(item.clone()));

        controller.select(item.clone()).await.unwrap();

        assert_eq!(controller.search(), "");
        assert_eq!(controller.category(), None);
        assert!(controller.hovered().is_none());
        assert!(controller.show_recents());
        assert_eq!(controller.recents(), vec![item]);
        assert_eq!(controller.results().len(), 3);
    }

    #[tokio::test]
    async fn test_reset_after_paste_can_be_disabled() {
        let config = PickerConfig { reset_after_paste: false, ..PickerConfig::default() };
        let mut controller = PickerController::with_config(
            catalog(),
            FakePaste::new(Behavior::Accept),
            RecordingNotifier::default(),
            &config,
        );
        controller.set_search("t_t");
        let item = controller.results()[0].clone();

        controller.select(item.clone()).await.unwrap();

        assert_eq!(controller.search(), "t_t");
        assert_eq!(controller.results(), vec![item.clone()]);
        assert_eq!(controller.recents(), vec![item]);
    }

    #[tokio::test]
    async fn test_overlapping_selects_are_independent() {
        let (controller, paste, _notifier) = setup(Behavior::Accept);
        let first = controller.catalog().get("1").cloned().unwrap();
        let second = controller.catalog().get("2").cloned().unwrap();

        let (a, b) = tokio::join!(controller.select(first.clone()), controller.select(second.clone()));
        assert!(a.is_ok() && b.is_ok());

        assert_eq!(paste.pasted.borrow().len(), 2);
        assert_eq!(controller.recents(), vec![second, first]);
    }

    #[tokio::test]
    async fn test_unresolved_paste_never_records() {
        let (controller, _paste, notifier) = setup(Behavior::Hang);
        let item = controller.catalog().get("1").cloned().unwrap();

        let outcome = tokio::time::timeout(Duration::from_millis(20), controller.select(item)).await;

        assert!(outcome.is_err());
        assert!(controller.recents().is_empty());
        assert!(notifier.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_recents_visibility_follows_filter() {
        let (mut controller, _paste, _notifier) = setup(Behavior::Accept);
        assert!(controller.show_recents());

        controller.set_search("bear");
        assert!(!controller.show_recents());

        controller.set_search("");
        controller.set_category(Some("Sad".to_string()));
        assert!(!controller.show_recents());
        assert_eq!(controller.category().as_deref(), Some("Sad"));

        controller.set_hovered(controller.catalog().get("2").cloned());
        controller.reset();
        assert!(controller.show_recents());
        assert!(controller.hovered().is_none());
        assert_eq!(controller.results().len(), 3);
    }

    #[tokio::test]
    async fn test_config_limits_recents() {
        let config = PickerConfig {
            recent_cap: 2,
            recent_display_limit: 1,
            paste_failure_message: "nope".to_string(),
            ..PickerConfig::default()
        };
        let notifier = RecordingNotifier::default();
        let controller =
            PickerController::with_config(catalog(), FakePaste::new(Behavior::Accept), notifier, &config);

        for id in ["1", "2", "3"] {
            let item = controller.catalog().get(id).cloned().unwrap();
            controller.select(item).await.unwrap();
        }

        assert_eq!(controller.recents().len(), 1);
        assert_eq!(controller.recents()[0].id, "3");
    }

    #[tokio::test]
    async fn test_custom_failure_message() {
        let notifier = RecordingNotifier::default();
        let dispatcher =
            PasteDispatcher::with_failure_message(FakePaste::new(Behavior::Reject), notifier.clone(), "nope");

        let item = Item::new("x", "★", "Stars");
        assert!(dispatcher.paste(&item).await.is_err());
        assert_eq!(*notifier.messages.borrow(), vec!["nope".to_string()]);
    }

    #[tokio::test]
    async fn test_drag_failure_is_swallowed() {
        let window = FakeWindow { fail: true, calls: Cell::new(0) };
        begin_window_drag(&window).await;
        begin_window_drag(&window).await;
        assert_eq!(window.calls.get(), 2);

        let window = FakeWindow { fail: false, calls: Cell::new(0) };
        begin_window_drag(&window).await;
        assert_eq!(window.calls.get(), 1);
    }
}

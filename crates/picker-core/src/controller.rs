//! Picker Controller
//!
//! Composes catalog filtering, recents and paste dispatch into the single
//! state unit a picker view binds to.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use crate::catalog::ItemCatalog;
use crate::config::PickerConfig;
use crate::dispatch::{Notifier, PasteDispatcher, PasteTarget};
use crate::entity::PickerResult;
use crate::filter::FilterState;
use crate::item::Item;
use crate::recency::RecencyTracker;

/// View state a successful paste may clear
#[derive(Debug, Default)]
struct ViewState {
    filter: FilterState,
    hovered: Option<Item>,
}

impl ViewState {
    fn reset(&mut self) {
        *self = ViewState::default();
    }
}

pub struct PickerController<P, N> {
    catalog: ItemCatalog,
    /// Search, category and hover; shared with in-flight selections
    view: Rc<RefCell<ViewState>>,
    /// Shared with in-flight selections
    recents: Rc<RefCell<RecencyTracker<Item>>>,
    dispatcher: Rc<PasteDispatcher<P, N>>,
    recent_display_limit: usize,
    reset_after_paste: bool,
}

impl<P, N> PickerController<P, N>
where
    P: PasteTarget + 'static,
    N: Notifier + 'static,
{
    pub fn new(catalog: ItemCatalog, target: P, notifier: N) -> Self {
        Self::with_config(catalog, target, notifier, &PickerConfig::default())
    }

    pub fn with_config(catalog: ItemCatalog, target: P, notifier: N, config: &PickerConfig) -> Self {
        let dispatcher =
            PasteDispatcher::with_failure_message(target, notifier, config.paste_failure_message.clone());
        Self {
            catalog,
            view: Rc::new(RefCell::new(ViewState::default())),
            recents: Rc::new(RefCell::new(RecencyTracker::new(config.recent_cap))),
            dispatcher: Rc::new(dispatcher),
            recent_display_limit: config.recent_display_limit,
            reset_after_paste: config.reset_after_paste,
        }
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn search(&self) -> String {
        self.view.borrow().filter.search_query.clone()
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.view.borrow_mut().filter.search_query = text.into();
    }

    pub fn category(&self) -> Option<String> {
        self.view.borrow().filter.selected_category.clone()
    }

    /// `None` selects "All"
    pub fn set_category(&mut self, category: Option<String>) {
        self.view.borrow_mut().filter.selected_category = category;
    }

    /// Back to the default view: empty search, "All" tab, nothing hovered
    pub fn reset(&mut self) {
        self.view.borrow_mut().reset();
    }

    /// Current filtered list
    pub fn results(&self) -> Vec<Item> {
        self.view.borrow().filter.apply(&self.catalog).into_iter().cloned().collect()
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories().into_iter().map(str::to_string).collect()
    }

    pub fn recents(&self) -> Vec<Item> {
        self.recents.borrow().recents(self.recent_display_limit)
    }

    pub fn show_recents(&self) -> bool {
        self.view.borrow().filter.is_default_view()
    }

    pub fn hovered(&self) -> Option<Item> {
        self.view.borrow().hovered.clone()
    }

    pub fn set_hovered(&mut self, item: Option<Item>) {
        self.view.borrow_mut().hovered = item;
    }

    /// Paste `item`, then remember it on success and, unless configured
    /// otherwise, return to the default view for the next pick.
    ///
    /// The returned future owns everything it touches, so the view can fire
    /// it and keep handling input. Overlapping selections are independent.
    /// A failed paste leaves the view untouched.
    pub fn select(&self, item: Item) -> impl Future<Output = PickerResult<()>> + 'static {
        let dispatcher = Rc::clone(&self.dispatcher);
        let recents = Rc::clone(&self.recents);
        let view = Rc::clone(&self.view);
        let reset_after_paste = self.reset_after_paste;

        async move {
            dispatcher.paste(&item).await?;
            recents.borrow_mut().record_use(item);
            if reset_after_paste {
                view.borrow_mut().reset();
            }
            Ok(())
        }
    }
}

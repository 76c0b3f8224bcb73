//! Keeps the detail overlay and the current path in sync
//!
//! The [`Navigator`] is an explicit state machine fed through a FIFO event
//! queue. It owns the current path and the [`NavigationState`], and answers
//! every event with zero or more [`Effect`]s for the host to carry out.
//!
//! # Workflow
//!
//! ```text
//! Mount(path)
//!     ├─ /country/city resolves → select + open, Navigate(canonical) if not canonical
//!     ├─ /country/city misses   → NotFound
//!     ├─ /a/b/c...              → Navigate("/")
//!     └─ anything else          → nothing
//!         ↓
//! Open(id)  → select + open → Navigate(canonical detail path) unless already there
//! Close     → stay on a valid country page, otherwise Navigate("/")
//! ```
//!
//! Events dispatched before `Mount` wait in the queue and run right after
//! it, so a deep link is never torn down by an early close redirect.

mod error;
mod events;
mod route;

pub use error::NavigationError;
pub use events::{Effect, NavEvent};
pub use route::{Route, StaticPage};

use crate::IconRecord;
use crate::catalog::Catalog;
use crate::search::compute_visible;
use crate::slug::{country_by_slug, find_icon_by_slugs, icon_path};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Per-session view state
///
/// `overlay_open` implies `selected` is set. A closed overlay may keep a
/// stale selection; it is not shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Identifier of the selected record
    pub selected: Option<String>,
    pub overlay_open: bool,
    pub last_query: String,
    pub last_region: Option<String>,
}

/// Navigation state machine over a catalog
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    path: String,
    state: NavigationState,
    mounted: bool,
    queue: VecDeque<NavEvent>,
}

impl Navigator {
    /// Create an unmounted navigator at `/`
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            path: "/".to_string(),
            state: NavigationState::default(),
            mounted: false,
            queue: VecDeque::new(),
        }
    }

    /// Queue an event without processing it
    pub fn dispatch(&mut self, event: NavEvent) {
        self.queue.push_back(event);
    }

    /// Process queued events in order and collect the resulting effects
    ///
    /// Before a `Mount` has been seen, the first queued `Mount` is processed
    /// ahead of everything else. With no `Mount` queued, nothing runs.
    pub fn run(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();

        if !self.mounted {
            let Some(index) = self.queue.iter().position(|e| matches!(e, NavEvent::Mount(_))) else {
                return effects;
            };
            if let Some(mount) = self.queue.remove(index) {
                self.apply(mount, &mut effects);
            }
        }

        while let Some(event) = self.queue.pop_front() {
            self.apply(event, &mut effects);
        }
        effects
    }

    /// Dispatch one event and process the queue
    pub fn handle(&mut self, event: NavEvent) -> Vec<Effect> {
        self.dispatch(event);
        self.run()
    }

    /// Current path
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.path
    }

    /// Current route
    #[must_use]
    pub fn route(&self) -> Route {
        Route::parse(&self.path)
    }

    /// Current view state
    #[must_use]
    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    /// True once first-mount initialisation has run
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of events waiting in the queue
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The catalog being navigated
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The selected record, if any
    #[must_use]
    pub fn selected_record(&self) -> Option<&IconRecord> {
        self.state.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    /// The record shown in the overlay, if it is open
    #[must_use]
    pub fn overlay_record(&self) -> Option<&IconRecord> {
        if self.state.overlay_open {
            self.selected_record()
        } else {
            None
        }
    }

    /// Display name of the country scoping the current page
    #[must_use]
    pub fn country_scope(&self) -> Option<&str> {
        match self.route() {
            Route::Country(slug) => country_by_slug(self.catalog.records(), &slug),
            _ => None,
        }
    }

    /// The listing for the current page, query and region
    #[must_use]
    pub fn visible(&self) -> Vec<&IconRecord> {
        compute_visible(
            self.catalog.records(),
            self.country_scope(),
            self.state.last_region.as_deref(),
            &self.state.last_query,
        )
    }

    fn apply(&mut self, event: NavEvent, effects: &mut Vec<Effect>) {
        debug!(?event, path = %self.path, "navigation event");
        match event {
            NavEvent::Mount(path) => self.on_mount(path, effects),
            NavEvent::PathChanged(path) => self.on_path_changed(path, effects),
            NavEvent::Open(id) => self.on_open(&id, effects),
            NavEvent::Close => self.on_close(effects),
            NavEvent::Query(query) => self.on_query(query),
            NavEvent::RegionClick(region) => self.on_region_click(region),
            NavEvent::ClearRegion => self.state.last_region = None,
        }
    }

    fn on_mount(&mut self, path: String, effects: &mut Vec<Effect>) {
        if self.mounted {
            warn!(%path, "navigator already mounted; treating as path change");
            self.on_path_changed(path, effects);
            return;
        }

        self.path = path;
        self.mounted = true;
        self.enter_current_path(effects);
    }

    fn on_path_changed(&mut self, path: String, effects: &mut Vec<Effect>) {
        self.path = path;
        self.state.overlay_open = false;
        self.enter_current_path(effects);
    }

    /// Derive the overlay state from the path
    ///
    /// Valid pages are not redirected, except that a detail path is rewritten
    /// to its canonical form.
    fn enter_current_path(&mut self, effects: &mut Vec<Effect>) {
        match self.route() {
            Route::Detail { country, city } => {
                match find_icon_by_slugs(self.catalog.records(), &country, &city) {
                    Some(record) => {
                        let target = icon_path(record);
                        self.state.selected = Some(record.id.clone());
                        self.state.overlay_open = true;
                        if self.path != target {
                            self.redirect(&target, effects);
                        }
                    }
                    None => effects.push(Effect::NotFound(self.path.clone())),
                }
            }
            Route::Country(slug) if !self.catalog.has_country_slug(&slug) => {
                effects.push(Effect::NotFound(self.path.clone()));
            }
            Route::Malformed => self.redirect("/", effects),
            Route::Root | Route::Static(_) | Route::Country(_) => {}
        }
    }

    fn on_open(&mut self, id: &str, effects: &mut Vec<Effect>) {
        let Some(record) = self.catalog.get(id) else {
            warn!(%id, "ignoring open for unknown icon");
            return;
        };
        let target = icon_path(record);

        self.state.selected = Some(id.to_string());
        self.state.overlay_open = true;

        if self.route() != Route::parse(&target) {
            self.redirect(&target, effects);
        }
    }

    fn on_close(&mut self, effects: &mut Vec<Effect>) {
        if !self.state.overlay_open {
            return;
        }
        self.state.overlay_open = false;

        let on_country_page =
            matches!(self.route(), Route::Country(slug) if self.catalog.has_country_slug(&slug));
        if !on_country_page && self.path != "/" {
            self.redirect("/", effects);
        }
    }

    fn on_query(&mut self, query: String) {
        if query.trim() == self.state.last_query.trim() {
            return;
        }
        self.state.last_query = query;
    }

    fn on_region_click(&mut self, region: String) {
        if self.state.last_region.as_deref() == Some(region.as_str()) {
            self.state.last_region = None;
        } else {
            self.state.last_region = Some(region);
        }
    }

    fn redirect(&mut self, path: &str, effects: &mut Vec<Effect>) {
        debug!(from = %self.path, to = %path, "redirect");
        self.path = path.to_string();
        effects.push(Effect::navigate(path));
    }
}

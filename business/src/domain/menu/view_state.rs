use super::model::MenuItem;

/// Fixed user-facing message shown when a menu fetch fails. The underlying
/// error is logged for diagnostics but never surfaced verbatim.
pub const MENU_FETCH_ERROR_MESSAGE: &str = "Failed to load menu. Please try again.";

/// Display state of the menu view.
///
/// `Loaded` with zero items is a valid terminal state ("no items
/// available") and is distinct from `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuViewState {
    Idle,
    Loading,
    Loaded(Vec<MenuItem>),
    Failed(String),
}

/// Identifies one in-flight menu fetch. A completion is applied only if
/// its ticket still matches the view's current generation and active
/// restaurant; anything else is a stale result and is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuFetchTicket {
    pub restaurant_id: String,
    pub generation: u64,
}

/// State machine for the menu view.
///
/// Every transition bumps a generation counter, so a fetch issued before
/// any later navigation (deselect, reselect, selecting another
/// restaurant) can no longer apply its result. There is no cancellation
/// of the fetch itself; only result application is gated.
#[derive(Debug)]
pub struct MenuView {
    state: MenuViewState,
    active_restaurant: Option<String>,
    generation: u64,
}

impl MenuView {
    pub fn new() -> Self {
        Self {
            state: MenuViewState::Idle,
            active_restaurant: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &MenuViewState {
        &self.state
    }

    pub fn active_restaurant(&self) -> Option<&str> {
        self.active_restaurant.as_deref()
    }

    /// Opens the view for a restaurant whose menu is not cached yet and
    /// returns the ticket the eventual fetch completion must present.
    pub fn open_loading(&mut self, restaurant_id: impl Into<String>) -> MenuFetchTicket {
        let restaurant_id = restaurant_id.into();
        self.generation += 1;
        self.active_restaurant = Some(restaurant_id.clone());
        self.state = MenuViewState::Loading;
        MenuFetchTicket {
            restaurant_id,
            generation: self.generation,
        }
    }

    /// Opens the view directly in `Loaded` from a cached menu, skipping
    /// the fetch entirely.
    pub fn open_cached(&mut self, restaurant_id: impl Into<String>, items: Vec<MenuItem>) {
        self.generation += 1;
        self.active_restaurant = Some(restaurant_id.into());
        self.state = MenuViewState::Loaded(items);
    }

    /// Deselects the restaurant and returns to `Idle`.
    pub fn close(&mut self) {
        self.generation += 1;
        self.active_restaurant = None;
        self.state = MenuViewState::Idle;
    }

    /// Applies a successful fetch result. Returns `false` (leaving the
    /// view untouched) when the ticket is stale.
    pub fn apply_success(&mut self, ticket: &MenuFetchTicket, items: Vec<MenuItem>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = MenuViewState::Loaded(items);
        true
    }

    /// Applies a failed fetch result. Returns `false` when the ticket is
    /// stale.
    pub fn apply_failure(&mut self, ticket: &MenuFetchTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = MenuViewState::Failed(MENU_FETCH_ERROR_MESSAGE.to_string());
        true
    }

    fn is_current(&self, ticket: &MenuFetchTicket) -> bool {
        ticket.generation == self.generation
            && self.active_restaurant.as_deref() == Some(ticket.restaurant_id.as_str())
    }
}

impl Default for MenuView {
    fn default() -> Self {
        Self::new()
    }
}

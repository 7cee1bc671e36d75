use std::sync::Arc;

use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::checkout::{CheckoutSummary, CheckoutUseCase};
use business::domain::logger::Logger;
use business::domain::menu::errors::MenuError;
use business::domain::menu::model::MenuItem;
use business::domain::menu::view_state::{MenuFetchTicket, MenuView, MenuViewState};
use business::domain::restaurant::catalog::CatalogProvider;
use business::domain::restaurant::model::Restaurant;

/// A menu fetch the caller still has to drive to completion. Produced by
/// `select_restaurant` on a cache miss; run the load use case for
/// `restaurant_name` and hand the outcome to `apply_menu_result` with the
/// ticket.
#[derive(Debug)]
pub struct MenuFetchRequest {
    pub ticket: MenuFetchTicket,
    pub restaurant_name: String,
}

/// The view shell: single owner of the restaurant list, menu view, cart,
/// and cart-visibility flag. All mutation funnels through intent methods
/// here; the session holds no business rules beyond delegation. The
/// session itself is synchronous — fetches run outside it and report back
/// through `apply_menu_result`.
pub struct StorefrontSession {
    restaurants: Vec<Restaurant>,
    menu_view: MenuView,
    cart: Cart,
    cart_open: bool,
    checkout: Arc<dyn CheckoutUseCase>,
    logger: Arc<dyn Logger>,
}

impl StorefrontSession {
    pub fn new(
        catalog: &dyn CatalogProvider,
        checkout: Arc<dyn CheckoutUseCase>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            restaurants: catalog.load(),
            menu_view: MenuView::new(),
            cart: Cart::new(),
            cart_open: false,
            checkout,
            logger,
        }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn menu_state(&self) -> &MenuViewState {
        self.menu_view.state()
    }

    pub fn selected_restaurant(&self) -> Option<&Restaurant> {
        let active = self.menu_view.active_restaurant()?;
        self.restaurants.iter().find(|r| r.id == active)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Opens the menu view for a restaurant. Serves a cached menu
    /// directly; otherwise transitions to `Loading` and returns the fetch
    /// the caller must drive. Unknown ids leave the view untouched.
    pub fn select_restaurant(&mut self, restaurant_id: &str) -> Option<MenuFetchRequest> {
        let restaurant = match self.restaurants.iter().find(|r| r.id == restaurant_id) {
            Some(r) => r,
            None => {
                self.logger
                    .warn(&format!("Unknown restaurant selected: {}", restaurant_id));
                return None;
            }
        };

        if let Some(items) = restaurant.cached_menu() {
            let items = items.to_vec();
            self.menu_view.open_cached(restaurant_id, items);
            return None;
        }

        let ticket = self.menu_view.open_loading(restaurant_id);
        Some(MenuFetchRequest {
            ticket,
            restaurant_name: restaurant.name.clone(),
        })
    }

    /// Applies a fetch outcome, gated on the ticket still matching the
    /// active selection. Returns whether the view was updated. Stale
    /// results are dropped entirely; in particular a stale success does
    /// not populate the cache.
    pub fn apply_menu_result(
        &mut self,
        ticket: &MenuFetchTicket,
        result: Result<Vec<MenuItem>, MenuError>,
    ) -> bool {
        match result {
            Ok(items) => {
                if self.menu_view.apply_success(ticket, items.clone()) {
                    if let Some(restaurant) = self
                        .restaurants
                        .iter_mut()
                        .find(|r| r.id == ticket.restaurant_id)
                    {
                        restaurant.cache_menu(items);
                    }
                    true
                } else {
                    self.logger.debug(&format!(
                        "Discarding stale menu result for restaurant {}",
                        ticket.restaurant_id
                    ));
                    false
                }
            }
            Err(_) => {
                // Already logged by the use case; the view gets the fixed
                // user-facing message.
                let applied = self.menu_view.apply_failure(ticket);
                if !applied {
                    self.logger.debug(&format!(
                        "Discarding stale menu failure for restaurant {}",
                        ticket.restaurant_id
                    ));
                }
                applied
            }
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_view.close();
    }

    pub fn add_to_cart(&mut self, item: MenuItem) {
        self.cart.add_item(item);
    }

    pub fn set_cart_quantity(&mut self, item_id: &str, quantity: i64) {
        self.cart.set_quantity(item_id, quantity);
    }

    pub fn remove_cart_line(&mut self, item_id: &str) {
        self.cart.remove_item(item_id);
    }

    /// Empties the cart and closes the cart view.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.cart_open = false;
    }

    /// Simulated order placement: pre-clear summary, then an empty cart
    /// and a closed cart view.
    pub fn checkout(&mut self) -> CheckoutSummary {
        let summary = self.checkout.execute(&mut self.cart);
        self.cart_open = false;
        summary
    }

    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }
}

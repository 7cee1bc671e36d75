use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use business::domain::cart::model::Cart;
use business::domain::menu::errors::MenuError;
use business::domain::menu::model::MenuItem;
use business::domain::menu::use_cases::load::{LoadMenuParams, LoadMenuUseCase};
use business::domain::menu::view_state::{MenuFetchTicket, MenuViewState};
use business::domain::restaurant::model::Restaurant;

use crate::session::StorefrontSession;
use crate::setup::dependency_injection::DependencyContainer;

type MenuFetchOutcome = (MenuFetchTicket, Result<Vec<MenuItem>, MenuError>);

pub struct Shell;

impl Shell {
    /// Line-oriented event loop: each command is one user intent. Menu
    /// fetches run as spawned tasks and report back over a channel, so
    /// the loop stays responsive while a fetch is outstanding and other
    /// intents (deselecting, opening the cart) can interleave; the
    /// session discards completions whose ticket is no longer current.
    pub async fn run(container: DependencyContainer) -> anyhow::Result<()> {
        let DependencyContainer {
            mut session,
            load_menu,
        } = container;

        println!("Campus Eats - on-campus food delivery");
        print_catalog(session.restaurants());
        print_help();

        let (fetch_tx, mut fetch_rx) = mpsc::unbounded_channel::<MenuFetchOutcome>();
        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    if !handle_command(&mut session, &load_menu, &fetch_tx, line.trim()) {
                        break;
                    }
                }
                Some((ticket, result)) = fetch_rx.recv() => {
                    if session.apply_menu_result(&ticket, result) {
                        print_menu(&session);
                    }
                }
            }
        }

        Ok(())
    }
}

/// Dispatches one typed intent. Returns `false` on quit.
fn handle_command(
    session: &mut StorefrontSession,
    load_menu: &Arc<dyn LoadMenuUseCase>,
    fetch_tx: &mpsc::UnboundedSender<MenuFetchOutcome>,
    input: &str,
) -> bool {
    if input.is_empty() {
        return true;
    }
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let arg = parts.next();

    match command {
        "list" => print_catalog(session.restaurants()),
        "menu" => match arg.and_then(|n| n.parse::<usize>().ok()) {
            Some(n) if n >= 1 && n <= session.restaurants().len() => {
                let id = session.restaurants()[n - 1].id.clone();
                match session.select_restaurant(&id) {
                    Some(request) => {
                        println!("Loading menu items...");
                        let load_menu = load_menu.clone();
                        let fetch_tx = fetch_tx.clone();
                        tokio::spawn(async move {
                            let result = load_menu
                                .execute(LoadMenuParams {
                                    restaurant_name: request.restaurant_name,
                                })
                                .await;
                            let _ = fetch_tx.send((request.ticket, result));
                        });
                    }
                    None => print_menu(session),
                }
            }
            _ => println!("Usage: menu <restaurant #>"),
        },
        "close" => {
            session.close_menu();
            println!("Menu closed.");
        }
        "add" => match selected_item(session, arg) {
            Some(item) => {
                println!("Added {} to cart.", item.name);
                session.add_to_cart(item);
                println!("Cart: {} items", session.cart().item_count());
            }
            None => println!("Usage: add <menu item #> (open a menu first)"),
        },
        "cart" => {
            session.open_cart();
            print_cart(session.cart());
        }
        "set" => {
            let quantity = parts.next().and_then(|q| q.parse::<i64>().ok());
            match (cart_line_id(session, arg), quantity) {
                (Some(id), Some(quantity)) => {
                    session.set_cart_quantity(&id, quantity);
                    print_cart(session.cart());
                }
                _ => println!("Usage: set <cart line #> <quantity>"),
            }
        }
        "rm" => match cart_line_id(session, arg) {
            Some(id) => {
                session.remove_cart_line(&id);
                print_cart(session.cart());
            }
            None => println!("Usage: rm <cart line #>"),
        },
        "close-cart" => {
            session.close_cart();
            println!("Cart closed.");
        }
        "clear" => {
            session.clear_cart();
            println!("Cart cleared!");
        }
        "checkout" => {
            let summary = session.checkout();
            println!(
                "Order placed for ${:.2} ({} items) at {}!",
                summary.total,
                summary.item_count,
                summary.placed_at.format("%H:%M:%S")
            );
        }
        "help" => print_help(),
        "quit" | "exit" => return false,
        _ => println!("Unknown command '{}'. Type 'help'.", command),
    }

    true
}

fn selected_item(session: &StorefrontSession, arg: Option<&str>) -> Option<MenuItem> {
    let n = arg?.parse::<usize>().ok()?;
    match session.menu_state() {
        MenuViewState::Loaded(items) => items.get(n.checked_sub(1)?).cloned(),
        _ => None,
    }
}

fn cart_line_id(session: &StorefrontSession, arg: Option<&str>) -> Option<String> {
    let n = arg?.parse::<usize>().ok()?;
    session
        .cart()
        .lines()
        .get(n.checked_sub(1)?)
        .map(|line| line.item.id.clone())
}

fn print_catalog(restaurants: &[Restaurant]) {
    println!("\nExplore On-Campus Eats");
    for (i, restaurant) in restaurants.iter().enumerate() {
        println!(
            "  {}. {} ({}) - {}",
            i + 1,
            restaurant.name,
            restaurant.cuisine,
            restaurant.description
        );
    }
}

fn print_menu(session: &StorefrontSession) {
    let name = session
        .selected_restaurant()
        .map(|r| r.name.as_str())
        .unwrap_or("?");
    match session.menu_state() {
        MenuViewState::Idle => println!("No restaurant selected."),
        MenuViewState::Loading => println!("Loading menu items..."),
        MenuViewState::Loaded(items) if items.is_empty() => {
            println!("{}: no menu items available for this restaurant.", name);
        }
        MenuViewState::Loaded(items) => {
            println!("\n{} Menu", name);
            for (i, item) in items.iter().enumerate() {
                println!(
                    "  {}. {} - ${:.2}\n     {}",
                    i + 1,
                    item.name,
                    item.price,
                    item.description
                );
            }
        }
        MenuViewState::Failed(message) => println!("{}", message),
    }
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    println!("\nYour Cart");
    for (i, line) in cart.lines().iter().enumerate() {
        println!(
            "  {}. {} x{} - ${:.2}",
            i + 1,
            line.item.name,
            line.quantity,
            line.subtotal()
        );
    }
    println!("  Total: ${:.2} ({} items)", cart.total(), cart.item_count());
}

fn print_help() {
    println!(
        "\nCommands:\n  \
         list                  show the restaurant list\n  \
         menu <#>              view a restaurant's menu\n  \
         close                 close the menu\n  \
         add <#>               add a menu item to the cart\n  \
         cart                  open the cart\n  \
         close-cart            close the cart view\n  \
         set <#> <qty>         change a cart line's quantity\n  \
         rm <#>                remove a cart line\n  \
         clear                 clear the cart\n  \
         checkout              place the simulated order\n  \
         quit                  exit"
    );
}

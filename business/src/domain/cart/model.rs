use crate::domain::menu::model::MenuItem;

/// One (item, quantity) pairing in the cart. Quantity is at least 1 for
/// as long as the line exists; a transition to zero removes the line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// The shopping cart: an insertion-ordered sequence of lines, at most one
/// per item id. All operations are synchronous and total; totals are
/// derived on read rather than maintained incrementally.
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds one unit of `item`: increments the existing line if present,
    /// otherwise appends a new line with quantity 1.
    pub fn add_item(&mut self, item: MenuItem) {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine { item, quantity: 1 }),
        }
    }

    /// Sets the quantity of an existing line. A quantity of zero or less
    /// removes the line. Absent ids are a no-op: quantity changes never
    /// create lines.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(item_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item_id) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Deletes the line for `item_id` if present.
    pub fn remove_item(&mut self, item_id: &str) {
        self.lines.retain(|line| line.item.id != item_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines; 0 for an empty cart.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of quantities over all lines; drives the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, price: f64) -> MenuItem {
        MenuItem::new(id, format!("Item {}", id), "", price).unwrap()
    }

    #[test]
    fn should_start_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn should_keep_one_line_per_item_with_additive_quantity() {
        let mut cart = Cart::new();

        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a1", 10.0));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn should_preserve_insertion_order() {
        let mut cart = Cart::new();

        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a2", 5.0));
        cart.add_item(item("a1", 10.0));

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[test]
    fn should_compute_total_over_lines() {
        let mut cart = Cart::new();
        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a2", 5.0));

        assert_eq!(cart.total(), 25.0);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn should_update_quantity_and_remove_lines() {
        let mut cart = Cart::new();
        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a2", 5.0));

        cart.set_quantity("a1", 1);
        assert_eq!(cart.total(), 15.0);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.remove_item("a2");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.total(), 10.0);
    }

    #[test]
    fn should_remove_line_when_quantity_zero_or_negative() {
        let mut cart = Cart::new();
        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a2", 5.0));

        cart.set_quantity("a1", 0);
        cart.set_quantity("a2", -3);

        assert!(cart.is_empty());
    }

    #[test]
    fn should_not_create_line_for_unknown_id() {
        let mut cart = Cart::new();

        cart.set_quantity("ghost", 4);

        assert!(cart.is_empty());
    }

    #[test]
    fn should_ignore_remove_of_absent_id() {
        let mut cart = Cart::new();
        cart.add_item(item("a1", 10.0));

        cart.remove_item("ghost");

        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn should_clear_all_lines() {
        let mut cart = Cart::new();
        cart.add_item(item("a1", 10.0));
        cart.add_item(item("a2", 5.0));

        cart.clear();

        assert_eq!(cart.total(), 0.0);
        assert_eq!(cart.item_count(), 0);
    }

    #[derive(Debug, Clone)]
    enum CartOp {
        Add(u8),
        SetQuantity(u8, i64),
        Remove(u8),
        Clear,
    }

    fn cart_op() -> impl Strategy<Value = CartOp> {
        prop_oneof![
            (0u8..5).prop_map(CartOp::Add),
            ((0u8..5), -2i64..10).prop_map(|(id, q)| CartOp::SetQuantity(id, q)),
            (0u8..5).prop_map(CartOp::Remove),
            Just(CartOp::Clear),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_op_sequence(ops in proptest::collection::vec(cart_op(), 0..40)) {
            let mut cart = Cart::new();

            for op in ops {
                match op {
                    CartOp::Add(n) => cart.add_item(item(&format!("i{}", n), f64::from(n) + 1.0)),
                    CartOp::SetQuantity(n, q) => cart.set_quantity(&format!("i{}", n), q),
                    CartOp::Remove(n) => cart.remove_item(&format!("i{}", n)),
                    CartOp::Clear => cart.clear(),
                }

                // At most one line per item id.
                let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), cart.lines().len());

                // Quantities stay positive while the line exists.
                prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));

                // Derived values agree with the lines.
                let expected_total: f64 = cart.lines().iter().map(CartLine::subtotal).sum();
                prop_assert_eq!(cart.total(), expected_total);
                let expected_count: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
                prop_assert_eq!(cart.item_count(), expected_count);
            }
        }
    }
}

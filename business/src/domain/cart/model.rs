use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::CartError;
use crate::domain::shared::value_objects::{Money, UserId};

/// A line entry linking a cart to a product with a locked-in unit price.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub price_per_item: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(cart_id: Uuid, product_id: Uuid, quantity: i32, price_per_item: Money) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            cart_id,
            product_id,
            quantity,
            price_per_item,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
        price_per_item: Money,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            cart_id,
            product_id,
            quantity,
            price_per_item,
            created_at,
            updated_at,
        }
    }

    pub fn subtotal(&self) -> Money {
        self.price_per_item.times(self.quantity)
    }

    fn checked_subtotal(&self) -> Option<Money> {
        self.price_per_item.checked_times(self.quantity)
    }
}

/// A user's in-progress collection of selected products.
///
/// `total_price` always equals the sum of item subtotals: every mutator
/// recomputes it before returning.
#[derive(Debug, Clone)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: UserId,
    pub total_price: Money,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            total_price: Money::ZERO,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        total_price: Money,
        items: Vec<CartItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            total_price,
            items,
            created_at,
            updated_at,
        }
    }

    pub fn item(&self, item_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn item_for_product(&self, product_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Adds `quantity` units of a product. An existing line for the same
    /// product is merged and keeps its original unit price.
    pub fn add_item(
        &mut self,
        product_id: Uuid,
        quantity: i32,
        unit_price: Money,
    ) -> Result<CartItem, CartError> {
        let now = Utc::now();
        let item = match self.items.iter().position(|i| i.product_id == product_id) {
            Some(index) => {
                let mut merged = self.items[index].clone();
                merged.quantity = merged
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::QuantityLimitExceeded)?;
                merged.updated_at = now;
                self.ensure_total_fits(Some(index), &merged)?;
                self.items[index] = merged.clone();
                merged
            }
            None => {
                let item = CartItem::new(self.id, product_id, quantity, unit_price);
                self.ensure_total_fits(None, &item)?;
                self.items.push(item.clone());
                item
            }
        };
        self.refresh(now);
        Ok(item)
    }

    /// Changes an item's quantity by `delta`. An item whose quantity drops to
    /// zero is removed from the cart and returned with quantity 0.
    pub fn change_item_quantity(
        &mut self,
        item_id: Uuid,
        delta: i32,
    ) -> Result<CartItem, CartError> {
        let now = Utc::now();
        let index = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(CartError::ItemNotFound)?;

        let new_quantity = self.items[index]
            .quantity
            .checked_add(delta)
            .ok_or(CartError::QuantityLimitExceeded)?;
        if new_quantity < 0 {
            return Err(CartError::InvalidQuantity);
        }

        let item = if new_quantity == 0 {
            let mut removed = self.items.remove(index);
            removed.quantity = 0;
            removed.updated_at = now;
            removed
        } else {
            let mut changed = self.items[index].clone();
            changed.quantity = new_quantity;
            changed.updated_at = now;
            self.ensure_total_fits(Some(index), &changed)?;
            self.items[index] = changed.clone();
            changed
        };
        self.refresh(now);
        Ok(item)
    }

    pub fn remove_item(&mut self, item_id: Uuid) -> Result<CartItem, CartError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or(CartError::ItemNotFound)?;
        let item = self.items.remove(index);
        self.refresh(Utc::now());
        Ok(item)
    }

    /// Empties the cart, returning the removed items.
    pub fn clear(&mut self) -> Vec<CartItem> {
        let removed = std::mem::take(&mut self.items);
        self.refresh(Utc::now());
        removed
    }

    pub fn computed_total(&self) -> Money {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Checks that the cart total, with `candidate` replacing the item at
    /// `replaced` (or appended), stays within `Money::MAX`.
    fn ensure_total_fits(
        &self,
        replaced: Option<usize>,
        candidate: &CartItem,
    ) -> Result<(), CartError> {
        self.items
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != replaced)
            .map(|(_, item)| item)
            .chain(std::iter::once(candidate))
            .try_fold(Money::ZERO, |total, item| {
                item.checked_subtotal()
                    .and_then(|subtotal| total.checked_add(subtotal))
            })
            .filter(|total| !total.exceeds_max())
            .map(|_| ())
            .ok_or(CartError::QuantityLimitExceeded)
    }

    fn refresh(&mut self, now: DateTime<Utc>) {
        self.total_price = self.computed_total();
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Cart {
        Cart::new(UserId::generate())
    }

    #[test]
    fn should_start_empty_with_zero_total() {
        let cart = cart();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total_price, Money::ZERO);
    }

    #[test]
    fn should_add_new_item_and_update_total() {
        let mut cart = cart();
        let product_id = Uuid::new_v4();

        let item = cart.add_item(product_id, 2, Money::from_cents(1500)).unwrap();

        assert_eq!(item.quantity, 2);
        assert_eq!(item.cart_id, cart.id);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_price, Money::from_cents(3000));
    }

    #[test]
    fn should_merge_quantities_when_adding_same_product_twice() {
        let mut cart = cart();
        let product_id = Uuid::new_v4();

        let first = cart.add_item(product_id, 1, Money::from_cents(1000)).unwrap();
        let second = cart.add_item(product_id, 3, Money::from_cents(1000)).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 4);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_price, Money::from_cents(4000));
    }

    #[test]
    fn should_keep_locked_unit_price_when_merging() {
        let mut cart = cart();
        let product_id = Uuid::new_v4();

        cart.add_item(product_id, 1, Money::from_cents(800)).unwrap();
        let merged = cart.add_item(product_id, 1, Money::from_cents(1000)).unwrap();

        assert_eq!(merged.price_per_item, Money::from_cents(800));
        assert_eq!(cart.total_price, Money::from_cents(1600));
    }

    #[test]
    fn should_increase_item_quantity() {
        let mut cart = cart();
        let item = cart.add_item(Uuid::new_v4(), 1, Money::from_cents(250)).unwrap();

        let updated = cart.change_item_quantity(item.id, 1).unwrap();

        assert_eq!(updated.quantity, 2);
        assert_eq!(cart.total_price, Money::from_cents(500));
    }

    #[test]
    fn should_remove_item_when_quantity_reaches_zero() {
        let mut cart = cart();
        let item = cart.add_item(Uuid::new_v4(), 1, Money::from_cents(250)).unwrap();

        let updated = cart.change_item_quantity(item.id, -1).unwrap();

        assert_eq!(updated.quantity, 0);
        assert!(cart.item(item.id).is_none());
        assert_eq!(cart.total_price, Money::ZERO);
    }

    #[test]
    fn should_reject_quantity_change_for_unknown_item() {
        let mut cart = cart();
        let result = cart.change_item_quantity(Uuid::new_v4(), 1);
        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[test]
    fn should_reject_quantity_below_zero() {
        let mut cart = cart();
        let item = cart.add_item(Uuid::new_v4(), 1, Money::from_cents(250)).unwrap();
        let result = cart.change_item_quantity(item.id, -2);
        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
        assert_eq!(cart.item(item.id).map(|i| i.quantity), Some(1));
    }

    #[test]
    fn should_remove_item_and_recompute_total() {
        let mut cart = cart();
        let keep = cart.add_item(Uuid::new_v4(), 2, Money::from_cents(100)).unwrap();
        let drop = cart.add_item(Uuid::new_v4(), 1, Money::from_cents(900)).unwrap();

        let removed = cart.remove_item(drop.id).unwrap();

        assert_eq!(removed.id, drop.id);
        assert!(cart.item(keep.id).is_some());
        assert_eq!(cart.total_price, Money::from_cents(200));
    }

    #[test]
    fn should_clear_all_items() {
        let mut cart = cart();
        cart.add_item(Uuid::new_v4(), 2, Money::from_cents(100)).unwrap();
        cart.add_item(Uuid::new_v4(), 1, Money::from_cents(900)).unwrap();

        let removed = cart.clear();

        assert_eq!(removed.len(), 2);
        assert!(cart.items.is_empty());
        assert_eq!(cart.total_price, Money::ZERO);
    }

    #[test]
    fn should_reject_merge_when_quantity_would_overflow() {
        let mut cart = cart();
        let product_id = Uuid::new_v4();
        let item = cart.add_item(product_id, 1, Money::from_cents(1)).unwrap();

        let result = cart.add_item(product_id, i32::MAX, Money::from_cents(1));

        assert!(matches!(
            result.unwrap_err(),
            CartError::QuantityLimitExceeded
        ));
        assert_eq!(cart.item(item.id).map(|i| i.quantity), Some(1));
        assert_eq!(cart.total_price, Money::from_cents(1));
    }

    #[test]
    fn should_reject_increase_past_i32_max() {
        let mut cart = cart();
        let item = cart
            .add_item(Uuid::new_v4(), i32::MAX, Money::ZERO)
            .unwrap();

        let result = cart.change_item_quantity(item.id, 1);

        assert!(matches!(
            result.unwrap_err(),
            CartError::QuantityLimitExceeded
        ));
        assert_eq!(cart.item(item.id).map(|i| i.quantity), Some(i32::MAX));
    }

    #[test]
    fn should_reject_item_when_total_exceeds_money_limit() {
        let mut cart = cart();
        cart.add_item(Uuid::new_v4(), 1, Money::MAX).unwrap();

        let result = cart.add_item(Uuid::new_v4(), 1, Money::from_cents(1));

        assert!(matches!(
            result.unwrap_err(),
            CartError::QuantityLimitExceeded
        ));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_price, Money::MAX);
    }

    #[test]
    fn should_reject_quantity_whose_subtotal_overflows() {
        let mut cart = cart();
        let result = cart.add_item(Uuid::new_v4(), i32::MAX, Money::MAX);
        assert!(matches!(
            result.unwrap_err(),
            CartError::QuantityLimitExceeded
        ));
        assert!(cart.items.is_empty());
    }

    #[test]
    fn should_compute_item_subtotal() {
        let item = CartItem::new(Uuid::new_v4(), Uuid::new_v4(), 3, Money::from_cents(199));
        assert_eq!(item.subtotal(), Money::from_cents(597));
    }
}

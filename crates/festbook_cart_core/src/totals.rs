//! Pure cart arithmetic: totals, counts and snapshot normalization.
//! No side effects, easy to test.

use crate::models::CartLineItem;
use rust_decimal::Decimal;

/// Sum of `price * quantity` over all items. Zero for an empty slice.
/// Saturates at `Decimal::MAX`; rust_decimal panics on overflow otherwise.
pub fn compute_total(items: &[CartLineItem]) -> Decimal {
    items
        .iter()
        .map(CartLineItem::line_total)
        .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line))
        .unwrap_or(Decimal::MAX)
}

/// Sum of quantities. Zero for an empty slice.
pub fn item_count(items: &[CartLineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Restore the cart invariants on items that did not come through the service
/// (e.g. a hand-edited snapshot): zero-quantity entries are dropped and duplicate
/// keys are folded into the first occurrence. Order of first appearance is kept.
pub fn normalize(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut out: Vec<CartLineItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            continue;
        }
        match out
            .iter_mut()
            .find(|existing| existing.matches(&item.event_id, item.seat_type))
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => out.push(item),
        }
    }
    out
}

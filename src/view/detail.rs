//! Detail view state.

use crate::model::Order;

/// Whether the detail view is showing, and for which order.
///
/// Starts `Closed`. [`open`](Self::open) moves to `Open(order)` (replacing
/// any previous selection) and [`close`](Self::close) always returns to
/// `Closed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailModal {
    #[default]
    Closed,
    Open(Order),
}

impl DetailModal {
    pub fn open(&mut self, order: Order) {
        *self = DetailModal::Open(order);
    }

    pub fn close(&mut self) {
        *self = DetailModal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailModal::Open(_))
    }

    pub fn selected(&self) -> Option<&Order> {
        match self {
            DetailModal::Open(order) => Some(order),
            DetailModal::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let modal = DetailModal::default();
        assert!(!modal.is_open());
        assert!(modal.selected().is_none());
    }

    #[test]
    fn open_then_close_clears_selection() {
        let mut modal = DetailModal::default();
        modal.open(Order::new(4u64, "Ada", "a", "b"));
        assert!(modal.is_open());
        assert_eq!(modal.selected().map(|o| o.customer_name.as_str()), Some("Ada"));

        modal.close();
        assert_eq!(modal, DetailModal::Closed);
    }

    #[test]
    fn reopening_replaces_selection() {
        let mut modal = DetailModal::default();
        modal.open(Order::new(1u64, "Ada", "a", "b"));
        modal.open(Order::new(2u64, "Bo", "a", "b"));
        assert_eq!(modal.selected().map(|o| o.customer_name.as_str()), Some("Bo"));
    }

    #[test]
    fn closing_when_closed_is_a_no_op() {
        let mut modal = DetailModal::default();
        modal.close();
        assert_eq!(modal, DetailModal::Closed);
    }
}

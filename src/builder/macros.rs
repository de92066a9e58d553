//! Macros for ergonomic budget construction.

/// Build a [`Budget`](crate::Budget) from mutable item references.
///
/// Items may be of different concrete types as long as they share a value
/// type; order is preserved.
///
/// # Example
///
/// ```
/// use budget_sim::budget;
/// use budget_sim::items::{ConstantItem, DiscreteItem};
///
/// let mut rent = ConstantItem::new("rent", -900.0);
/// let mut utilities = DiscreteItem::builder("utilities")
///     .state("Low", -80.0)
///     .state("High", -140.0)
///     .matrix(vec![vec![0.7, 0.3]])
///     .build()
///     .unwrap();
///
/// let budget = budget![&mut rent, &mut utilities];
/// assert_eq!(budget.names(), vec!["rent", "utilities"]);
/// ```
#[macro_export]
macro_rules! budget {
    () => {
        $crate::budget::Budget::empty()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::budget::Budget::empty()$(.with_item($item))+
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Item;
    use crate::items::ConstantItem;

    #[test]
    fn budget_macro_preserves_order() {
        let mut a = ConstantItem::new("a", 1);
        let mut b = ConstantItem::new("b", 2);
        let mut c = ConstantItem::new("c", 3);

        let mut budget = budget![&mut c, &mut a, &mut b,];
        assert_eq!(budget.names(), vec!["c", "a", "b"]);
        assert_eq!(budget.transition().1, vec![3, 1, 2]);
    }

    #[test]
    fn empty_budget_macro() {
        let budget: crate::Budget<f64> = budget![];
        assert!(budget.is_empty());
    }

    #[test]
    fn items_are_borrowed_not_copied() {
        let mut a = ConstantItem::new("a", 1);
        {
            let budget = budget![&mut a];
            assert_eq!(budget.len(), 1);
        }
        assert_eq!(a.transition().1, 1);
    }
}

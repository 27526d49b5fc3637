use crate::domain::model::{ButtonControl, SelectControl, SelectOption};

/// Fills `select` with one option per quantity a shopper may order.
///
/// A bound below 1 means the beverage is out of stock: the list stays
/// empty and both controls are disabled.
pub fn populate_quantity_options(
    allowed_quantity: i64,
    select: &mut SelectControl,
    add_to_cart: &mut ButtonControl,
) {
    select.options.clear();

    if allowed_quantity < 1 {
        tracing::debug!("Allowed quantity {} - disabling selector", allowed_quantity);
        add_to_cart.disabled = true;
        select.disabled = true;
        return;
    }

    select.options.extend((1..=allowed_quantity).map(|quantity| SelectOption {
        value: quantity.to_string(),
        label: quantity.to_string(),
    }));
    select.disabled = false;
    add_to_cart.disabled = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(select: &SelectControl) -> Vec<&str> {
        select.options.iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_zero_disables_both_controls() {
        let mut select = SelectControl::default();
        let mut button = ButtonControl::default();

        populate_quantity_options(0, &mut select, &mut button);

        assert!(select.options.is_empty());
        assert!(select.disabled);
        assert!(button.disabled);
    }

    #[test]
    fn test_negative_bound_clears_existing_options() {
        let mut select = SelectControl::default();
        let mut button = ButtonControl::default();
        populate_quantity_options(4, &mut select, &mut button);

        populate_quantity_options(-2, &mut select, &mut button);

        assert!(select.options.is_empty());
        assert!(select.disabled);
        assert!(button.disabled);
    }

    #[test]
    fn test_three_gives_ordered_options() {
        let mut select = SelectControl::default();
        let mut button = ButtonControl::default();

        populate_quantity_options(3, &mut select, &mut button);

        assert_eq!(values(&select), vec!["1", "2", "3"]);
        assert!(select.options.iter().all(|o| o.value == o.label));
        assert!(!select.disabled);
        assert!(!button.disabled);
    }

    #[test]
    fn test_restock_reenables_controls() {
        let mut select = SelectControl::default();
        let mut button = ButtonControl::default();
        populate_quantity_options(0, &mut select, &mut button);

        populate_quantity_options(2, &mut select, &mut button);

        assert_eq!(values(&select), vec!["1", "2"]);
        assert!(!select.disabled);
        assert!(!button.disabled);
    }
}

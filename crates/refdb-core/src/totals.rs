use refdb_model::Row;

/// Running total after each row, in row order.
///
/// Each row adds its numeric quantity, or its fallback amount when the
/// quantity is not numeric. A row with neither leaves the total undefined
/// for itself and every row after it.
pub fn running_totals(rows: &[Row]) -> Vec<Option<f64>> {
    rows.iter()
        .scan(Some(0.0), |total, row| {
            *total = total.zip(row.quantity.contribution()).map(|(a, b)| a + b);
            Some(*total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use refdb_model::Quantity;

    #[test]
    fn sums_numeric_quantities() {
        let rows = vec![
            Row::new(1, Quantity::numeric(10.0)),
            Row::new(2, Quantity::numeric(15.0)),
        ];
        assert_eq!(running_totals(&rows), vec![Some(10.0), Some(25.0)]);
    }

    #[test]
    fn falls_back_to_extra_amount() {
        let rows = vec![
            Row::new(1, Quantity::numeric(1.0)),
            Row::new(2, Quantity::extra(Some("Event".to_string()), Some(6.0))),
            Row::new(3, Quantity::numeric(2.0)),
        ];
        assert_eq!(running_totals(&rows), vec![Some(1.0), Some(7.0), Some(9.0)]);
    }

    #[test]
    fn missing_amount_poisons_the_rest() {
        let rows = vec![
            Row::new(1, Quantity::numeric(1.0)),
            Row::new(2, Quantity::extra(None, None)),
            Row::new(3, Quantity::numeric(2.0)),
        ];
        assert_eq!(running_totals(&rows), vec![Some(1.0), None, None]);
    }

    #[test]
    fn empty_rows() {
        assert!(running_totals(&[]).is_empty());
    }
}

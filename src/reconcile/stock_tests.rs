//! Unit tests for stock reconciliation.

use super::*;
use std::collections::HashSet;

fn offers(ids: &[&str]) -> OfferIdSet {
    ids.iter().copied().collect()
}

mod stock_from_quantity_tests {
    use super::*;

    #[test]
    fn more_than_ten_maps_to_hundred() {
        assert_eq!(stock_from_quantity(">10").unwrap(), 100);
    }

    #[test]
    fn single_item_is_held_back() {
        assert_eq!(stock_from_quantity("1").unwrap(), 0);
    }

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(stock_from_quantity("7").unwrap(), 7);
        assert_eq!(stock_from_quantity("0").unwrap(), 0);
        assert_eq!(stock_from_quantity(" 6 ").unwrap(), 6);
    }

    #[test]
    fn unknown_sentinel_is_invalid() {
        let result = stock_from_quantity("<5");
        assert!(matches!(result, Err(SyncError::InvalidFormat(_))));
    }

    #[test]
    fn negative_is_invalid() {
        assert!(stock_from_quantity("-3").is_err());
    }

    #[test]
    fn empty_is_invalid() {
        assert!(stock_from_quantity("").is_err());
    }
}

mod reconcile_stocks_tests {
    use super::*;

    #[test]
    fn matched_first_then_unmatched_zeroed() {
        let records = vec![
            SupplierStockRecord::new("A", ">10", "1'000.00 руб."),
            SupplierStockRecord::new("B", "1", "2'000.00 руб."),
        ];
        let stocks = reconcile_stocks(&records, &offers(&["C", "B", "A"])).unwrap();

        let pairs: Vec<(&str, u64)> = stocks
            .iter()
            .map(|s| (s.offer_id.as_str(), s.stock))
            .collect();
        assert_eq!(pairs, vec![("A", 100), ("B", 0), ("C", 0)]);
    }

    #[test]
    fn feed_rows_outside_catalog_are_ignored() {
        let records = vec![
            SupplierStockRecord::new("X", "5", "100.00 руб."),
            SupplierStockRecord::new("A", "7", "100.00 руб."),
        ];
        let stocks = reconcile_stocks(&records, &offers(&["A"])).unwrap();
        assert_eq!(
            stocks,
            vec![StockUpdate {
                offer_id: "A".to_string(),
                stock: 7
            }]
        );
    }

    #[test]
    fn every_offer_appears_exactly_once() {
        let records = vec![
            SupplierStockRecord::new("A", "3", "1.00"),
            SupplierStockRecord::new("A", "9", "1.00"),
            SupplierStockRecord::new("D", ">10", "1.00"),
            SupplierStockRecord::new("Z", "2", "1.00"),
        ];
        let catalog = offers(&["A", "B", "C", "D"]);
        let stocks = reconcile_stocks(&records, &catalog).unwrap();

        assert_eq!(stocks.len(), catalog.len());
        let ids: HashSet<&str> = stocks.iter().map(|s| s.offer_id.as_str()).collect();
        let expected: HashSet<&str> = catalog.iter().collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn duplicate_feed_row_keeps_first_match() {
        let records = vec![
            SupplierStockRecord::new("A", "3", "1.00"),
            SupplierStockRecord::new("A", "9", "1.00"),
        ];
        let stocks = reconcile_stocks(&records, &offers(&["A"])).unwrap();
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].stock, 3);
    }

    #[test]
    fn duplicate_of_matched_row_does_not_need_valid_quantity() {
        let records = vec![
            SupplierStockRecord::new("A", "3", "1.00"),
            SupplierStockRecord::new("A", "n/a", "1.00"),
        ];
        assert!(reconcile_stocks(&records, &offers(&["A"])).is_ok());
    }

    #[test]
    fn caller_set_is_untouched_and_result_is_repeatable() {
        let records = vec![
            SupplierStockRecord::new("B", "4", "1.00"),
            SupplierStockRecord::new("A", ">10", "1.00"),
        ];
        let catalog = offers(&["A", "B", "C"]);
        let snapshot = catalog.clone();

        let first = reconcile_stocks(&records, &catalog).unwrap();
        let second = reconcile_stocks(&records, &catalog).unwrap();

        assert_eq!(first, second);
        assert_eq!(catalog, snapshot);
    }

    #[test]
    fn empty_feed_zeroes_whole_catalog() {
        let stocks = reconcile_stocks(&[], &offers(&["A", "B"])).unwrap();
        assert!(stocks.iter().all(|s| s.stock == 0));
        assert_eq!(stocks.len(), 2);
    }

    #[test]
    fn invalid_quantity_on_matched_record_aborts() {
        let records = vec![
            SupplierStockRecord::new("A", "3", "1.00"),
            SupplierStockRecord::new("B", "много", "1.00"),
        ];
        let result = reconcile_stocks(&records, &offers(&["A", "B"]));
        assert!(matches!(result, Err(SyncError::InvalidFormat(_))));
    }

    #[test]
    fn invalid_quantity_on_unmatched_record_is_ignored() {
        let records = vec![SupplierStockRecord::new("X", "много", "1.00")];
        let stocks = reconcile_stocks(&records, &offers(&["A"])).unwrap();
        assert_eq!(stocks.len(), 1);
    }
}

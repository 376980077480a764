use shopify_client::Product;

use crate::allow_list::AllowList;

/// The slice of a product that gets exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRow {
    pub id: i64,
}

/// Keep products whose handle is allow-listed, in input order.
///
/// Products without a handle (or with an empty one) are always dropped.
pub fn filter_by_handle(products: &[Product], allow_list: &AllowList) -> Vec<ExportRow> {
    products
        .iter()
        .filter(|product| {
            product
                .handle
                .as_deref()
                .is_some_and(|handle| allow_list.contains(handle))
        })
        .map(|product| ExportRow { id: product.id })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, handle: Option<&str>) -> Product {
        Product {
            id,
            handle: handle.map(str::to_string),
            variants: Vec::new(),
        }
    }

    #[test]
    fn test_matches_case_insensitively_in_order() {
        let products = vec![
            product(1, Some("ABC")),
            product(2, Some("abc")),
            product(3, Some("")),
            product(4, Some("XYZ")),
        ];
        let allow_list = AllowList::new(["abc"]);

        let rows = filter_by_handle(&products, &allow_list);

        assert_eq!(rows, vec![ExportRow { id: 1 }, ExportRow { id: 2 }]);
    }

    #[test]
    fn test_missing_handle_is_excluded() {
        let products = vec![product(1, None), product(2, Some("abc"))];
        let allow_list = AllowList::new(["abc", ""]);

        let rows = filter_by_handle(&products, &allow_list);

        assert_eq!(rows, vec![ExportRow { id: 2 }]);
    }

    #[test]
    fn test_multiple_matching_entries_emit_once() {
        let products = vec![product(9, Some("Th8046Mb"))];
        let allow_list = AllowList::new(["TH8046MB", "th8046mb", "th8046MB"]);

        assert_eq!(filter_by_handle(&products, &allow_list), vec![ExportRow { id: 9 }]);
    }

    #[test]
    fn test_no_partial_matches() {
        let products = vec![product(1, Some("TH8046")), product(2, Some("TH8046MB-8"))];
        let allow_list = AllowList::new(["TH8046MB"]);

        assert!(filter_by_handle(&products, &allow_list).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_handle(&[], &AllowList::default()).is_empty());
    }
}

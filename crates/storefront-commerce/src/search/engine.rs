//! The catalog query pipeline: filter, then sort.

use crate::catalog::Product;
use crate::search::QueryParams;

/// Produce the listing for `params` from `catalog`.
///
/// Products matching every filter are kept in catalog order and then
/// stable-sorted, so ties keep their catalog order. The input slice is
/// never modified.
pub fn query<'a>(catalog: &'a [Product], params: &QueryParams) -> Vec<&'a Product> {
    let filters = params.filters();

    let mut results: Vec<&Product> = catalog
        .iter()
        .filter(|product| filters.iter().all(|filter| filter.matches(product)))
        .collect();

    results.sort_by(|a, b| params.sort.compare(a, b));

    tracing::trace!(
        term = %params.term,
        in_stock_only = params.in_stock_only,
        sort = params.sort.code(),
        matched = results.len(),
        "catalog query"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::search::SortOption;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "Apple", Money::new(100)).with_quantity(5).with_rating(4.0),
            Product::new(2, "Banana", Money::new(50)).with_quantity(0).with_rating(3.0),
            Product::new(3, "apricot jam", Money::new(100)).with_quantity(2).with_rating(4.0),
            Product::new(4, "Cherry", Money::new(300)).with_quantity(1).with_rating(2.5),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_in_stock_price_ascending() {
        let catalog = vec![
            Product::new(1, "Apple", Money::new(100)).with_quantity(5).with_rating(4.0),
            Product::new(2, "Banana", Money::new(50)).with_quantity(0).with_rating(3.0),
        ];
        let params = QueryParams::new()
            .with_in_stock_only(true)
            .with_sort(SortOption::PriceAsc);

        let results = query(&catalog, &params);
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_term_filter() {
        let catalog = catalog();
        let params = QueryParams::new().with_term("AP");
        assert_eq!(ids(&query(&catalog, &params)), vec![1, 3]);

        let params = QueryParams::new().with_term("xyz");
        assert!(query(&catalog, &params).is_empty());
    }

    #[test]
    fn test_name_sorts() {
        let catalog = catalog();
        let asc = query(&catalog, &QueryParams::new().with_sort(SortOption::NameAsc));
        assert_eq!(ids(&asc), vec![1, 3, 2, 4]);

        let desc = query(&catalog, &QueryParams::new().with_sort(SortOption::NameDesc));
        assert_eq!(ids(&desc), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_name_sort_places_accented_names_by_base_letter() {
        let catalog = vec![
            Product::new(1, "Zebra Plush", Money::new(900)),
            Product::new(2, "\u{00c9}clair Tin", Money::new(450)),
            Product::new(3, "apple", Money::new(100)),
        ];

        let params = QueryParams::new().with_sort(SortOption::NameAsc);
        assert_eq!(ids(&query(&catalog, &params)), vec![3, 2, 1]);

        let params = QueryParams::new().with_sort(SortOption::NameDesc);
        assert_eq!(ids(&query(&catalog, &params)), vec![1, 2, 3]);
    }

    #[test]
    fn test_price_ties_keep_catalog_order() {
        let catalog = catalog();
        let asc = query(&catalog, &QueryParams::new().with_sort(SortOption::PriceAsc));
        assert_eq!(ids(&asc), vec![2, 1, 3, 4]);

        let desc = query(&catalog, &QueryParams::new().with_sort(SortOption::PriceDesc));
        assert_eq!(ids(&desc), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_rating_sorts() {
        let catalog = catalog();
        let asc = query(&catalog, &QueryParams::new().with_sort(SortOption::RatingAsc));
        assert_eq!(ids(&asc), vec![4, 2, 1, 3]);

        let desc = query(&catalog, &QueryParams::new().with_sort(SortOption::RatingDesc));
        assert_eq!(ids(&desc), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_unsorted_keeps_catalog_order() {
        let catalog = catalog();
        let params = QueryParams::new().with_sort(SortOption::from("mystery"));
        assert_eq!(ids(&query(&catalog, &params)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(query(&[], &QueryParams::new().with_term("a")).is_empty());
    }

    #[test]
    fn test_input_untouched() {
        let catalog = catalog();
        let before = catalog.clone();
        let _ = query(&catalog, &QueryParams::new().with_sort(SortOption::PriceDesc));
        assert_eq!(catalog, before);
    }
}

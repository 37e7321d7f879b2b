use crate::chart::page::{ChartPage, Metric, single_metric_pages, two_metric_pages};
use crate::data::aggregate::{
    AggregateError, AggregateRow, Direction, PRICE_FIELD, SortSlot, average_price_by_value,
    count_by_value,
};
use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Analysis descriptors – the driver's fixed menu
// ---------------------------------------------------------------------------

/// What one analysis computes per distinct value of its grouping column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Occurrence count.
    ValueCounts { label: String },
    /// Average price.
    AveragePrice { label: String },
    /// Count and average price from one averaged result: all count pages,
    /// then all price pages.
    PriceAndAvailability {
        count_label: String,
        price_label: String,
    },
}

/// One catalog analysis: aggregate by `key`, order the result, chart the
/// chosen metric(s).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub name: String,
    pub key: String,
    pub category_label: String,
    pub kind: AnalysisKind,
    pub sort: SortSlot,
    pub direction: Direction,
}

impl Analysis {
    /// The aggregated, sorted result set of this analysis.
    pub fn rows(&self, catalog: &Catalog) -> Result<Vec<AggregateRow>, AggregateError> {
        match self.kind {
            AnalysisKind::ValueCounts { .. } => {
                count_by_value(catalog, &self.key, self.sort, self.direction)
            }
            AnalysisKind::AveragePrice { .. } | AnalysisKind::PriceAndAvailability { .. } => {
                average_price_by_value(catalog, &self.key, self.sort, self.direction)
            }
        }
    }

    /// Slice a result set into chart pages.
    pub fn pages(&self, rows: &[AggregateRow]) -> Vec<ChartPage> {
        match &self.kind {
            AnalysisKind::ValueCounts { label } => {
                single_metric_pages(rows, &self.category_label, label, Metric::Count)
            }
            AnalysisKind::AveragePrice { label } => {
                single_metric_pages(rows, &self.category_label, label, Metric::AveragePrice)
            }
            AnalysisKind::PriceAndAvailability {
                count_label,
                price_label,
            } => two_metric_pages(rows, &self.category_label, count_label, price_label),
        }
    }
}

// ---------------------------------------------------------------------------
// Default analysis set
// ---------------------------------------------------------------------------

/// The hardcoded catalog analyses, filtered to grouping columns the loaded
/// catalog actually has.  When none of the known columns are present, falls
/// back to a generic per-column set.
pub fn default_set(catalog: &Catalog) -> Vec<Analysis> {
    let known = vec![
        Analysis {
            name: "Suppliers: availability and price".to_string(),
            key: "Supplier".to_string(),
            category_label: "Company".to_string(),
            kind: AnalysisKind::PriceAndAvailability {
                count_label: "Product quantity available".to_string(),
                price_label: "Average product price".to_string(),
            },
            sort: SortSlot::AveragePrice,
            direction: Direction::Descending,
        },
        Analysis {
            name: "Products per package".to_string(),
            key: "Supplier Device Package".to_string(),
            category_label: "Package".to_string(),
            kind: AnalysisKind::ValueCounts {
                label: "Products per package".to_string(),
            },
            sort: SortSlot::Count,
            direction: Direction::Descending,
        },
        Analysis {
            name: "Average price per package".to_string(),
            key: "Supplier Device Package".to_string(),
            category_label: "Package".to_string(),
            kind: AnalysisKind::AveragePrice {
                label: "Average product price".to_string(),
            },
            sort: SortSlot::AveragePrice,
            direction: Direction::Descending,
        },
        Analysis {
            name: "Products per resolution".to_string(),
            key: "Resolution (Bits)".to_string(),
            category_label: "Resolution".to_string(),
            kind: AnalysisKind::ValueCounts {
                label: "Products per resolution".to_string(),
            },
            sort: SortSlot::Value,
            direction: Direction::Ascending,
        },
        Analysis {
            name: "Average price per resolution".to_string(),
            key: "Resolution (Bits)".to_string(),
            category_label: "Bits".to_string(),
            kind: AnalysisKind::AveragePrice {
                label: "Average price per resolution".to_string(),
            },
            sort: SortSlot::AveragePrice,
            direction: Direction::Descending,
        },
        Analysis {
            name: "Products per sampling speed".to_string(),
            key: "Sampling Rate (Per Second)".to_string(),
            category_label: "Sampling speed".to_string(),
            kind: AnalysisKind::ValueCounts {
                label: "Products per sampling speed".to_string(),
            },
            sort: SortSlot::Value,
            direction: Direction::Ascending,
        },
    ];

    let set: Vec<Analysis> = known
        .into_iter()
        .filter(|a| catalog.has_column(&a.key))
        .collect();

    if set.is_empty() {
        fallback_set(catalog)
    } else {
        set
    }
}

/// Generic analyses for a catalog with unfamiliar columns: value counts per
/// column, plus average price per column when a price column exists.
fn fallback_set(catalog: &Catalog) -> Vec<Analysis> {
    let has_price = catalog.has_column(PRICE_FIELD);

    catalog
        .columns
        .iter()
        .filter(|col| col.as_str() != PRICE_FIELD)
        .flat_map(|col| {
            let mut analyses = vec![Analysis {
                name: format!("Products per {col}"),
                key: col.clone(),
                category_label: col.clone(),
                kind: AnalysisKind::ValueCounts {
                    label: format!("Products per {col}"),
                },
                sort: SortSlot::Count,
                direction: Direction::Descending,
            }];
            if has_price {
                analyses.push(Analysis {
                    name: format!("Average price per {col}"),
                    key: col.clone(),
                    category_label: col.clone(),
                    kind: AnalysisKind::AveragePrice {
                        label: format!("Average price per {col}"),
                    },
                    sort: SortSlot::AveragePrice,
                    direction: Direction::Descending,
                });
            }
            analyses
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn record(fields: &[(&str, &str)]) -> Record {
        Record::new(
            fields
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn adc_catalog() -> Catalog {
        Catalog::new(
            vec!["Supplier".to_string(), "Price".to_string()],
            vec![
                record(&[("Supplier", "Acme"), ("Price", "10")]),
                record(&[("Supplier", "Acme"), ("Price", "20")]),
                record(&[("Supplier", "Bolt"), ("Price", "5")]),
            ],
        )
    }

    #[test]
    fn default_set_keeps_only_present_columns() {
        let analyses = default_set(&adc_catalog());
        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].key, "Supplier");
        assert!(matches!(
            analyses[0].kind,
            AnalysisKind::PriceAndAvailability { .. }
        ));
    }

    #[test]
    fn fallback_covers_unfamiliar_columns() {
        let catalog = Catalog::new(
            vec!["Vendor".to_string(), "Price".to_string()],
            vec![record(&[("Vendor", "Acme"), ("Price", "10")])],
        );
        let analyses = default_set(&catalog);
        let names: Vec<&str> = analyses.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Products per Vendor", "Average price per Vendor"]
        );
    }

    #[test]
    fn fallback_without_price_only_counts() {
        let catalog = Catalog::new(
            vec!["Vendor".to_string()],
            vec![record(&[("Vendor", "Acme")])],
        );
        let analyses = default_set(&catalog);
        assert_eq!(analyses.len(), 1);
        assert!(matches!(analyses[0].kind, AnalysisKind::ValueCounts { .. }));
    }

    #[test]
    fn two_metric_analysis_produces_count_then_price_pages() {
        let catalog = adc_catalog();
        let analysis = &default_set(&catalog)[0];

        let rows = analysis.rows(&catalog).unwrap();
        let pages = analysis.pages(&rows);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title, "Product quantity available");
        assert_eq!(pages[1].title, "Average product price");
        assert_eq!(pages[0].category_label, "Company");
        // sorted descending by average price: Acme (15.0) before Bolt (5.0)
        assert_eq!(pages[1].bars[0], ("Acme".to_string(), 15.0));
        assert_eq!(pages[1].bars[1], ("Bolt".to_string(), 5.0));
    }
}

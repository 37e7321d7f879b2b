use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use super::model::Catalog;

/// Field holding the component price, parsed as `f64` when averaging.
pub const PRICE_FIELD: &str = "Price";

// ---------------------------------------------------------------------------
// Sort parameters
// ---------------------------------------------------------------------------

/// Positional slot of an [`AggregateRow`] a result set is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortSlot {
    Value,
    Count,
    AveragePrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

// ---------------------------------------------------------------------------
// Results and errors
// ---------------------------------------------------------------------------

/// One grouped-and-summarised output row.
///
/// `average_price` is `Some` only for [`average_price_by_value`] results;
/// `count` is at least 1 and `value` is unique within a result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub value: String,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_price: Option<f64>,
}

/// Returned to the caller instead of ending the process; whether to abort
/// is the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("{operation} cannot sort by {slot:?}")]
    InvalidSortSlot {
        operation: &'static str,
        slot: SortSlot,
    },
}

// ---------------------------------------------------------------------------
// Partitioning
// ---------------------------------------------------------------------------

struct Partition {
    value: String,
    count: usize,
    price_sum: f64,
    priced: usize,
}

/// Partition records into equivalence classes by the exact string value of
/// `key`, in first-seen order.  Records that do not carry the field are
/// skipped.  Price figures accumulate only the values that parse as `f64`.
fn partition_by(catalog: &Catalog, key: &str) -> Vec<Partition> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut partitions: Vec<Partition> = Vec::new();

    for record in &catalog.records {
        let Some(value) = record.get(key) else { continue };

        let slot = *index.entry(value.to_string()).or_insert_with(|| {
            partitions.push(Partition {
                value: value.to_string(),
                count: 0,
                price_sum: 0.0,
                priced: 0,
            });
            partitions.len() - 1
        });

        let partition = &mut partitions[slot];
        partition.count += 1;
        if let Some(price) = record
            .get(PRICE_FIELD)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
        {
            partition.price_sum += price;
            partition.priced += 1;
        }
    }

    partitions
}

/// Stable sort; ties keep their first-seen relative order in either
/// direction.
fn sort_rows(rows: &mut [AggregateRow], sort: SortSlot, direction: Direction) {
    rows.sort_by(|a, b| {
        let ordering = match sort {
            SortSlot::Value => a.value.cmp(&b.value),
            SortSlot::Count => a.count.cmp(&b.count),
            SortSlot::AveragePrice => a
                .average_price
                .unwrap_or(0.0)
                .total_cmp(&b.average_price.unwrap_or(0.0)),
        };
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}

// ---------------------------------------------------------------------------
// Public operations
// ---------------------------------------------------------------------------

/// Count the records per distinct value of `key` and sort the result.
///
/// Valid sort slots are `Value` and `Count`; `AveragePrice` is rejected
/// since these rows carry no price.
pub fn count_by_value(
    catalog: &Catalog,
    key: &str,
    sort: SortSlot,
    direction: Direction,
) -> Result<Vec<AggregateRow>, AggregateError> {
    if sort == SortSlot::AveragePrice {
        return Err(AggregateError::InvalidSortSlot {
            operation: "count_by_value",
            slot: sort,
        });
    }

    let mut rows: Vec<AggregateRow> = partition_by(catalog, key)
        .into_iter()
        .map(|p| AggregateRow {
            value: p.value,
            count: p.count,
            average_price: None,
        })
        .collect();

    sort_rows(&mut rows, sort, direction);
    Ok(rows)
}

/// Average the `Price` field per distinct value of `key` and sort the
/// result.  All three sort slots are valid.
///
/// The average is taken over the partition's parseable price values; a
/// partition with none is skipped, so the computation never divides by
/// zero.  A row whose *sorted* slot is numerically zero is dropped from the
/// result; string values never equal numeric zero, so sorting by `Value`
/// drops nothing.
pub fn average_price_by_value(
    catalog: &Catalog,
    key: &str,
    sort: SortSlot,
    direction: Direction,
) -> Result<Vec<AggregateRow>, AggregateError> {
    let mut rows: Vec<AggregateRow> = partition_by(catalog, key)
        .into_iter()
        .filter_map(|p| {
            if p.priced == 0 {
                log::warn!(
                    "no parseable '{PRICE_FIELD}' values where {key} = {:?}, partition skipped",
                    p.value
                );
                return None;
            }
            Some(AggregateRow {
                value: p.value,
                count: p.count,
                average_price: Some(p.price_sum / p.priced as f64),
            })
        })
        .filter(|row| match sort {
            SortSlot::Value => true,
            SortSlot::Count => row.count != 0,
            SortSlot::AveragePrice => row.average_price != Some(0.0),
        })
        .collect();

    sort_rows(&mut rows, sort, direction);
    Ok(rows)
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

    fn supplier_catalog() -> Catalog {
        Catalog::new(
            vec!["Supplier".to_string(), "Price".to_string()],
            vec![
                record(&[("Supplier", "A"), ("Price", "10")]),
                record(&[("Supplier", "A"), ("Price", "20")]),
                record(&[("Supplier", "B"), ("Price", "5")]),
            ],
        )
    }

    #[test]
    fn every_record_counted_exactly_once() {
        let catalog = supplier_catalog();
        let rows =
            count_by_value(&catalog, "Supplier", SortSlot::Count, Direction::Descending).unwrap();
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, catalog.len());
    }

    #[test]
    fn values_are_unique() {
        let rows = count_by_value(
            &supplier_catalog(),
            "Supplier",
            SortSlot::Value,
            Direction::Ascending,
        )
        .unwrap();
        let mut values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        values.dedup();
        assert_eq!(values.len(), rows.len());
    }

    #[test]
    fn counts_ascending_by_value() {
        let rows = count_by_value(
            &supplier_catalog(),
            "Supplier",
            SortSlot::Value,
            Direction::Ascending,
        )
        .unwrap();
        let pairs: Vec<(&str, usize)> = rows.iter().map(|r| (r.value.as_str(), r.count)).collect();
        assert_eq!(pairs, vec![("A", 2), ("B", 1)]);
        assert!(rows.iter().all(|r| r.average_price.is_none()));
    }

    #[test]
    fn counts_descending_by_count() {
        let rows = count_by_value(
            &supplier_catalog(),
            "Supplier",
            SortSlot::Count,
            Direction::Descending,
        )
        .unwrap();
        assert_eq!(rows[0].value, "A");
        assert!(rows.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let catalog = Catalog::new(
            vec!["Supplier".to_string()],
            vec![
                record(&[("Supplier", "Zeta")]),
                record(&[("Supplier", "Alpha")]),
                record(&[("Supplier", "Mu")]),
            ],
        );
        // All counts equal: sorting by count must not disturb first-seen order,
        // in either direction.
        for direction in [Direction::Ascending, Direction::Descending] {
            let rows = count_by_value(&catalog, "Supplier", SortSlot::Count, direction).unwrap();
            let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
            assert_eq!(values, vec!["Zeta", "Alpha", "Mu"]);
        }
    }

    #[test]
    fn price_slot_is_invalid_for_counts() {
        let err = count_by_value(
            &supplier_catalog(),
            "Supplier",
            SortSlot::AveragePrice,
            Direction::Ascending,
        )
        .unwrap_err();
        assert_eq!(
            err,
            AggregateError::InvalidSortSlot {
                operation: "count_by_value",
                slot: SortSlot::AveragePrice,
            }
        );
    }

    #[test]
    fn averages_use_actual_prices() {
        let rows = average_price_by_value(
            &supplier_catalog(),
            "Supplier",
            SortSlot::Value,
            Direction::Ascending,
        )
        .unwrap();
        let triples: Vec<(&str, usize, f64)> = rows
            .iter()
            .map(|r| (r.value.as_str(), r.count, r.average_price.unwrap()))
            .collect();
        assert_eq!(triples, vec![("A", 2, 15.0), ("B", 1, 5.0)]);
    }

    #[test]
    fn averages_sorted_descending_by_price() {
        let rows = average_price_by_value(
            &supplier_catalog(),
            "Supplier",
            SortSlot::AveragePrice,
            Direction::Descending,
        )
        .unwrap();
        let averages: Vec<f64> = rows.iter().map(|r| r.average_price.unwrap()).collect();
        assert_eq!(averages, vec![15.0, 5.0]);
    }

    #[test]
    fn zero_average_dropped_only_when_price_is_the_sort_slot() {
        let mut catalog = supplier_catalog();
        catalog.records.push(record(&[("Supplier", "C"), ("Price", "0")]));

        let by_price = average_price_by_value(
            &catalog,
            "Supplier",
            SortSlot::AveragePrice,
            Direction::Descending,
        )
        .unwrap();
        assert!(by_price.iter().all(|r| r.value != "C"));
        assert!(by_price.iter().all(|r| r.average_price != Some(0.0)));

        let by_value =
            average_price_by_value(&catalog, "Supplier", SortSlot::Value, Direction::Ascending)
                .unwrap();
        let c = by_value.iter().find(|r| r.value == "C").unwrap();
        assert_eq!(c.average_price, Some(0.0));
    }

    #[test]
    fn partition_without_parseable_prices_is_skipped() {
        let mut catalog = supplier_catalog();
        catalog.records.push(record(&[("Supplier", "D"), ("Price", "n/a")]));

        let averaged =
            average_price_by_value(&catalog, "Supplier", SortSlot::Value, Direction::Ascending)
                .unwrap();
        assert!(averaged.iter().all(|r| r.value != "D"));

        // Still a full citizen of the count aggregation.
        let counted =
            count_by_value(&catalog, "Supplier", SortSlot::Value, Direction::Ascending).unwrap();
        assert!(counted.iter().any(|r| r.value == "D" && r.count == 1));
    }

    #[test]
    fn unparseable_prices_do_not_skew_the_average() {
        let catalog = Catalog::new(
            vec!["Supplier".to_string(), "Price".to_string()],
            vec![
                record(&[("Supplier", "A"), ("Price", "10")]),
                record(&[("Supplier", "A"), ("Price", "call us")]),
            ],
        );
        let rows =
            average_price_by_value(&catalog, "Supplier", SortSlot::Value, Direction::Ascending)
                .unwrap();
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[0].average_price, Some(10.0));
    }

    #[test]
    fn records_without_the_key_field_are_skipped() {
        let mut catalog = supplier_catalog();
        catalog.records.push(record(&[("Price", "99")]));

        let rows =
            count_by_value(&catalog, "Supplier", SortSlot::Count, Direction::Descending).unwrap();
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, 3);
    }
}

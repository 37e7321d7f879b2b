use crate::data::aggregate::AggregateRow;

/// Maximum number of bars on a single chart.
pub const PAGE_CAPACITY: usize = 14;

/// Which [`AggregateRow`] slot a bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Count,
    AveragePrice,
}

/// One renderable horizontal bar chart: at most [`PAGE_CAPACITY`] bars.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPage {
    /// Metric axis label, suffixed with ` - Part N` when paginated.
    pub title: String,
    /// Label of the grouping axis.
    pub category_label: String,
    /// (bar label, bar value) in result-set order.
    pub bars: Vec<(String, f64)>,
}

/// Project one metric out of a result set.
///
/// Labels are trimmed; a trimmed label of one character or less is a
/// placeholder (fields like `-`) and its row is excluded.  Rows lacking the
/// requested metric are excluded as well.
fn metric_bars(rows: &[AggregateRow], metric: Metric) -> Vec<(String, f64)> {
    rows.iter()
        .filter_map(|row| {
            let label = row.value.trim();
            if label.chars().count() <= 1 {
                return None;
            }
            let value = match metric {
                Metric::Count => row.count as f64,
                Metric::AveragePrice => row.average_price?,
            };
            Some((label.to_string(), value))
        })
        .collect()
}

/// Slice bars into pages of at most [`PAGE_CAPACITY`].  A result that does
/// not fill its last page still gets that page, so every bar is rendered.
/// Multi-page results carry a 1-based ` - Part N` title suffix.
fn paginate(bars: Vec<(String, f64)>, title: &str, category_label: &str) -> Vec<ChartPage> {
    if bars.len() <= PAGE_CAPACITY {
        return vec![ChartPage {
            title: title.to_string(),
            category_label: category_label.to_string(),
            bars,
        }];
    }

    bars.chunks(PAGE_CAPACITY)
        .enumerate()
        .map(|(i, chunk)| ChartPage {
            title: format!("{title} - Part {}", i + 1),
            category_label: category_label.to_string(),
            bars: chunk.to_vec(),
        })
        .collect()
}

/// Pages for a single metric over a result set: one chart per page.
pub fn single_metric_pages(
    rows: &[AggregateRow],
    category_label: &str,
    value_label: &str,
    metric: Metric,
) -> Vec<ChartPage> {
    paginate(metric_bars(rows, metric), value_label, category_label)
}

/// Pages for both metrics of an averaged result: all count pages first,
/// then all average-price pages.
pub fn two_metric_pages(
    rows: &[AggregateRow],
    category_label: &str,
    count_label: &str,
    price_label: &str,
) -> Vec<ChartPage> {
    let mut pages = single_metric_pages(rows, category_label, count_label, Metric::Count);
    pages.extend(single_metric_pages(
        rows,
        category_label,
        price_label,
        Metric::AveragePrice,
    ));
    pages
}

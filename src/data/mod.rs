/// Data layer: core types, loading, aggregation, and export.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog   │  Vec<Record>, column list
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ aggregate │  group by a column → sorted AggregateRows
///   └──────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod loader;
pub mod model;

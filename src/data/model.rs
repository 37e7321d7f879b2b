// ---------------------------------------------------------------------------
// Record – one catalog row
// ---------------------------------------------------------------------------

/// A single catalog row: field name → value pairs in header order.
///
/// A row shorter than the header simply carries fewer fields; lookups for
/// the missing trailing fields return `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Record { fields }
    }

    /// Value of the given field, if the row carries it.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// All (field, value) pairs in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed catalog. Built once by the loader, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Ordered column names, as they appear in the source header.
    pub columns: Vec<String>,
    /// All records (rows) in file order.
    pub records: Vec<Record>,
}

impl Catalog {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Catalog { columns, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_lookup_by_field_name() {
        let record = Record::new(vec![
            ("Supplier".to_string(), "Acme".to_string()),
            ("Price".to_string(), "3.20".to_string()),
        ]);
        assert_eq!(record.get("Supplier"), Some("Acme"));
        assert_eq!(record.get("Price"), Some("3.20"));
        assert_eq!(record.get("Package"), None);
    }

    #[test]
    fn catalog_column_membership() {
        let catalog = Catalog::new(vec!["Supplier".to_string(), "Price".to_string()], Vec::new());
        assert!(catalog.has_column("Price"));
        assert!(!catalog.has_column("price"));
        assert!(catalog.is_empty());
    }
}

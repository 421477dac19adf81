//! Data table component types.
//!
//! These types define the configuration for tables rendered in the admin panel.

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Heading shown above the table.
    pub title: String,
    /// Column definitions, in display order.
    pub columns: Vec<TableColumn>,
    /// Title for empty state.
    pub empty_title: String,
    /// Description for empty state.
    pub empty_description: Option<String>,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str, title: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            title: title.to_string(),
            columns: vec![],
            empty_title: "No items found".to_string(),
            empty_description: None,
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set empty state configuration.
    #[must_use]
    pub fn empty_state(mut self, title: &str, description: Option<&str>) -> Self {
        self.empty_title = title.to_string();
        self.empty_description = description.map(ToString::to_string);
        self
    }

    /// Number of columns, for `colspan` on full-width rows.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

/// Build the users table configuration.
#[must_use]
pub fn users_table_config() -> DataTableConfig {
    DataTableConfig::new("users", "Standard Table Design")
        .column(TableColumn::new("name", "Name"))
        .column(TableColumn::new("email", "Email"))
        .column(TableColumn::new("user_type", "User Type"))
        .column(TableColumn::new("joined", "Joined"))
        .column(TableColumn::new("status", "Status"))
        .column(TableColumn::new("actions", "Actions"))
        .empty_state("No users yet", Some("Use Add User to create the first one"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_table_columns() {
        let config = users_table_config();
        let labels: Vec<_> = config.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Name", "Email", "User Type", "Joined", "Status", "Actions"]
        );
        assert_eq!(config.column_count(), 6);
        assert_eq!(config.title, "Standard Table Design");
    }

    #[test]
    fn test_default_empty_state() {
        let config = DataTableConfig::new("things", "Things");
        assert_eq!(config.empty_title, "No items found");
        assert!(config.empty_description.is_none());
    }
}

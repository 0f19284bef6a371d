//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of records that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Budget,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Budget => write!(f, "Budget"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Expense id or budget month
    pub entity_id: String,

    /// Short label such as the expense description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Snapshot before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Changed fields, e.g. `amount: 5 -> 7.5`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a newly created record
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Create, entity_type, entity_id, entity_name);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// Entry for a modified record
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        let mut entry = Self::new(Operation::Update, entity_type, entity_id, entity_name);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        entry.diff_summary = diff_summary;
        entry
    }

    /// Entry for a removed record
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Delete, entity_type, entity_id, entity_name);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    /// Format the entry for the `history` command
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(
            EntityType::Expense,
            "7",
            Some("Coffee".to_string()),
            &json!({"id": 7, "amount": 3.5}),
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert!(entry.before.is_none());
        assert_eq!(entry.after, Some(json!({"id": 7, "amount": 3.5})));
    }

    #[test]
    fn test_update_and_delete_entries() {
        let before = json!({"month": 2, "amount": 100});
        let after = json!({"month": 2, "amount": 150});
        let update = AuditEntry::update(
            EntityType::Budget,
            "2",
            None,
            &before,
            &after,
            Some("amount: 100 -> 150".into()),
        );
        assert!(update.before.is_some() && update.after.is_some());

        let delete = AuditEntry::delete(EntityType::Expense, "3", None, &before);
        assert_eq!(delete.operation, Operation::Delete);
        assert!(delete.after.is_none());
    }

    #[test]
    fn test_serialized_field_names() {
        let entry = AuditEntry::create(EntityType::Budget, "4", None, &json!({}));
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["operation"], "create");
        assert_eq!(value["entity_type"], "budget");
        assert!(value.get("before").is_none());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::update(
            EntityType::Expense,
            "12",
            Some("Groceries".to_string()),
            &json!({}),
            &json!({}),
            Some("amount: 40 -> 45.5".into()),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Expense 12 (Groceries)"));
        assert!(formatted.contains("Changes: amount: 40 -> 45.5"));
    }
}

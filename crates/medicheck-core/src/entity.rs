//! Core Entity Trait
//!
//! Every row the reducers touch is addressed by a string id. The helpers here
//! implement the find-then-replace update shared by all row reducers.

use thiserror::Error;

/// Core trait for all row entities
pub trait Entity: Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Fixture error: {0}")]
    Fixture(String),
}

/// Find a row by id
pub fn find_by_id<'a, T: Entity>(rows: &'a [T], id: &str) -> Option<&'a T> {
    rows.iter().find(|row| row.id() == id)
}

/// Apply `edit` to the row with the given id and hand the collection back.
///
/// Rows that are not addressed are moved through untouched. An unknown id is
/// not an error: the collection is returned as it came in.
pub fn update_by_id<T: Entity>(mut rows: Vec<T>, id: &str, edit: impl FnOnce(&mut T)) -> Vec<T> {
    match rows.iter_mut().find(|row| row.id() == id) {
        Some(row) => edit(row),
        None => log::debug!("no row with id {:?}, edit ignored", id),
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        value: i32,
    }

    impl Entity for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "r1".to_string(), value: 1 },
            Row { id: "r2".to_string(), value: 2 },
        ]
    }

    #[test]
    fn test_update_by_id_touches_only_target() {
        let updated = update_by_id(rows(), "r2", |row| row.value = 20);
        assert_eq!(updated[0], rows()[0]);
        assert_eq!(updated[1].value, 20);
    }

    #[test]
    fn test_update_by_id_unknown_is_noop() {
        let updated = update_by_id(rows(), "missing", |row| row.value = 99);
        assert_eq!(updated, rows());
    }

    #[test]
    fn test_find_by_id() {
        let rows = rows();
        assert_eq!(find_by_id(&rows, "r1").map(|r| r.value), Some(1));
        assert!(find_by_id(&rows, "r3").is_none());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidInput("status `done`".to_string());
        assert_eq!(err.to_string(), "Invalid input: status `done`");
    }
}

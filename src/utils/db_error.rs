use sqlx::Error;

/// Whether the error is a unique-constraint violation on the slug column.
///
/// The slug index is the only unique constraint on the table, so any unique
/// violation reported by the store is a slug collision.
pub fn is_unique_violation_on_slug(e: &Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}

//! Diesel schema for task record persistence.

diesel::table! {
    /// Task records managed by the service.
    tasks (id) {
        /// Storage-assigned row identifier.
        id -> BigInt,
        /// Trimmed, non-empty title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Lifecycle status in canonical string form.
        status -> Text,
        /// Urgency level in canonical string form.
        priority -> Text,
        /// Creation timestamp.
        created_at -> TimestamptzSqlite,
        /// Last update timestamp, null until the first update.
        updated_at -> Nullable<TimestamptzSqlite>,
        /// Optional due date.
        due_date -> Nullable<TimestamptzSqlite>,
        /// Optional assignee.
        assigned_to -> Nullable<Text>,
    }
}

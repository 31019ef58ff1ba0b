//! Diesel schema for employee and task persistence.

diesel::table! {
    /// Employee records.
    employees (id) {
        /// Employee identifier.
        id -> Uuid,
        /// Employee full name, the sort key for listings.
        #[max_length = 255]
        fio -> Varchar,
    }
}

diesel::table! {
    /// Task records, each owned by exactly one employee.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning employee identifier.
        employee_id -> Uuid,
        /// Task description.
        description -> Text,
        /// Task lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last status-change timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(tasks -> employees (employee_id));
diesel::allow_tables_to_appear_in_same_query!(employees, tasks);

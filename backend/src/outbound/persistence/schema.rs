//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// Employee records.
    ///
    /// `email` and `employee_number` carry unique constraints; first and
    /// last names are indexed for lookups.
    employees (id) {
        /// Primary key: auto-incrementing integer.
        id -> Int4,
        first_name -> Varchar,
        last_name -> Varchar,
        title -> Varchar,
        email -> Varchar,
        role -> Varchar,
        /// Four-digit badge number, unique per employee.
        employee_number -> Int4,
        organisation -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

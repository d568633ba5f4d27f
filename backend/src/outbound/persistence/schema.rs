//! Diesel table definitions matching `migrations/`.

diesel::table! {
    /// Stored user profiles.
    users (id) {
        id -> Int4,
        #[max_length = 30]
        name -> Varchar,
        date_of_birth -> Date,
        #[max_length = 100]
        address -> Varchar,
        #[max_length = 100]
        description -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

//! Diesel table definitions; keep in step with `backend/migrations`.

diesel::table! {
    /// Contact records.
    contacts (id) {
        /// Serial primary key.
        id -> Int4,
        /// Display name.
        name -> Text,
        /// Phone number as supplied by the client.
        phone -> Text,
        /// Optional owning account.
        owner_id -> Nullable<Int4>,
    }
}

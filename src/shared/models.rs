pub mod schema {
    diesel::table! {
        tasks (id) {
            id -> Integer,
            content -> Text,
            complete -> Integer,
            due_date -> Nullable<Date>,
            created_at -> Timestamp,
        }
    }
}

pub mod list_state;
pub mod table_state;

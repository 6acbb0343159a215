pub mod console;
pub mod sql;

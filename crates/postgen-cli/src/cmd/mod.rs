pub mod daily;
pub mod weekly;

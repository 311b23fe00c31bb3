pub mod average;
pub mod daily;
pub mod weekly;

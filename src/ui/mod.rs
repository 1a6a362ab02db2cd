pub mod panels;
pub mod stats;
pub mod table;

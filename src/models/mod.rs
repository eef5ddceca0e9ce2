pub mod boundary;
pub mod mode;
pub mod report;
pub mod row;
pub mod time_value;

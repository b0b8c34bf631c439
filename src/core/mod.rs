pub mod calendar;
pub mod date_header;
pub mod line;

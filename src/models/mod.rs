pub mod city;
pub mod filters;
pub mod trip;

pub use city::City;
pub use filters::{DayFilter, FilterSelection, MonthFilter, TripMonth};
pub use trip::Trip;

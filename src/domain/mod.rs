pub mod availability;
pub mod booked_week;
pub mod inquiry;
pub mod locale;
pub mod season;
pub mod selection;

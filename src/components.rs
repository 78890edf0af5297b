pub mod running_status_indicator;
pub mod status_indicator;

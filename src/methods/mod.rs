pub mod booking;
pub mod standard_replies;

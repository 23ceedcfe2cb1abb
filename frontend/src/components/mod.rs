pub mod course_card;
pub mod navbar;

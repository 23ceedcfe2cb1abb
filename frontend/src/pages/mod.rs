pub mod about;
pub mod contact;
pub mod course_details;
pub mod courses;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

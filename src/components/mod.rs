pub mod email_field;
pub mod face_report;
pub mod image_picker;
pub mod nav_bar;

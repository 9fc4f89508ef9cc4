pub mod extract_text;
pub mod face_detection;
pub mod home;

pub mod grades;
pub mod home;
pub mod lecturers;
pub mod students;

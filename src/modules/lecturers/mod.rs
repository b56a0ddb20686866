pub mod controller;
pub mod router;
pub mod service;

pub use registrar_models::lecturers::Lecturer;
pub use router::init_lecturers_router;

pub mod controller;
pub mod router;

pub use registrar_models::students::*;
pub use router::init_students_router;

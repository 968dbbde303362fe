//! Session bookings made by alunos

mod service;

pub use service::AlunoService;

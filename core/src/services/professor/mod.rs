//! Professor profile management

mod service;

#[cfg(test)]
mod tests;

pub use service::ProfessorService;

//! Session module: login, refresh rotation and logout

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionService;

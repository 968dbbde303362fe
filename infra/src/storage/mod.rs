//! Photo storage backends

pub mod local_disk;

pub use local_disk::{content_type_for, LocalDiskStorage};

pub mod about;
pub mod api;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod math;

pub use crate::domain::model::{Field, ModuleDescriptor};
pub use crate::domain::ports::AboutModule;
pub use crate::utils::error::Result;

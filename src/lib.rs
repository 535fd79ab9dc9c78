pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "ffi")]
pub use self::core::ffi::{melt_the_code_c, melt_the_code_table, MeltTheCodeTable};

pub use config::Variant;
pub use self::core::{about::about_module, api::melt_the_code, api::CodeMeltedApi, api::ProviderState, math::UseMath};
pub use domain::{model::ModuleDescriptor, ports::AboutModule};
pub use utils::error::{MeltError, Result};

//! C-compatible access to the module.
//!
//! C callers obtain a [`MeltTheCodeTable`] from [`melt_the_code_c`] and call
//! through its function pointers. The table is built on the first call and
//! the same pointer is handed out afterwards. The crate also builds as a
//! `staticlib`, so C programs link `libmelt_the_code.a` directly.

use crate::config::C_ABOUT_NUL;
use crate::core::api::ProviderState;
use std::ffi::{c_char, CStr};
use std::sync::OnceLock;

const ABOUT_MODULE_C: &CStr = match CStr::from_bytes_with_nul(C_ABOUT_NUL.as_bytes()) {
    Ok(text) => text,
    Err(_) => panic!("about text must hold exactly one trailing NUL"),
};

static TABLE: OnceLock<MeltTheCodeTable> = OnceLock::new();

#[repr(C)]
#[derive(Debug)]
pub struct MeltTheCodeTable {
    /// Returns a static, NUL-terminated string. Callers must not free it.
    pub about_module: extern "C" fn() -> *const c_char,
}

extern "C" fn about_module_c() -> *const c_char {
    ABOUT_MODULE_C.as_ptr()
}

/// Safe Rust view of the text served through the table.
pub fn about_module_cstr() -> &'static CStr {
    ABOUT_MODULE_C
}

pub fn melt_the_code_table() -> &'static MeltTheCodeTable {
    TABLE.get_or_init(|| {
        tracing::debug!("melt_the_code C function table populated");
        MeltTheCodeTable {
            about_module: about_module_c,
        }
    })
}

pub fn table_state() -> ProviderState {
    if TABLE.get().is_some() {
        ProviderState::Initialized
    } else {
        ProviderState::Uninitialized
    }
}

/// Entry point for C callers. Never returns null.
#[no_mangle]
pub extern "C" fn melt_the_code_c() -> *const MeltTheCodeTable {
    melt_the_code_table()
}

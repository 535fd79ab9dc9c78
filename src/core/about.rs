use crate::config::CPP_FUNCTION_ABOUT;

/// You just want to know what it is you are using.
pub fn about_module() -> &'static str {
    CPP_FUNCTION_ABOUT
}

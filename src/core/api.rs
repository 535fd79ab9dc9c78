use crate::config::{Variant, CPP_ABOUT};
use crate::core::math::UseMath;
use crate::domain::ports::AboutModule;
use std::sync::OnceLock;

static INSTANCE: OnceLock<CodeMeltedApi> = OnceLock::new();

/// Whether a lazily built provider has been created yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    Uninitialized,
    Initialized,
}

/// The process-wide API handle. Only reachable through [`melt_the_code`].
#[derive(Debug)]
pub struct CodeMeltedApi {
    about: &'static str,
    math: UseMath,
}

impl CodeMeltedApi {
    fn new() -> Self {
        tracing::debug!("melt_the_code API initialized");
        Self {
            about: CPP_ABOUT,
            math: UseMath,
        }
    }

    fn instance() -> &'static CodeMeltedApi {
        INSTANCE.get_or_init(Self::new)
    }

    /// You just want to know what it is you are using.
    pub fn about_module(&self) -> &'static str {
        self.about
    }

    /// Math is hard. Remembering formulas is even harder.
    pub fn use_math(&self) -> &UseMath {
        &self.math
    }

    pub fn variant(&self) -> Variant {
        Variant::Cpp
    }

    pub fn state() -> ProviderState {
        if INSTANCE.get().is_some() {
            ProviderState::Initialized
        } else {
            ProviderState::Uninitialized
        }
    }
}

impl AboutModule for CodeMeltedApi {
    fn about_module(&self) -> &str {
        self.about
    }
}

/// Provides the access point into the melt_the_code module.
pub fn melt_the_code() -> &'static CodeMeltedApi {
    CodeMeltedApi::instance()
}

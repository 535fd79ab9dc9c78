//! Compile-time descriptor constants for every known copy of the module.
//!
//! Nothing here is read at runtime: each [`Variant`] maps to a `&'static str`
//! assembled by `about_module_text!` when the crate is compiled.

use crate::domain::model::ModuleDescriptor;
use crate::domain::ports::AboutModule;
use crate::utils::error::{MeltError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[cfg(windows)]
macro_rules! line_ending {
    () => {
        "\r\n"
    };
}

#[cfg(not(windows))]
macro_rules! line_ending {
    () => {
        "\n"
    };
}

/// Builds the four-line descriptor text as a single string literal.
macro_rules! about_module_text {
    (
        title: $title:literal,
        version: $version:literal,
        released: $released:literal,
        website: $website:literal,
        license: $license:literal $(,)?
    ) => {
        concat!(
            "TITLE:    ", $title, line_ending!(),
            "VERSION:  ", $version, " (Released on ", $released, ")", line_ending!(),
            "WEBSITE:  ", $website, line_ending!(),
            "LICENSE:  ", $license, line_ending!(),
        )
    };
}

/// Line terminator placed after every descriptor line.
pub const LINE_ENDING: &str = line_ending!();

pub const CPP_ABOUT: &str = about_module_text!(
    title: "melt_the_code C++ Module",
    version: "v0.1.0",
    released: "18 Feb 2023",
    website: "https://codemelted.dev/modules/cpp/melt_the_code",
    license: "MIT / © 2023 Mark Shaffer. All Rights Reserved.",
);

pub const CPP_FUNCTION_ABOUT: &str = about_module_text!(
    title: "melt_the_code_cpp Module",
    version: "v0.1.0",
    released: "18 Feb 2023",
    website: "https://codemelted.dev/modules/cpp/melt_the_code",
    license: "MIT / © 2023 Mark Shaffer. All Rights Reserved.",
);

macro_rules! c_about {
    () => {
        about_module_text!(
            title: "melt_the_code C Module",
            version: "v0.1.0",
            released: "18 Feb 2023",
            website: "https://codemelted.dev/modules/c/melt_the_code",
            license: "MIT / © 2023 Mark Shaffer. All Rights Reserved.",
        )
    };
}

pub const C_ABOUT: &str = c_about!();

/// `C_ABOUT` with a trailing NUL, handed across the C ABI.
pub(crate) const C_ABOUT_NUL: &str = concat!(c_about!(), "\0");

pub const WEB_ABOUT: &str = about_module_text!(
    title: "melt_the_code_web Module",
    version: "v0.1.0",
    released: "18 Feb 2023",
    website: "https://codemelted.dev/modules/deno/melt_the_code",
    license: "MIT / © 2023 Mark Shaffer. All Rights Reserved.",
);

pub const DENO_ABOUT: &str = about_module_text!(
    title: "melt_the_code Deno Module",
    version: "v0.3.0-alpha",
    released: "10 Nov 2022",
    website: "https://codemelted.dev/modules/deno/melt_the_code",
    license: "MIT / © 2022 Mark Shaffer. All Rights Reserved.",
);

/// One historical copy of the module, each with its own descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Namespaced singleton, reached through `melt_the_code()`.
    Cpp,
    /// Plain free function.
    CppFunction,
    /// Struct of function pointers for C callers.
    C,
    Web,
    Deno,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Cpp,
        Variant::CppFunction,
        Variant::C,
        Variant::Web,
        Variant::Deno,
    ];

    pub fn about_text(self) -> &'static str {
        match self {
            Variant::Cpp => CPP_ABOUT,
            Variant::CppFunction => CPP_FUNCTION_ABOUT,
            Variant::C => C_ABOUT,
            Variant::Web => WEB_ABOUT,
            Variant::Deno => DENO_ABOUT,
        }
    }

    pub fn website(self) -> &'static str {
        match self {
            Variant::Cpp | Variant::CppFunction => {
                "https://codemelted.dev/modules/cpp/melt_the_code"
            }
            Variant::C => "https://codemelted.dev/modules/c/melt_the_code",
            Variant::Web | Variant::Deno => "https://codemelted.dev/modules/deno/melt_the_code",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Cpp => "cpp",
            Variant::CppFunction => "cpp-function",
            Variant::C => "c",
            Variant::Web => "web",
            Variant::Deno => "deno",
        }
    }

    /// Parses this variant's text into a typed descriptor.
    pub fn descriptor(self) -> Result<ModuleDescriptor> {
        ModuleDescriptor::parse(self.about_text())
    }
}

impl AboutModule for Variant {
    fn about_module(&self) -> &str {
        self.about_text()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = MeltError;

    fn from_str(s: &str) -> Result<Self> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeltError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

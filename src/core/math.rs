//! Common formulas reached through [`CodeMeltedApi::use_math`].
//!
//! [`CodeMeltedApi::use_math`]: crate::core::api::CodeMeltedApi::use_math

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_OFFSET: f64 = 32.0;
const CELSIUS_TO_FAHRENHEIT: f64 = 9.0 / 5.0;
const FAHRENHEIT_TO_CELSIUS: f64 = 5.0 / 9.0;

/// Temperature conversions. Stateless; every method is a pure function.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UseMath;

impl UseMath {
    pub fn celsius_to_fahrenheit(&self, v: f64) -> f64 {
        v * CELSIUS_TO_FAHRENHEIT + FAHRENHEIT_OFFSET
    }

    pub fn celsius_to_kelvin(&self, v: f64) -> f64 {
        v + KELVIN_OFFSET
    }

    pub fn fahrenheit_to_celsius(&self, v: f64) -> f64 {
        (v - FAHRENHEIT_OFFSET) * FAHRENHEIT_TO_CELSIUS
    }

    pub fn fahrenheit_to_kelvin(&self, v: f64) -> f64 {
        self.fahrenheit_to_celsius(v) + KELVIN_OFFSET
    }

    pub fn kelvin_to_celsius(&self, v: f64) -> f64 {
        v - KELVIN_OFFSET
    }

    pub fn kelvin_to_fahrenheit(&self, v: f64) -> f64 {
        self.celsius_to_fahrenheit(self.kelvin_to_celsius(v))
    }
}

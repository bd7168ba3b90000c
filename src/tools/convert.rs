//! Kitchen unit conversion

use serde::{Deserialize, Serialize};

/// Volume units supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    Cup,
    Tbsp,
    Tsp,
    Ml,
    FlOz,
}

impl VolumeUnit {
    /// Milliliters per unit
    fn to_ml(self) -> f64 {
        match self {
            VolumeUnit::Cup => 236.588,
            VolumeUnit::Tbsp => 14.787,
            VolumeUnit::Tsp => 4.929,
            VolumeUnit::Ml => 1.0,
            VolumeUnit::FlOz => 29.574,
        }
    }
}

/// Weight units supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    G,
    Oz,
}

impl WeightUnit {
    /// Grams per unit
    fn to_g(self) -> f64 {
        match self {
            WeightUnit::G => 1.0,
            WeightUnit::Oz => 28.35,
        }
    }
}

/// Temperature scales supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    F,
    C,
}

/// Convert a volume between units via milliliters
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    value * from.to_ml() / to.to_ml()
}

/// Convert a weight between units via grams
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    value * from.to_g() / to.to_g()
}

/// Convert a temperature between Fahrenheit and Celsius
pub fn convert_temp(value: f64, from: TempUnit, to: TempUnit) -> f64 {
    if from == to {
        return value;
    }
    match from {
        TempUnit::F => (value - 32.0) * (5.0 / 9.0),
        TempUnit::C => value * (9.0 / 5.0) + 32.0,
    }
}

//! Static measurement reference table

use serde::Serialize;

/// One row of the measurement reference
#[derive(Debug, Clone, Serialize)]
pub struct Measure {
    pub name: &'static str,
    pub amount: &'static str,
    pub notes: &'static str,
}

/// Quick reference for pinch, dash, and other cooking measures
pub const MEASUREMENTS: &[Measure] = &[
    Measure {
        name: "Pinch",
        amount: "~1/16 tsp",
        notes: "What you can hold between thumb and finger.",
    },
    Measure {
        name: "Dash",
        amount: "~1/8 tsp",
        notes: "A quick shake; less than a pinch.",
    },
    Measure {
        name: "Smidgen",
        amount: "~1/32 tsp",
        notes: "Half of a pinch.",
    },
    Measure {
        name: "Drop",
        amount: "~1/64 tsp",
        notes: "One drop from a dropper.",
    },
    Measure {
        name: "Teaspoon (tsp)",
        amount: "5 ml",
        notes: "Standard measuring spoon.",
    },
    Measure {
        name: "Tablespoon (tbsp)",
        amount: "15 ml / 3 tsp",
        notes: "Standard measuring spoon.",
    },
    Measure {
        name: "Fluid ounce (fl oz)",
        amount: "~30 ml / 2 tbsp",
        notes: "Volume, not weight.",
    },
    Measure {
        name: "Cup",
        amount: "240 ml / 16 tbsp",
        notes: "US cup; metric cup is 250 ml.",
    },
    Measure {
        name: "Stick of butter (US)",
        amount: "1/2 cup / 113 g",
        notes: "8 tbsp.",
    },
    Measure {
        name: "Heaping spoon",
        amount: "Spoon + mound on top",
        notes: "Not leveled off.",
    },
    Measure {
        name: "Scant",
        amount: "Just under the measure",
        notes: "e.g. scant cup = slightly less than 1 cup.",
    },
    Measure {
        name: "To taste",
        amount: "\u{2014}",
        notes: "Add until it tastes right to you.",
    },
];

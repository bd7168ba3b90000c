//! Recipe scaling: ingredient-line parsing and amount formatting
//!
//! Lines that start with an amount and a unit ("2 cups flour", "1/2 tsp
//! salt") are scaled by the servings ratio; anything else passes through
//! untouched.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, digit0, digit1, space0, space1},
    combinator::{map, map_res, opt, recognize, verify},
    sequence::{pair, preceded, separated_pair},
    IResult,
};
use serde::Serialize;

/// An ingredient line broken into its scalable parts
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub amount: f64,
    pub unit: String,
    pub rest: String,
}

/// One output line of a scaled recipe
#[derive(Debug, Clone, Serialize)]
pub struct ScaledLine {
    /// The line as the user typed it
    pub text: String,
    /// The rewritten line, present only when the line was scalable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaled: Option<String>,
}

fn integer(i: &str) -> IResult<&str, f64> {
    map_res(digit1, str::parse::<f64>)(i)
}

/// "1/2" style fraction; zero denominators do not parse
fn fraction(i: &str) -> IResult<&str, f64> {
    map(
        verify(separated_pair(integer, char('/'), integer), |(_, den)| {
            *den != 0.0
        }),
        |(num, den)| num / den,
    )(i)
}

/// "2", "2." or "2.5" style decimal
fn decimal(i: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        str::parse::<f64>,
    )(i)
}

fn amount(i: &str) -> IResult<&str, f64> {
    alt((fraction, decimal))(i)
}

fn unit(i: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(i)
}

/// Parse "amount unit rest" from the start of a line
///
/// The unit must be followed by at least one space; a bare "2 cups" with no
/// ingredient text is not considered scalable.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let trimmed = line.trim();
    let (remaining, (amount, unit)) = pair(amount, preceded(space0, unit))(trimmed).ok()?;
    let (rest, _) = space1::<&str, nom::error::Error<&str>>(remaining).ok()?;

    Some(ParsedLine {
        amount,
        unit: unit.to_string(),
        rest: rest.to_string(),
    })
}

/// Scale an amount by the ratio of new to original servings
pub fn scale_amount(amount: f64, from_servings: u32, to_servings: u32) -> f64 {
    if from_servings == 0 {
        return amount;
    }
    amount * to_servings as f64 / from_servings as f64
}

/// Format a scaled amount the way a cook would write it
///
/// Near-whole amounts under 100 print as integers, small amounts snap to
/// common fractions, everything else gets two decimals with trailing zeros
/// trimmed.
pub fn format_amount(n: f64) -> String {
    if n >= 1.0 && n < 100.0 && (n - n.round()).abs() < 0.01 {
        return format!("{}", n.round() as i64);
    }

    if n > 0.0 && n < 1.0 {
        const FRACTIONS: [(f64, &str); 5] = [
            (1.0 / 4.0, "1/4"),
            (1.0 / 3.0, "1/3"),
            (1.0 / 2.0, "1/2"),
            (2.0 / 3.0, "2/3"),
            (3.0 / 4.0, "3/4"),
        ];
        for (value, text) in FRACTIONS {
            if (n - value).abs() < 0.05 {
                return text.to_string();
            }
        }
    }

    let mut formatted = format!("{:.2}", n);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }
    formatted
}

/// Scale every line of a recipe by the servings ratio
pub fn scale_lines(input: &str, from_servings: u32, to_servings: u32) -> Vec<ScaledLine> {
    input
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let scaled = parse_line(line).map(|parsed| {
                let amount = scale_amount(parsed.amount, from_servings, to_servings);
                format!("{} {} {}", format_amount(amount), parsed.unit, parsed.rest)
                    .trim_end()
                    .to_string()
            });
            ScaledLine {
                text: line.to_string(),
                scaled,
            }
        })
        .collect()
}

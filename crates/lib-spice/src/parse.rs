//! Impedance expression parser.
//!
//! Accepts the rectangular notation used on the command line: `10+10j`,
//! `1000-100j`, a bare resistance `50`, a bare reactance `-75j`, and an
//! optionally parenthesized form `(10+10j)`. Scientific notation is allowed
//! in either part.

use crate::error::SpiceError;
use lib_types::Impedance;
use nom::{
    branch::alt,
    character::complete::char,
    combinator::all_consuming,
    number::complete::double,
    sequence::delimited,
    IResult, Parser,
};

/// Parse an impedance expression.
pub fn parse_impedance(input: &str) -> Result<Impedance, SpiceError> {
    let (_, z) = all_consuming(impedance).parse(input.trim())?;
    Ok(z)
}

fn impedance(input: &str) -> IResult<&str, Impedance> {
    alt((
        delimited(char('('), complex_expr, char(')')),
        complex_expr,
    ))
    .parse(input)
}

fn complex_expr(input: &str) -> IResult<&str, Impedance> {
    alt((rect_form, imaginary_only, real_only)).parse(input)
}

/// `R+Xj` or `R-Xj`; the sign travels with the imaginary number.
fn rect_form(input: &str) -> IResult<&str, Impedance> {
    let (input, re) = double(input)?;
    let (input, im) = double(input)?;
    let (input, _) = char('j')(input)?;
    Ok((input, Impedance::new(re, im)))
}

fn imaginary_only(input: &str) -> IResult<&str, Impedance> {
    let (input, im) = double(input)?;
    let (input, _) = char('j')(input)?;
    Ok((input, Impedance::new(0.0, im)))
}

fn real_only(input: &str) -> IResult<&str, Impedance> {
    let (input, re) = double(input)?;
    Ok((input, Impedance::new(re, 0.0)))
}

//! Report formatting and printing.

use anyhow::Result;
use lib_spice::eng::sig6;
use lib_spice::Subcircuit;
use lib_types::{Hertz, Impedance, LadderNetwork, Ohms};
use std::fmt::Write;

/// Everything the report needs about a finished design.
pub struct Design {
    pub name: String,
    pub zg: Impedance,
    pub rl: Ohms,
    pub quality: f64,
    pub frequency: Option<Hertz>,
    /// Realized input impedance returned by the validator.
    pub zin: Impedance,
    /// Ladder in emission order (already reversed if requested).
    pub ladder: LadderNetwork,
}

pub fn print_text(design: &Design) -> Result<()> {
    print!("{}", render_text(design)?);
    Ok(())
}

pub fn print_json(design: &Design) -> Result<()> {
    println!("{}", render_json(design)?);
    Ok(())
}

/// Render the text report: a comment header with the design figures followed
/// by the subcircuit block, or the raw reactances when no frequency was
/// given.
fn render_text(design: &Design) -> Result<String> {
    let mut out = String::new();

    let Some(f) = design.frequency else {
        writeln!(out, "The subcircuit cannot be printed since no frequency was given.")?;
        let reactances: Vec<String> = design
            .ladder
            .reactances
            .iter()
            .copied()
            .map(sig6)
            .collect();
        writeln!(out, "Here are the reactances instead (ohm): [{}]", reactances.join(", "))?;
        return Ok(out);
    };

    writeln!(out, "* Fd  = {} MHz", sig6(f.as_mhz()))?;
    writeln!(out, "* BW  = {} MHz", sig6((f / design.quality).as_mhz()))?;
    writeln!(out, "* Q   = {}", sig6(design.quality))?;
    writeln!(out, "* RL  = {}", sig6(design.rl.0))?;
    writeln!(out, "* ZG  = {}", fmt_complex(design.zg))?;
    writeln!(out, "* Zin = {}", fmt_complex(rounded_zin(design)))?;
    writeln!(out)?;

    let subcircuit = Subcircuit::from_ladder(&design.ladder, f, design.name.as_str())?;
    writeln!(out, "{subcircuit}")?;

    Ok(out)
}

/// Render the same design as a JSON document.
fn render_json(design: &Design) -> Result<String> {
    let subcircuit = design
        .frequency
        .map(|f| Subcircuit::from_ladder(&design.ladder, f, design.name.as_str()))
        .transpose()?;

    let json = serde_json::json!({
        "name": design.name,
        "frequency_hz": design.frequency.map(|f| f.0),
        "bandwidth_hz": design.frequency.map(|f| (f / design.quality).0),
        "q": design.quality,
        "rl_ohm": design.rl.0,
        "zg_ohm": design.zg,
        "zin_ohm": rounded_zin(design),
        "first_element": design.ladder.first,
        "reactances_ohm": design.ladder.reactances,
        "subcircuit": subcircuit,
    });

    Ok(serde_json::to_string_pretty(&json)?)
}

/// Zin rounded to 9 decimal digits for reporting; the realized value may
/// carry sub-tolerance noise from the ladder fold.
fn rounded_zin(design: &Design) -> Impedance {
    Impedance::new(round9(design.zin.resistance()), round9(design.zin.reactance()))
}

fn round9(v: f64) -> f64 {
    (v * 1e9).round() / 1e9
}

fn fmt_complex(z: Impedance) -> String {
    if z.reactance() < 0.0 {
        format!("{}-{}j", sig6(z.resistance()), sig6(-z.reactance()))
    } else {
        format!("{}+{}j", sig6(z.resistance()), sig6(z.reactance()))
    }
}

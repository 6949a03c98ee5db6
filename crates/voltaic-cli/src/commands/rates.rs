//! Anti-aliasing table command.

use clap::{Args, ValueEnum};
use voltaic_core::aafilter::design;
use voltaic_core::{AaProfile, FilterRole, SupportedRate};

/// Filter profiles selectable on the command line
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum CliProfile {
    /// Ripples ladder filter
    #[default]
    Ladder,
    /// Shelves equalizer
    Equalizer,
    /// Streams VCA/LPG
    Dynamics,
}

impl From<CliProfile> for AaProfile {
    fn from(p: CliProfile) -> Self {
        match p {
            CliProfile::Ladder => AaProfile::Ladder,
            CliProfile::Equalizer => AaProfile::Equalizer,
            CliProfile::Dynamics => AaProfile::Dynamics,
        }
    }
}

#[derive(Args)]
pub struct RatesArgs {
    /// Profile to show; all three when omitted
    #[arg(short, long, value_enum)]
    profile: Option<CliProfile>,
}

/// One row per supported rate: rate, factor, core rate, up and down
/// section counts.
fn table(profile: AaProfile) -> Vec<(u32, usize, u32, usize, usize)> {
    SupportedRate::ALL
        .iter()
        .map(|&rate| {
            let up = design(profile, FilterRole::Upsampling, rate);
            let down = design(profile, FilterRole::Downsampling, rate);
            (
                rate.hz(),
                up.oversampling_factor,
                rate.hz() * up.oversampling_factor as u32,
                up.sections.len(),
                down.sections.len(),
            )
        })
        .collect()
}

pub fn run(args: RatesArgs) -> anyhow::Result<()> {
    let profiles = match args.profile {
        Some(p) => vec![p],
        None => vec![CliProfile::Ladder, CliProfile::Equalizer, CliProfile::Dynamics],
    };

    for (i, profile) in profiles.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{:?} profile", profile);
        println!(
            "  {:>8}  {:>6}  {:>10}  {:>4}  {:>4}",
            "rate", "factor", "core", "up", "down"
        );
        for (rate, factor, core, up, down) in table(profile.into()) {
            println!("  {rate:>8}  {factor:>6}  {core:>10}  {up:>4}  {down:>4}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_rate() {
        let rows = table(AaProfile::Dynamics);
        assert_eq!(rows.len(), SupportedRate::COUNT);
        assert_eq!(rows[0].0, 8000);
        let at_48k = rows.iter().find(|r| r.0 == 48000).unwrap();
        assert_eq!(at_48k.1, 2);
        assert_eq!(at_48k.2, 96000);
    }

    #[test]
    fn ladder_shares_one_cascade() {
        for (_, _, _, up, down) in table(AaProfile::Ladder) {
            assert_eq!(up, down);
        }
    }
}

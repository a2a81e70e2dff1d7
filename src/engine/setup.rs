use crate::core::{Amount, FundSpec, GameMode};

use anyhow::{bail, Context, Result};
use std::str::FromStr;

/// Arguments of a `newgame` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    pub fund: Option<Amount>,
    pub packets: Option<usize>,
    pub mode: GameMode,
    pub min_value: Option<Amount>,
    pub max_value: Option<Amount>,
}

impl GameSetup {
    /// Build the fund specification, applying the host setup limits.
    pub fn to_spec(&self) -> Result<FundSpec> {
        let fund = self.fund.context("missing fund")?;
        let packets = self.packets.context("missing packets")?;

        let spec = FundSpec::new(fund, packets, self.min_value, self.max_value)?;
        spec.validate_setup()?;
        Ok(spec)
    }
}

impl FromStr for GameSetup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = 0;
        let mut setup = GameSetup::default();

        let parts = s.split_whitespace().collect::<Vec<_>>();

        while i < parts.len() {
            match parts[i] {
                "fund" if i + 1 < parts.len() => {
                    setup.fund = Some(parts[i + 1].replace('.', "").parse().context("invalid fund")?);
                    i += 1;
                }
                "packets" if i + 1 < parts.len() => {
                    setup.packets = Some(parts[i + 1].parse().context("invalid packets")?);
                    i += 1;
                }
                "mode" if i + 1 < parts.len() => {
                    setup.mode = parts[i + 1].parse()?;
                    i += 1;
                }
                "min" if i + 1 < parts.len() => {
                    setup.min_value = Some(parts[i + 1].parse().context("invalid min")?);
                    i += 1;
                }
                "max" if i + 1 < parts.len() => {
                    setup.max_value = Some(parts[i + 1].parse().context("invalid max")?);
                    i += 1;
                }
                p => bail!("invalid newgame argument {}", p)
            }
            i += 1;
        }
        Ok(setup)
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            fund: None,
            packets: None,
            mode: GameMode::Normal,
            min_value: None,
            max_value: None,
        }
    }
}

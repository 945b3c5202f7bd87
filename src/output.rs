pub(crate) mod exit;
pub(crate) mod log;
pub(crate) mod report;
pub(crate) mod status;

use std::str::FromStr;

pub(crate) enum Output {
    Text,
    Silent,
}

impl FromStr for Output {
    type Err = String;

    fn from_str(output: &str) -> Result<Self, Self::Err> {
        match output {
            "text" => Ok(Self::Text),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("{}: not a valid result output", output)),
        }
    }
}

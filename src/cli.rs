//! Command-line interface.
//!
//! The generator takes no options; clap provides `--help` and `--version`
//! and rejects anything else.

use clap::Parser;

/// sfx-gen: regenerate the UI sound effect assets
#[derive(Parser, Debug)]
#[command(name = "sfx-gen")]
#[command(about = "Renders the click/correct/incorrect/transition/success sounds to public/sfx")]
#[command(version)]
pub struct Cli {}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_no_arguments() {
        assert!(Cli::try_parse_from(["sfx-gen"]).is_ok());
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["sfx-gen", "--volume", "0.8"]).is_err());
        assert!(Cli::try_parse_from(["sfx-gen", "extra"]).is_err());
    }
}

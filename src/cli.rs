use clap::Parser;

/// A small terminal menu that launches a countdown timer, an about page and a sub-list.
///
/// Takes no arguments. Settings are read from `$AUTOMATA_CONFIG`, or
/// `<config dir>/automata/config.toml` when that is unset.
#[derive(Parser, Debug)]
#[command(name = "automata", version, about, long_about = None)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rejects_arguments() {
        assert!(Cli::try_parse_from(["automata"]).is_ok());
        assert!(Cli::try_parse_from(["automata", "extra"]).is_err());
        assert!(Cli::try_parse_from(["automata", "--timer-secs", "5"]).is_err());
    }
}

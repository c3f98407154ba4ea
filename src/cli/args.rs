use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quicktr")]
#[command(about = "Translate short queries with the Google or Microsoft translation APIs")]
#[command(version)]
pub struct Args {
    /// Free-text query to translate
    pub query: Option<String>,

    /// Store the API key for the selected service
    #[arg(long = "setkey", value_name = "KEY")]
    pub set_key: Option<String>,

    /// Select the translation service (GOOGL or MSFT); with no value, list the choices
    #[arg(long = "setapi", value_name = "TAG", num_args = 0..=1)]
    pub set_api: Option<Option<String>>,

    /// Persist the target language code for the selected service
    #[arg(long = "setlang", value_name = "CODE")]
    pub set_lang: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Match the selected service's target languages by name prefix
    Languages {
        /// Display-name prefix (all languages when omitted)
        prefix: Option<String>,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parses_as_positional() {
        let args = Args::try_parse_from(["quicktr", "good morning"]).unwrap();
        assert_eq!(args.query.as_deref(), Some("good morning"));
        assert!(args.set_api.is_none());
    }

    #[test]
    fn test_setapi_value_is_optional() {
        let args = Args::try_parse_from(["quicktr", "--setapi"]).unwrap();
        assert_eq!(args.set_api, Some(None));

        let args = Args::try_parse_from(["quicktr", "--setapi", "GOOGL"]).unwrap();
        assert_eq!(args.set_api, Some(Some("GOOGL".to_string())));
    }

    #[test]
    fn test_languages_subcommand_takes_prefix() {
        let args = Args::try_parse_from(["quicktr", "languages", "Span"]).unwrap();
        match args.command {
            Some(Command::Languages { prefix }) => assert_eq!(prefix.as_deref(), Some("Span")),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

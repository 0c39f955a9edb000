use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use template::ConvertOptions;

/// Convert a Liquid-style email template to static HTML
#[derive(Debug, Parser)]
#[command(name = "mailtpl", version, about, after_help = AFTER_HELP)]
pub struct Cli {
    /// Template file to convert ("-" reads stdin)
    pub template: PathBuf,

    /// JSON file with sample data overrides
    #[arg(short, long, value_name = "FILE", conflicts_with = "data_json")]
    pub data: Option<PathBuf>,

    /// Sample data overrides as inline JSON
    #[arg(long, value_name = "JSON")]
    pub data_json: Option<String>,

    /// Wrap the output in the 600px email shell
    #[arg(short, long, env = "MAILTPL_WRAP", value_parser = FalseyValueParser::new())]
    pub wrap: bool,

    /// Include the inline stylesheet when wrapping
    #[arg(long, env = "MAILTPL_INLINE_CSS", value_parser = FalseyValueParser::new())]
    pub inline_css: bool,

    /// Write HTML to this file instead of stdout ("-" is stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report the detected locale on stderr
    #[arg(long)]
    pub show_locale: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Conversion options selected on the command line
    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            wrap: self.wrap,
            inline_css: self.inline_css,
        }
    }
}

const AFTER_HELP: &str = "\
SAMPLE DATA:
  Overrides are merged over the built-in sample (event.customer_name,
  event.vehicle_make, event.license_plate_number, customer.first_name,
  customer.last_name, now, year). Top-level keys replace defaults whole.

  Set \"locale\" or \"language\" (or event./customer. variants) to pick the
  phrase table used by {{ t 'key' }}; override phrases under i18n.<code>.

  Examples:
    mailtpl welcome.liquid
    mailtpl welcome.liquid --data-json '{\"locale\": \"de\"}' --wrap --inline-css
    cat welcome.liquid | mailtpl - -d sample.json -o converted_email.html
";

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_options_from_flags() {
        let cli = Cli::parse_from(["mailtpl", "t.html", "--wrap", "--inline-css"]);
        assert_eq!(cli.options(), ConvertOptions::wrapped(true));

        let cli = Cli::parse_from(["mailtpl", "t.html"]);
        assert_eq!(cli.options(), ConvertOptions::default());
    }

    #[test]
    fn test_data_sources_conflict() {
        let result = Cli::try_parse_from(["mailtpl", "t.html", "-d", "a.json", "--data-json", "{}"]);
        assert!(result.is_err());
    }
}

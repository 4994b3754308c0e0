// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
//   link-sieve -c Peru model_output/gpt-4.1_Peru.txt model_output/sonar_pro_Peru.txt
//
// There are no flags for timeout, failure codes or output directory: those
// are fixed (see config.rs).
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-sieve",
    version = "0.1.0",
    about = "Validate the links a model returned and split them into valid and invalid sets",
    long_about = "link-sieve reads model-output text files, extracts the JSON block that follows \
                  'AI Returned Links:', checks every link with a HEAD request and writes \
                  {country}_links.json and {country}_invalid_links.json to the current directory."
)]
pub struct Cli {
    /// Country the links were collected for; names the output and log files
    #[arg(short = 'c', long = "country")]
    pub country: String,

    /// One or more model-output files, processed in the order given
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_country_and_inputs() {
        let cli = Cli::try_parse_from(["link-sieve", "-c", "Peru", "a.txt", "b.txt"]).unwrap();
        assert_eq!(cli.country, "Peru");
        assert_eq!(cli.inputs, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_country_is_required() {
        assert!(Cli::try_parse_from(["link-sieve", "a.txt"]).is_err());
    }

    #[test]
    fn test_at_least_one_input_is_required() {
        assert!(Cli::try_parse_from(["link-sieve", "-c", "Peru"]).is_err());
    }
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "srccat",
    version,
    about = "Concatenate matching source files into one annotated text file",
    long_about = "srccat walks a set of root directories in order, collects every file \
whose name ends in one of the accepted suffixes, and writes each file's relative path \
and verbatim contents into a single output file."
)]
pub struct Cli {
    /// Root directories to search, in order
    pub roots: Vec<PathBuf>,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accepted filename suffix (repeatable, case-sensitive)
    #[arg(short = 'e', long = "ext")]
    pub suffixes: Vec<String>,

    /// Header prefix written before each relative path
    #[arg(long)]
    pub prefix: Option<String>,

    /// Write a .srccat.yaml config template and exit
    #[arg(long)]
    pub init: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["srccat"]).unwrap();
        assert!(cli.roots.is_empty());
        assert!(cli.output.is_none());
        assert!(cli.suffixes.is_empty());
        assert!(cli.prefix.is_none());
        assert!(!cli.init);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_single_root() {
        let cli = Cli::try_parse_from(["srccat", "./app"]).unwrap();
        assert_eq!(cli.roots, vec![PathBuf::from("./app")]);
    }

    #[test]
    fn test_parse_multiple_roots() {
        let cli = Cli::try_parse_from(["srccat", "./app", "./lib", "./services"]).unwrap();
        assert_eq!(cli.roots.len(), 3);
        assert_eq!(cli.roots[0], PathBuf::from("./app"));
        assert_eq!(cli.roots[2], PathBuf::from("./services"));
    }

    #[test]
    fn test_parse_output() {
        let cli = Cli::try_parse_from(["srccat", "--output", "bundle.txt", "./app"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("bundle.txt")));
    }

    #[test]
    fn test_parse_output_short() {
        let cli = Cli::try_parse_from(["srccat", "-o", "bundle.txt"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("bundle.txt")));
    }

    #[test]
    fn test_parse_suffixes() {
        let cli = Cli::try_parse_from(["srccat", "-e", ".rs", "--ext", ".toml", "."]).unwrap();
        assert_eq!(cli.suffixes, vec![".rs".to_string(), ".toml".to_string()]);
    }

    #[test]
    fn test_parse_prefix() {
        let cli = Cli::try_parse_from(["srccat", "--prefix", "src/", "."]).unwrap();
        assert_eq!(cli.prefix, Some("src/".to_string()));
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["srccat", "--init"]).unwrap();
        assert!(cli.init);
    }

    #[test]
    fn test_parse_verbose() {
        let cli = Cli::try_parse_from(["srccat", "-v", "./app"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "srccat",
            "--output",
            "out.txt",
            "--ext",
            ".ts",
            "--ext",
            ".tsx",
            "--prefix",
            "app/",
            "--verbose",
            "./app",
            "./components",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.suffixes.len(), 2);
        assert_eq!(cli.prefix, Some("app/".to_string()));
        assert!(cli.verbose);
        assert_eq!(cli.roots.len(), 2);
    }
}

use clap::{Arg, ArgAction, Command};

/// Create and return an instance of [clap::Command], i.e. the Command Line Interface's parser
pub fn initialize() -> Command {
    Command::new("pagescraper")
        .version(crate::VERSION)
        .about("Fetch a single web page and list every link and image it references")
        .arg(
            Arg::new("url")
                .required(true)
                .value_name("URL")
                .help("The target URL; root-relative links and images are prefixed with it"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .action(ArgAction::Count)
                .help("Increase verbosity level (use -vv or more for greater effect)"),
        )
        .arg(
            Arg::new("debug_log")
                .long("debug-log")
                .value_name("FILE")
                .num_args(1)
                .help("Output file to write log entries (use w/ --json for JSON entries)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .requires("debug_log")
                .help("Emit JSON logs to --debug-log instead of normal text"),
        )
        .after_help(
            "EXAMPLE:\n    \
             List the links and images on a page:\n        \
             pagescraper https://example.com",
        )
}

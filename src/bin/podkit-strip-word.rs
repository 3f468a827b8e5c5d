use clap::Parser;
use podkit::cli::StripWordCli;
use podkit::commands::handle_strip_word;
use podkit::logging::init_cli_logging;

fn main() -> anyhow::Result<()> {
    init_cli_logging();
    let cli = StripWordCli::parse();
    handle_strip_word(&cli)
}

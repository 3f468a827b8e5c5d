use clap::Parser;
use podkit::cli::AddTextCli;
use podkit::commands::handle_add_text;
use podkit::logging::init_cli_logging;

fn main() -> anyhow::Result<()> {
    init_cli_logging();
    let cli = AddTextCli::parse();
    handle_add_text(&cli)
}

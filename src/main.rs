use colored::Colorize;
use pattern_demos::{cli, logging};

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if let Err(error) = logging::init_tracing(command_line_interface.verbosity()) {
        eprintln!("{} failed to install logger: {error}", "warning:".yellow().bold());
    }
    if let Err(error) = command_line_interface.run() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

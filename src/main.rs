use modgraph::cli::{Args, Command};
use modgraph::logging;
use std::process;

fn main() {
    let args = Args::parse_args();

    logging::init_tracing(args.verbose, args.quiet);

    let command = Command::from_args(args);
    process::exit(command.run());
}

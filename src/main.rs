use clap::Parser;
use dartmap::cli::{AnalyzeArgs, Cli, Command};
use dartmap::logger::init_logger;
use dartmap::{cmd_analyze, cmd_init};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let exit_code = match cli.command {
        Some(Command::Analyze(args)) => cmd_analyze(args),
        Some(Command::Init(args)) => cmd_init(args),
        None => {
            let args = AnalyzeArgs {
                path: cli.path,
                ..Default::default()
            };
            cmd_analyze(args)
        }
    };

    std::process::exit(exit_code);
}

use clap::Parser;
use mathfield_bin::cli::Cli;
use mathfield_log::LogConfig;

fn main() {
    let cli = Cli::parse();

    let _guard = mathfield_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    })
    .unwrap_or_else(|e| {
        eprintln!("Error: failed to initialize logging: {e}");
        std::process::exit(1);
    });

    if let Err(e) = mathfield_bin::run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

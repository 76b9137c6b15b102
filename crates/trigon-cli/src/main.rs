use clap::Parser;
use log::error;
use trigon_cli::Cli;

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level_override() {
        logger.filter_level(level);
    }
    logger.init();

    let stdout = std::io::stdout();
    if let Err(err) = trigon_cli::run(&cli, &mut stdout.lock()) {
        error!("{err:#}");
        std::process::exit(1);
    }
}

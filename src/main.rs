use std::io::{self, Write};

use clap::Parser;

use wyd::cli::{self, Cli};
use wyd::{Config, Workspace};

fn init_logger(dev: bool) {
    let level = if dev { "trace" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn main() {
    let cli = Cli::parse();
    let workspace = Workspace::current();

    let loaded = Config::load(workspace.config_path());
    init_logger(matches!(&loaded, Ok(Some(config)) if config.is_dev()));
    let config = cli::resolve_config(&workspace, loaded);

    if let Err(e) = cli::run(&cli, &workspace, config.as_ref(), &mut io::stdout()) {
        eprintln!("Error: {e} [{}]", e.error_code());
        std::process::exit(1);
    }
}

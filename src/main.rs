use std::env;

use wordpass::{cli, exits, tui};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            exits::prepare_terminal();
            tui::run();
        }
        _ => std::process::exit(cli::run(args)),
    }
}

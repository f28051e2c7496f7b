//! main.rs
//! Entry point for glint

use glint::app;
use glint::config::Config;
use glint::utils::cli::{self, CliAction};

fn main() {
    let config = Config::load();

    let code = match cli::handle_args(&config) {
        CliAction::Exit(code) => code,
        CliAction::Run(invocation) => app::run(&invocation, &config),
    };
    std::process::exit(code);
}

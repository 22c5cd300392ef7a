mod app;
mod cli;
mod clipboard;
mod color;
mod event;
mod palette;
mod theme;
mod tui;
mod ui;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let mut app = app::App::new(cli::clamp_swatches(cli_opts.swatches), cli_opts.hint);
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}

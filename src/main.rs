use std::error::Error;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use towergrid::terminal::TerminalShell;
use towergrid::{Config, Game};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::load();
    info!(
        "starting {}x{} grid, {} ms tick",
        config.grid.width, config.grid.height, config.input.poll_ms
    );

    let mut game = Game::with_stats(config.grid.height, config.grid.width, config.enemy_stats());
    let mut rng = StdRng::from_os_rng();
    let mut shell = TerminalShell::new(config.input.poll_ms)?;

    while game.running {
        shell.draw(&game)?;
        game.advance();
        let event = shell.poll_input()?;
        game.apply_input(event, &mut rng);
    }

    Ok(())
}

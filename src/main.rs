//! Game runner: single-threaded, turn-based loop.
//!
//! Game logic and rendering are driven at two independent cadences; one tick
//! is one board transition, and every render tick recomposites the scene and
//! reprints it. No input handling: the piece falls until the stack tops out.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_blockfall::core::{Board, Phase, ShapeCatalog, SimpleRng};
use tui_blockfall::scene::{Scene, Viewport};
use tui_blockfall::term::{BoardView, TerminalRenderer};
use tui_blockfall::types::GameConfig;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::default();
    let catalog = ShapeCatalog::builtin()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut board = Board::new(
        config.board_width,
        config.board_height,
        catalog,
        SimpleRng::new(seed),
    );

    let mut scene = Scene::new(Viewport::new(config.viewport_width, config.viewport_height));
    let view = BoardView;

    let game_tick = Duration::from_millis(config.game_tick_ms);
    let render_tick = Duration::from_millis(config.render_tick_ms);
    let mut next_game = Instant::now() + game_tick;
    let mut next_render = Instant::now();

    loop {
        let now = Instant::now();

        if now >= next_game {
            next_game += game_tick;
            if board.tick() == Phase::GameOver {
                // Show the final frame with the overlay, then leave.
                view.compose(&board, &mut scene);
                term.draw(scene.rows())?;
                thread::sleep(Duration::from_secs(2));
                return Ok(());
            }
        }

        if now >= next_render {
            next_render += render_tick;
            view.compose(&board, &mut scene);
            term.draw(scene.rows())?;
        }

        let wake = next_game.min(next_render);
        if let Some(delay) = wake.checked_duration_since(Instant::now()) {
            thread::sleep(delay);
        }
    }
}

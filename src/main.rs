use std::io::Write;
use std::ops::ControlFlow;

use flipbook::{animation::Animation, event::Input, game_loop::GameLoop};

fn main() -> std::io::Result<()> {
    // A spinner: the simplest possible animation.
    let spinner = Animation::new();
    for glyph in ["|", "/", "-", "\\"] {
        spinner.push_frame(glyph, 120).expect("duration is non-negative");
    }
    spinner.start();

    GameLoop::new(30).run(|input| {
        if matches!(input, Some(Input::Quit)) {
            return Ok(ControlFlow::Break(()));
        }
        spinner.update();
        if let Some(glyph) = spinner.current_image() {
            print!("\r{glyph} press q to quit");
            std::io::stdout().flush()?;
        }
        Ok(ControlFlow::Continue(()))
    })
}

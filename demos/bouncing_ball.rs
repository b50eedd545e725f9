use std::io::{self, stdout, Write};
use std::ops::ControlFlow;

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use flipbook::{
    animation::Animation,
    event::Input,
    game_loop::GameLoop,
    kinematics::{BoundingBox, Mover},
};

const BOARD: BoundingBox = BoundingBox {
    width: 32,
    height: 12,
};

fn main() -> io::Result<()> {
    // The ball pulses as it flies; the pulse timing is independent of the
    // tick rate thanks to the sequencer.
    let ball = Animation::new();
    for (glyph, ms) in [("o", 180), ("O", 120), ("0", 180), ("O", 120)] {
        ball.push_frame(glyph, ms).expect("duration is non-negative");
    }
    ball.start();

    let mut mover = Mover::new(3, 2, 1, 1);
    GameLoop::new(20).run(|input| {
        if matches!(input, Some(Input::Quit)) {
            return Ok(ControlFlow::Break(()));
        }
        mover.bounce(BOARD);
        ball.update();
        draw(&mover, ball.current_image().unwrap_or("o"))?;
        Ok(ControlFlow::Continue(()))
    })
}

fn draw(mover: &Mover, glyph: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
    for y in 0..BOARD.height {
        for x in 0..BOARD.width {
            if (x, y) == (mover.x, mover.y) {
                write!(out, "{glyph}")?;
            } else if x == 0 || x == BOARD.width - 1 || y == 0 || y == BOARD.height - 1 {
                write!(out, "#")?;
            } else {
                write!(out, " ")?;
            }
        }
        write!(out, "\r\n")?;
    }
    write!(out, "press q to quit\r\n")?;
    out.flush()
}

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
    width: 40,
    height: 1,
};

fn main() -> io::Result<()> {
    // Uneven frame durations read as a gait: long strides, quick recovery.
    let walker = Animation::new();
    for (pose, ms) in [(r"\o/", 200), ("|o|", 100), ("/o\\", 200), ("|o|", 100)] {
        walker.push_frame(pose, ms).expect("duration is non-negative");
    }
    walker.start();

    let mut mover = Mover::new(BOARD.width / 2, 0, 0, 0);
    GameLoop::new(30).run(|input| {
        if matches!(input, Some(Input::Quit)) {
            return Ok(ControlFlow::Break(()));
        }
        mover.slide(BOARD, input.map_or(0, Input::horizontal));
        walker.update();
        draw(&mover, walker.current_image().unwrap_or("|o|"))?;
        Ok(ControlFlow::Continue(()))
    })
}

fn draw(mover: &Mover, pose: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, cursor::MoveTo(0, 0), Clear(ClearType::All))?;
    let pad = " ".repeat(mover.x as usize);
    write!(out, "{pad}{pose}\r\n")?;
    write!(out, "arrows or a/d to walk, q to quit\r\n")?;
    out.flush()
}

use core::fmt;
use sweeper_core::{CellView, Frame, Outcome, PauseState};

fn symbol(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Open(0) => '.',
        // adjacency counts are at most 8
        CellView::Open(count) => char::from(b'0' + count),
        CellView::Flag => 'F',
        CellView::Mine => '*',
        CellView::Exploded => 'X',
        CellView::Blank => ' ',
    }
}

/// Draws a frame as plain text: status line, board with row/column indices,
/// then the leaderboard if it is open.
pub fn frame(frame: &Frame) -> String {
    FrameText(frame).to_string()
}

struct FrameText<'a>(&'a Frame);

impl fmt::Display for FrameText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0;

        write!(f, "Flags: {:>4}   Time: {}", frame.flag_counter, frame.clock)?;
        match frame.pause {
            PauseState::Running => {}
            PauseState::ManuallyPaused => write!(f, "   [paused]")?,
            PauseState::AutoPaused => write!(f, "   [leaderboard]")?,
        }
        if frame.debug {
            write!(f, "   [debug]")?;
        }
        writeln!(f)?;

        let cols = frame.cells.first().map_or(0, Vec::len);
        write!(f, "    ")?;
        for col in 0..cols {
            write!(f, "{}", col % 10)?;
        }
        writeln!(f)?;
        for (row, cells) in frame.cells.iter().enumerate() {
            let line: String = cells.iter().copied().map(symbol).collect();
            writeln!(f, "{row:>3} {line}")?;
        }

        match frame.outcome {
            Outcome::InProgress => {}
            Outcome::Won => writeln!(f, "You won in {}!", frame.clock)?,
            Outcome::Lost => writeln!(f, "Boom. Type `n` for a new game.")?,
        }

        if let Some(lines) = &frame.leaderboard {
            writeln!(f, "\nLEADERBOARD")?;
            for line in lines {
                let marker = if line.is_new { "*" } else { "" };
                writeln!(f, "{}.\t{}\t{}{}", line.rank, line.time, line.name, marker)?;
            }
            writeln!(f, "(type `l` to close)")?;
        }
        Ok(())
    }
}

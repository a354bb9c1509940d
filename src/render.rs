use crate::grid::Grid;
use crossterm::{
    Command, cursor,
    terminal::{self, ClearType},
};
use std::{
    fmt::{self, Write as _},
    io::{self, Write},
};

/// Terminal window size requested at startup, in character cells
pub const WINDOW_COLUMNS: u16 = 160;
pub const WINDOW_ROWS: u16 = 60;

const RULE_START: &str = "+";
const RULE_SEGMENT: &str = "----+";
const ROW_START: &str = "|";
const ALIVE_CELL: &str = " >< |";
const DEAD_CELL: &str = "    |";

/// Moves the cursor up one line, prefixed by a stray `ESC[`
///
/// Terminals have always been sent `ESC[ESC[1A` here, so the prefix stays.
#[derive(Debug, Clone, Copy)]
pub struct StepUp;

impl Command for StepUp {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[")?;
        cursor::MoveUp(1).write_ansi(f)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        cursor::MoveUp(1).execute_winapi()
    }
}

fn push_command(out: &mut String, command: impl Command) {
    // writing into a String never fails
    let _ = command.write_ansi(out);
}

/// The textual form of one generation
///
/// Horizontal rules are drawn above, between and below every row of cells.
pub struct Frame<'a> {
    grid: &'a Grid,
}

impl<'a> Frame<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// The number of lines this frame occupies on the terminal
    #[inline]
    pub fn line_count(&self) -> usize {
        2 * self.grid.rows() + 1
    }

    fn write_rule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RULE_START)?;
        for _ in 0..self.grid.columns() {
            f.write_str(RULE_SEGMENT)?;
        }
        f.write_char('\n')
    }
}

impl fmt::Display for Frame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_rule(f)?;
        for row in 0..self.grid.rows() {
            f.write_str(ROW_START)?;
            for &alive in self.grid.row(row) {
                f.write_str(if alive { ALIVE_CELL } else { DEAD_CELL })?;
            }
            f.write_char('\n')?;
            self.write_rule(f)?;
        }
        Ok(())
    }
}

/// Renders `grid` as a framed ASCII board
pub fn render_frame(grid: &Grid) -> String {
    Frame::new(grid).to_string()
}

/// Erases the last `lines` lines above the cursor, leaving it where the
/// erased output began
pub fn clear_previous_frame(lines: usize) -> String {
    let mut out = String::new();
    for _ in 0..lines {
        push_command(&mut out, StepUp);
        push_command(&mut out, terminal::Clear(ClearType::CurrentLine));
    }
    out
}

/// Asks the terminal to resize itself to fit a full frame
pub fn set_window_size() -> String {
    let mut out = String::new();
    push_command(&mut out, terminal::SetSize(WINDOW_COLUMNS, WINDOW_ROWS));
    out
}

/// Redraws generations in place on a terminal writer
pub struct TerminalRenderer<W: Write> {
    out: W,
    /// lines taken by the last drawn frame
    drawn: Option<usize>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, drawn: None }
    }

    /// Sends the one-time window resize request
    pub fn init(&mut self) -> io::Result<()> {
        self.out.write_all(set_window_size().as_bytes())?;
        self.out.flush()
    }

    /// Draws `grid`, replacing the previously drawn frame if there is one
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        let frame = Frame::new(grid);
        let mut text = match self.drawn {
            Some(lines) => clear_previous_frame(lines),
            None => String::new(),
        };
        // String formatting only fails if Display does
        write!(text, "{frame}").map_err(io::Error::other)?;

        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        self.drawn = Some(frame.line_count());
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine;

    const STEP_UP: &str = "\x1b[\x1b[1A";
    const CLEAR_LINE: &str = "\x1b[2K";

    fn is_rule(line: &str) -> bool {
        line.starts_with('+')
    }

    #[test]
    fn frame_interleaves_rules_and_rows() {
        let grid = Grid::default();
        let text = render_frame(&grid);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 2 * grid.rows() + 1);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(is_rule(line), i % 2 == 0, "line {i}: {line}");
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn rules_and_rows_span_every_column() {
        let grid = Grid::new(2, 3);
        let text = render_frame(&grid);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "+----+----+----+");
        assert_eq!(lines[1], "|    |    |    |");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn live_cells_are_marked() {
        let grid = Grid::from_alive(1, 3, [(0, 1)]);

        assert_eq!(
            render_frame(&grid),
            "+----+----+----+\n|    | >< |    |\n+----+----+----+\n"
        );
    }

    #[test]
    fn seed_frame_marks_five_cells() {
        let text = render_frame(&engine::seed());

        assert_eq!(text.matches("><").count(), 5);
        // second row of cells holds the seed's (1, 2)
        let row = format!("|{}{ALIVE_CELL}{}", DEAD_CELL.repeat(2), DEAD_CELL.repeat(22));
        assert_eq!(text.lines().nth(3), Some(row.as_str()));
    }

    #[test]
    fn clear_repeats_step_up_and_clear() {
        assert_eq!(
            clear_previous_frame(2),
            format!("{STEP_UP}{CLEAR_LINE}{STEP_UP}{CLEAR_LINE}")
        );
        assert!(clear_previous_frame(0).is_empty());
    }

    #[test]
    fn window_size_code() {
        assert_eq!(set_window_size(), "\x1b[8;60;160t");
    }

    #[test]
    fn redraw_erases_exactly_the_previous_frame() {
        let grid = engine::seed();
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&grid).expect("first draw");
        renderer.draw(&grid).expect("second draw");

        let out = String::from_utf8(renderer.into_inner()).expect("utf8 output");
        let frame = render_frame(&grid);
        let (first, rest) = out.split_at(frame.len());
        assert_eq!(first, frame);

        let lines = frame.lines().count();
        assert_eq!(rest, format!("{}{frame}", clear_previous_frame(lines)));
        assert_eq!(rest.matches(STEP_UP).count(), lines);
        assert_eq!(rest.matches(CLEAR_LINE).count(), lines);
    }

    #[test]
    fn init_only_resizes() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.init().expect("init");

        assert_eq!(renderer.into_inner(), set_window_size().into_bytes());
    }
}

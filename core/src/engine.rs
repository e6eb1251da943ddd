use ndarray::Array2;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::*;

/// Largest value the four-digit clock can show (99:59).
pub const MAX_DISPLAY_SECS: u32 = 99 * 60 + 59;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PauseState {
    #[default]
    Running,
    /// Paused by the player.
    ManuallyPaused,
    /// Paused programmatically while a modal view is open.
    AutoPaused,
}

impl PauseState {
    pub const fn is_paused(self) -> bool {
        !matches!(self, Self::Running)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

/// Owns the board state of the single active game.
#[derive(Clone, Debug)]
pub struct PlayEngine<C = SystemClock> {
    minefield: Minefield,
    board: Array2<CellState>,
    flags_remaining: isize,
    unrevealed_safe_count: CellCount,
    outcome: Outcome,
    pause: PauseState,
    debug_mode: bool,
    has_acted: bool,
    stopwatch: Stopwatch,
    triggered_mine: Option<Coord2>,
    clock: C,
}

impl PlayEngine {
    pub fn new(minefield: Minefield) -> Self {
        Self::with_clock(minefield, SystemClock)
    }
}

impl<C: Clock> PlayEngine<C> {
    pub fn with_clock(minefield: Minefield, clock: C) -> Self {
        let size = minefield.size();
        Self {
            flags_remaining: minefield.mine_count() as isize,
            unrevealed_safe_count: minefield.safe_cell_count(),
            board: Array2::default(size.to_nd_index()),
            minefield,
            outcome: Outcome::InProgress,
            pause: PauseState::Running,
            debug_mode: false,
            has_acted: false,
            stopwatch: Stopwatch::new(),
            triggered_mine: None,
            clock,
        }
    }

    /// Replaces the field and resets every piece of session state.
    pub fn reset(&mut self, minefield: Minefield) {
        log::debug!("Starting new {:?} game", minefield.game_config());
        let size = minefield.size();
        self.flags_remaining = minefield.mine_count() as isize;
        self.unrevealed_safe_count = minefield.safe_cell_count();
        self.board = Array2::default(size.to_nd_index());
        self.minefield = minefield;
        self.outcome = Outcome::InProgress;
        self.pause = PauseState::Running;
        self.debug_mode = false;
        self.has_acted = false;
        self.stopwatch = Stopwatch::new();
        self.triggered_mine = None;
    }

    /// Regenerates the field with the current configuration.
    pub fn new_game(&mut self, generator: impl MinefieldGenerator) -> Result<()> {
        let minefield = generator.generate(self.config())?;
        self.reset(minefield);
        Ok(())
    }

    pub fn config(&self) -> GameConfig {
        self.minefield.game_config()
    }

    pub fn minefield(&self) -> &Minefield {
        &self.minefield
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn pause_state(&self) -> PauseState {
        self.pause
    }

    pub fn is_debug(&self) -> bool {
        self.debug_mode
    }

    pub fn has_started(&self) -> bool {
        self.has_acted
    }

    /// Grid shape as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn flags_remaining(&self) -> isize {
        self.flags_remaining
    }

    pub fn unrevealed_safe_count(&self) -> CellCount {
        self.unrevealed_safe_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// State of the cell at `coords`, `None` outside the board.
    pub fn cell_at(&self, coords: Coord2) -> Option<CellState> {
        self.board.get(coords.to_nd_index()).copied()
    }

    /// Total time played, never clamped.
    pub fn total_elapsed(&self) -> Duration {
        self.stopwatch.elapsed(self.clock.now())
    }

    /// Whole seconds played, capped at what the clock can display.
    pub fn elapsed_seconds(&self) -> u32 {
        let secs = self.total_elapsed().as_secs();
        secs.min(u64::from(MAX_DISPLAY_SECS)) as u32
    }

    pub fn open_cell(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        let Some(coords) = self.minefield.validate_coords(coords) else {
            return NoChange;
        };
        if !self.accepts_moves() || !self.board[coords.to_nd_index()].is_open_target() {
            return NoChange;
        }
        self.mark_started();

        self.board[coords.to_nd_index()] = CellState::Revealed;

        let Some(adjacent_mines) = self.minefield.adjacent_mine_count(coords) else {
            log::debug!("Opened mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return HitMine;
        };
        log::debug!("Open cell at {:?}, mine count: {}", coords, adjacent_mines);

        let mut revealed = 1;
        if adjacent_mines == 0 {
            revealed += self.flood_fill(coords);
        }
        self.unrevealed_safe_count -= revealed;

        if self.unrevealed_safe_count == 0 {
            self.end_game(true);
            Won
        } else {
            Revealed
        }
    }

    /// Reveals every hidden cell reachable from `origin` through zero-count cells.
    ///
    /// Cells are marked revealed before they are pushed, so each one enters the
    /// worklist at most once. Returns how many cells were newly revealed.
    fn flood_fill(&mut self, origin: Coord2) -> CellCount {
        let mut revealed = 0;
        let mut to_visit = vec![origin];

        while let Some(center) = to_visit.pop() {
            for pos in self.minefield.iter_neighbors(center) {
                if self.board[pos.to_nd_index()] != CellState::Hidden {
                    continue;
                }

                self.board[pos.to_nd_index()] = CellState::Revealed;
                revealed += 1;

                let count = self.minefield.adjacent_mine_count(pos);
                log::trace!("Flood opened cell at {:?}, mine count: {:?}", pos, count);
                if count == Some(0) {
                    to_visit.push(pos);
                }
            }
        }

        revealed
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use CellState::*;
        use MarkOutcome::*;

        let Some(coords) = self.minefield.validate_coords(coords) else {
            return NoChange;
        };
        if !self.accepts_moves() {
            return NoChange;
        }

        let index = coords.to_nd_index();
        match self.board[index] {
            Hidden | DebugRevealed => {
                self.mark_started();
                self.board[index] = Flagged;
                self.flags_remaining -= 1;
                Changed
            }
            Flagged => {
                self.mark_started();
                self.board[index] = if self.debug_mode && self.minefield.contains_mine(coords) {
                    DebugRevealed
                } else {
                    Hidden
                };
                self.flags_remaining += 1;
                Changed
            }
            Revealed => NoChange,
        }
    }

    /// Shows or hides every mine the player has not revealed.
    ///
    /// Entering debug mode takes back flags placed on mines; leaving it keeps
    /// flags placed while debugging.
    pub fn toggle_debug(&mut self) -> MarkOutcome {
        use CellState::*;

        if self.outcome.is_finished() {
            return MarkOutcome::NoChange;
        }

        self.debug_mode = !self.debug_mode;
        log::debug!("Debug mode: {}", self.debug_mode);

        let mines: Vec<Coord2> = self.minefield.iter_mines().collect();
        for coords in mines {
            let cell = &mut self.board[coords.to_nd_index()];
            match (*cell, self.debug_mode) {
                (Hidden, true) => *cell = DebugRevealed,
                (Flagged, true) => {
                    *cell = DebugRevealed;
                    self.flags_remaining += 1;
                }
                (DebugRevealed, false) => *cell = Hidden,
                _ => {}
            }
        }

        MarkOutcome::Changed
    }

    /// Toggles the pause state and returns the new one.
    ///
    /// A manual toggle switches between running and manually paused and is
    /// ignored while a forced pause is active. A forced toggle only pauses a
    /// running game and only resumes a force-paused one.
    pub fn toggle_pause(&mut self, forced: bool) -> PauseState {
        use PauseState::*;

        let next = match (self.pause, forced) {
            (Running, false) => ManuallyPaused,
            (ManuallyPaused, false) => Running,
            (Running, true) => AutoPaused,
            (AutoPaused, true) => Running,
            (current, _) => current,
        };
        if next == self.pause {
            return next;
        }

        let now = self.clock.now();
        if next.is_paused() {
            self.stopwatch.pause(now);
        } else if self.has_acted {
            // frozen once the game ended
            self.stopwatch.resume(now);
        }
        log::debug!("Pause state {:?} -> {:?}", self.pause, next);
        self.pause = next;
        next
    }

    /// What the presentation layer should draw at `coords`, `None` outside
    /// the board.
    pub fn view_at(&self, coords: Coord2) -> Option<CellView> {
        use CellState::*;

        let state = self.cell_at(coords)?;
        if self.pause.is_paused() {
            return Some(CellView::Blank);
        }

        let lost = self.outcome == Outcome::Lost;
        let has_mine = self.minefield.contains_mine(coords);

        let view = match (state, has_mine) {
            (Revealed, true) if self.triggered_mine == Some(coords) => CellView::Exploded,
            (Revealed, true) => CellView::Mine,
            (Revealed, false) => {
                CellView::Open(self.minefield.adjacent_mine_count(coords).unwrap_or_default())
            }
            (_, true) if lost => CellView::Mine,
            (DebugRevealed, _) => CellView::Mine,
            (Flagged, _) => CellView::Flag,
            (Hidden, _) => CellView::Hidden,
        };
        Some(view)
    }

    fn accepts_moves(&self) -> bool {
        !self.outcome.is_finished() && !self.pause.is_paused()
    }

    fn mark_started(&mut self) {
        if !self.has_acted {
            self.has_acted = true;
            self.stopwatch.resume(self.clock.now());
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.outcome.is_finished() {
            return;
        }

        self.stopwatch.freeze(self.clock.now());
        self.outcome = if won { Outcome::Won } else { Outcome::Lost };

        if won {
            self.triggered_mine = None;
            // every cell still unrevealed is a mine
            for cell in self.board.iter_mut() {
                if cell.is_unrevealed() {
                    *cell = CellState::Flagged;
                }
            }
            self.flags_remaining = 0;
        }

        log::info!(
            "Game {:?} after {:?}",
            self.outcome,
            self.stopwatch.elapsed(self.clock.now())
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::tests::ManualClock;

    fn engine(size: Coord2, mines: &[Coord2]) -> (PlayEngine<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let field = Minefield::from_mine_coords(size, mines).unwrap();
        (PlayEngine::with_clock(field, clock.clone()), clock)
    }

    fn count_state(engine: &PlayEngine<ManualClock>, state: CellState) -> usize {
        let (rows, cols) = engine.size();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&coords| engine.cell_at(coords) == Some(state))
            .count()
    }

    #[test]
    fn reveal_hits_mine_and_sets_triggered_cell() {
        let (mut engine, _) = engine((2, 2), &[(0, 0)]);

        let outcome = engine.open_cell((0, 0));

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(engine.outcome(), Outcome::Lost);
        assert_eq!(engine.triggered_mine(), Some((0, 0)));
        assert_eq!(engine.cell_at((0, 0)), Some(CellState::Revealed));
        // no propagation past the mine
        assert_eq!(count_state(&engine, CellState::Revealed), 1);
        assert_eq!(engine.unrevealed_safe_count(), 3);
    }

    #[test]
    fn reveal_flood_fill_opens_zero_region() {
        let (mut engine, _) = engine((3, 3), &[(2, 2)]);

        let outcome = engine.open_cell((0, 0));

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(engine.view_at((0, 0)), Some(CellView::Open(0)));
        assert_eq!(engine.view_at((1, 1)), Some(CellView::Open(1)));
        assert_eq!(engine.cell_at((2, 2)), Some(CellState::Flagged));
        assert_eq!(engine.unrevealed_safe_count(), 0);
        assert_eq!(engine.flags_remaining(), 0);
    }

    #[test]
    fn flood_fill_stops_at_numbered_cells() {
        // 5 rows x 5 cols, a wall of mines on column 2 except the middle
        //   . . * . .
        //   . . * . .
        //   . . . . .
        //   . . * . .
        //   . . * . .
        let mines = [(0, 2), (1, 2), (3, 2), (4, 2)];
        let (mut engine, _) = engine((5, 5), &mines);

        assert_eq!(engine.open_cell((0, 0)), RevealOutcome::Revealed);

        // left two columns are reachable; column 1 cells are numbered leaves
        for row in 0..5 {
            assert_eq!(engine.cell_at((row, 0)), Some(CellState::Revealed));
            assert_eq!(engine.cell_at((row, 1)), Some(CellState::Revealed));
        }
        // (2,1) has count 2, so the fill never crosses the gap at (2,2)
        assert_eq!(engine.cell_at((2, 2)), Some(CellState::Hidden));
        assert_eq!(engine.cell_at((2, 3)), Some(CellState::Hidden));
        assert_eq!(engine.unrevealed_safe_count(), 21 - 10);
    }

    #[test]
    fn flood_fill_reveals_each_cell_once() {
        let (mut engine, _) = engine((20, 30), &[(19, 29)]);
        let safe = engine.unrevealed_safe_count();

        assert_eq!(engine.open_cell((0, 0)), RevealOutcome::Won);
        assert_eq!(safe, 599);
        assert_eq!(engine.unrevealed_safe_count(), 0);
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let (mut engine, _) = engine((3, 3), &[(0, 0)]);

        assert_eq!(engine.open_cell((1, 1)), RevealOutcome::Revealed);
        assert_eq!(count_state(&engine, CellState::Revealed), 1);
        assert_eq!(engine.unrevealed_safe_count(), 7);
    }

    #[test]
    fn flood_fill_skips_flagged_cells() {
        let (mut engine, _) = engine((1, 5), &[(0, 4)]);

        engine.toggle_flag((0, 1));
        assert_eq!(engine.open_cell((0, 0)), RevealOutcome::Revealed);

        assert_eq!(engine.cell_at((0, 1)), Some(CellState::Flagged));
        assert_eq!(engine.cell_at((0, 2)), Some(CellState::Hidden));
        assert_eq!(engine.unrevealed_safe_count(), 3);
    }

    #[test]
    fn winning_board_transitions_to_won_state() {
        let (mut engine, _) = engine((1, 3), &[(0, 0)]);

        assert_eq!(engine.open_cell((0, 1)), RevealOutcome::Revealed);
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.open_cell((0, 2)), RevealOutcome::Won);
        assert_eq!(engine.outcome(), Outcome::Won);
        assert!(engine.is_finished());
    }

    #[test]
    fn finished_game_rejects_moves() {
        let (mut engine, _) = engine((2, 2), &[(0, 0)]);

        engine.open_cell((0, 0));

        assert_eq!(engine.open_cell((1, 1)), RevealOutcome::NoChange);
        assert_eq!(engine.toggle_flag((1, 1)), MarkOutcome::NoChange);
        assert_eq!(engine.toggle_debug(), MarkOutcome::NoChange);
        assert_eq!(engine.cell_at((1, 1)), Some(CellState::Hidden));
    }

    #[test]
    fn out_of_range_is_no_op() {
        let (mut engine, _) = engine((2, 2), &[(0, 0)]);

        assert_eq!(engine.open_cell((2, 0)), RevealOutcome::NoChange);
        assert_eq!(engine.toggle_flag((0, 9)), MarkOutcome::NoChange);
        assert!(!engine.has_started());
    }

    #[test]
    fn opening_flagged_or_revealed_cell_is_no_op() {
        let (mut engine, _) = engine((2, 2), &[(0, 0)]);

        engine.toggle_flag((0, 0));
        assert_eq!(engine.open_cell((0, 0)), RevealOutcome::NoChange);
        assert_eq!(engine.outcome(), Outcome::InProgress);

        engine.open_cell((1, 1));
        assert_eq!(engine.open_cell((1, 1)), RevealOutcome::NoChange);
        assert_eq!(engine.unrevealed_safe_count(), 2);
    }

    #[test]
    fn flag_accounting_goes_negative() {
        let (mut engine, _) = engine((3, 3), &[(0, 0)]);

        assert_eq!(engine.flags_remaining(), 1);
        engine.toggle_flag((0, 0));
        engine.toggle_flag((1, 1));
        engine.toggle_flag((2, 2));
        assert_eq!(engine.flags_remaining(), -2);

        engine.toggle_flag((1, 1));
        assert_eq!(engine.flags_remaining(), -1);
        assert_eq!(engine.cell_at((1, 1)), Some(CellState::Hidden));
    }

    #[test]
    fn revealed_cell_rejects_flag() {
        let (mut engine, _) = engine((3, 3), &[(0, 0)]);

        engine.open_cell((1, 1));
        assert_eq!(engine.toggle_flag((1, 1)), MarkOutcome::NoChange);
        assert_eq!(engine.flags_remaining(), 1);
    }

    #[test]
    fn debug_mode_shows_and_hides_mines() {
        let (mut engine, _) = engine((3, 3), &[(0, 0), (2, 2)]);

        engine.toggle_flag((2, 2));
        assert_eq!(engine.flags_remaining(), 1);

        engine.toggle_debug();
        assert!(engine.is_debug());
        assert_eq!(engine.cell_at((0, 0)), Some(CellState::DebugRevealed));
        assert_eq!(engine.cell_at((2, 2)), Some(CellState::DebugRevealed));
        assert_eq!(engine.flags_remaining(), 2);
        assert_eq!(engine.view_at((0, 0)), Some(CellView::Mine));
        assert_eq!(engine.view_at((1, 1)), Some(CellView::Hidden));

        // flagging a debug-revealed mine, then unflagging, goes back to debug view
        engine.toggle_flag((0, 0));
        assert_eq!(engine.flags_remaining(), 1);
        engine.toggle_flag((0, 0));
        assert_eq!(engine.cell_at((0, 0)), Some(CellState::DebugRevealed));

        engine.toggle_flag((0, 0));
        engine.toggle_debug();
        assert!(!engine.is_debug());
        assert_eq!(engine.cell_at((0, 0)), Some(CellState::Flagged));
        assert_eq!(engine.cell_at((2, 2)), Some(CellState::Hidden));
        assert_eq!(engine.flags_remaining(), 1);
    }

    #[test]
    fn debug_revealed_mine_can_still_be_opened() {
        let (mut engine, _) = engine((2, 2), &[(1, 1)]);

        engine.toggle_debug();
        assert_eq!(engine.open_cell((1, 1)), RevealOutcome::HitMine);
        assert_eq!(engine.view_at((1, 1)), Some(CellView::Exploded));
    }

    #[test]
    fn loss_shows_every_mine() {
        let (mut engine, _) = engine((2, 3), &[(0, 0), (1, 2)]);

        engine.toggle_flag((1, 2));
        engine.open_cell((0, 0));

        assert_eq!(engine.view_at((0, 0)), Some(CellView::Exploded));
        assert_eq!(engine.view_at((1, 2)), Some(CellView::Mine));
        assert_eq!(engine.view_at((0, 2)), Some(CellView::Hidden));
    }

    #[test]
    fn timer_starts_on_first_action() {
        let (mut engine, clock) = engine((3, 3), &[(0, 0)]);

        clock.advance(30);
        assert_eq!(engine.elapsed_seconds(), 0);
        assert!(!engine.has_started());

        engine.toggle_flag((2, 2));
        clock.advance(12);
        assert!(engine.has_started());
        assert_eq!(engine.elapsed_seconds(), 12);
    }

    #[test]
    fn timer_freezes_on_loss() {
        let (mut engine, clock) = engine((3, 3), &[(0, 0), (2, 2)]);

        assert_eq!(engine.open_cell((0, 2)), RevealOutcome::Revealed);
        clock.advance(20);
        engine.open_cell((0, 0));
        clock.advance(100);

        assert_eq!(engine.outcome(), Outcome::Lost);
        assert_eq!(engine.elapsed_seconds(), 20);

        // toggling pause after the end does not restart the clock
        engine.toggle_pause(false);
        engine.toggle_pause(false);
        clock.advance(5);
        assert_eq!(engine.elapsed_seconds(), 20);
    }

    #[test]
    fn pause_blocks_moves_and_stops_clock() {
        let (mut engine, clock) = engine((3, 3), &[(0, 0)]);

        engine.toggle_flag((1, 1));
        clock.advance(10);
        assert_eq!(engine.toggle_pause(false), PauseState::ManuallyPaused);
        clock.advance(50);

        assert_eq!(engine.elapsed_seconds(), 10);
        assert_eq!(engine.open_cell((2, 2)), RevealOutcome::NoChange);
        assert_eq!(engine.toggle_flag((1, 1)), MarkOutcome::NoChange);
        assert_eq!(engine.view_at((1, 1)), Some(CellView::Blank));

        assert_eq!(engine.toggle_pause(false), PauseState::Running);
        clock.advance(5);
        assert_eq!(engine.elapsed_seconds(), 15);
        assert_eq!(engine.view_at((1, 1)), Some(CellView::Flag));
    }

    #[test]
    fn forced_pause_does_not_clobber_manual_pause() {
        let (mut engine, clock) = engine((3, 3), &[(0, 0)]);
        engine.toggle_flag((1, 1));

        assert_eq!(engine.toggle_pause(false), PauseState::ManuallyPaused);
        assert_eq!(engine.toggle_pause(true), PauseState::ManuallyPaused);
        assert_eq!(engine.toggle_pause(true), PauseState::ManuallyPaused);
        assert_eq!(engine.toggle_pause(false), PauseState::Running);

        assert_eq!(engine.toggle_pause(true), PauseState::AutoPaused);
        clock.advance(8);
        // manual toggle ignored while force-paused
        assert_eq!(engine.toggle_pause(false), PauseState::AutoPaused);
        assert_eq!(engine.elapsed_seconds(), 0);
        assert_eq!(engine.toggle_pause(true), PauseState::Running);
        clock.advance(2);
        assert_eq!(engine.elapsed_seconds(), 2);
    }

    #[test]
    fn pausing_before_first_action_does_not_start_clock() {
        let (mut engine, clock) = engine((3, 3), &[(0, 0)]);

        engine.toggle_pause(false);
        engine.toggle_pause(false);
        clock.advance(9);

        assert_eq!(engine.elapsed_seconds(), 0);
    }

    #[test]
    fn elapsed_seconds_capped_for_display() {
        let (mut engine, clock) = engine((3, 3), &[(0, 0)]);

        engine.toggle_flag((1, 1));
        clock.advance(7000);

        assert_eq!(engine.elapsed_seconds(), MAX_DISPLAY_SECS);
        assert_eq!(engine.total_elapsed(), Duration::from_secs(7000));
    }

    #[test]
    fn new_game_resets_session() {
        let (mut engine, clock) = engine((9, 9), &[(0, 0)]);

        engine.toggle_debug();
        engine.toggle_flag((4, 4));
        clock.advance(3);
        engine.open_cell((0, 0));

        engine
            .new_game(RandomMinefieldGenerator::new(7))
            .unwrap();

        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.pause_state(), PauseState::Running);
        assert!(!engine.is_debug());
        assert!(!engine.has_started());
        assert_eq!(engine.flags_remaining(), 1);
        assert_eq!(engine.unrevealed_safe_count(), 80);
        assert_eq!(engine.triggered_mine(), None);
        assert_eq!(count_state(&engine, CellState::Hidden), 81);
        assert_eq!(engine.elapsed_seconds(), 0);
    }

    #[test]
    fn beginner_corner_scenario() {
        // mines kept away from the top-left corner
        let mines = [
            (0, 8),
            (2, 6),
            (3, 3),
            (4, 7),
            (5, 1),
            (6, 5),
            (7, 2),
            (7, 8),
            (8, 0),
            (8, 6),
        ];
        let (mut engine, clock) = engine((9, 9), &mines);
        assert_eq!(engine.minefield().adjacent_mine_count((0, 0)), Some(0));

        assert_eq!(engine.open_cell((0, 0)), RevealOutcome::Revealed);
        let opened = count_state(&engine, CellState::Revealed) as CellCount;
        assert!(opened > 1);
        assert_eq!(engine.unrevealed_safe_count(), 71 - opened);

        clock.advance(75);
        assert_eq!(engine.open_cell((3, 3)), RevealOutcome::HitMine);
        clock.advance(10);
        assert_eq!(engine.elapsed_seconds(), 75);
    }

    #[test]
    fn queries_outside_the_board_are_none() {
        let (mut engine, _) = engine((2, 3), &[(0, 0)]);

        assert_eq!(engine.cell_at((2, 0)), None);
        assert_eq!(engine.cell_at((0, 3)), None);
        assert_eq!(engine.view_at((9, 9)), None);
        assert_eq!(engine.open_cell((2, 0)), RevealOutcome::NoChange);
        assert_eq!(engine.toggle_flag((0, 3)), MarkOutcome::NoChange);
        assert_eq!(engine.cell_at((1, 2)), Some(CellState::Hidden));
    }
}

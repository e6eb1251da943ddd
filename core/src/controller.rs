use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::*;

/// Side of a board cell in pixels.
pub const CELL_SIZE: u32 = 32;

/// Range the three-digit flag counter can show.
pub const FLAG_COUNTER_RANGE: (isize, isize) = (-99, 999);

/// Discrete user actions coming from the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Open(Coord2),
    Flag(Coord2),
    ToggleDebug,
    TogglePause,
    NewGame,
    OpenLeaderboard,
    CloseLeaderboard,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Response {
    NoChange,
    Changed,
    /// The leaderboard view was opened and should be shown.
    ShowLeaderboard,
}

impl Response {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// One leaderboard line as sent to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardLine {
    pub rank: usize,
    pub time: String,
    pub name: String,
    pub is_new: bool,
}

/// Everything the presentation layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub cells: Vec<Vec<CellView>>,
    pub flag_counter: isize,
    pub clock: String,
    pub outcome: Outcome,
    pub pause: PauseState,
    pub debug: bool,
    pub leaderboard: Option<Vec<LeaderboardLine>>,
}

/// Maps a pixel position to the cell under it, if any.
pub fn cell_at_pixel(size: Coord2, x: i32, y: i32) -> Option<Coord2> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    let row = Coord::try_from(y / CELL_SIZE).ok()?;
    let col = Coord::try_from(x / CELL_SIZE).ok()?;
    (row < size.0 && col < size.1).then_some((row, col))
}

/// Clamps the remaining-flag count to what the counter can show.
pub fn flag_counter_value(flags_remaining: isize) -> isize {
    flags_remaining.clamp(FLAG_COUNTER_RANGE.0, FLAG_COUNTER_RANGE.1)
}

/// Composes the engine with the leaderboard for one player.
///
/// The leaderboard view is modal: while it is open the game is force-paused
/// and every other action is ignored.
#[derive(Debug)]
pub struct Controller<C = SystemClock> {
    engine: PlayEngine<C>,
    player_name: String,
    leaderboard_path: PathBuf,
    leaderboard: Option<Leaderboard>,
    win_announced: bool,
    seeds: SmallRng,
}

impl Controller {
    pub fn new(
        config: GameConfig,
        player_name: &str,
        leaderboard_path: impl Into<PathBuf>,
        seed: u64,
    ) -> Result<Self> {
        Self::with_clock(config, player_name, leaderboard_path, seed, SystemClock)
    }
}

impl<C: Clock> Controller<C> {
    pub fn with_clock(
        config: GameConfig,
        player_name: &str,
        leaderboard_path: impl Into<PathBuf>,
        seed: u64,
        clock: C,
    ) -> Result<Self> {
        let mut seeds = SmallRng::seed_from_u64(seed);
        let minefield = RandomMinefieldGenerator::new(seeds.random()).generate(config)?;
        Ok(Self::from_engine(
            PlayEngine::with_clock(minefield, clock),
            player_name,
            leaderboard_path,
            seeds,
        ))
    }

    fn from_engine(
        engine: PlayEngine<C>,
        player_name: &str,
        leaderboard_path: impl Into<PathBuf>,
        seeds: SmallRng,
    ) -> Self {
        Self {
            engine,
            player_name: normalize_player_name(player_name),
            leaderboard_path: leaderboard_path.into(),
            leaderboard: None,
            win_announced: false,
            seeds,
        }
    }

    pub fn engine(&self) -> &PlayEngine<C> {
        &self.engine
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn leaderboard(&self) -> Option<&Leaderboard> {
        self.leaderboard.as_ref()
    }

    pub fn is_leaderboard_open(&self) -> bool {
        self.leaderboard.is_some()
    }

    pub fn cell_at_pixel(&self, x: i32, y: i32) -> Option<Coord2> {
        cell_at_pixel(self.engine.size(), x, y)
    }

    pub fn dispatch(&mut self, action: Action) -> Response {
        use Action::*;

        log::trace!("Dispatching {:?}", action);
        if self.is_leaderboard_open() {
            return match action {
                CloseLeaderboard => self.close_leaderboard(),
                _ => Response::NoChange,
            };
        }

        match action {
            Open(coords) => {
                let outcome = self.engine.open_cell(coords);
                if outcome == RevealOutcome::Won {
                    self.announce_win()
                } else {
                    changed(outcome.has_update())
                }
            }
            Flag(coords) => changed(self.engine.toggle_flag(coords).has_update()),
            ToggleDebug => changed(self.engine.toggle_debug().has_update()),
            TogglePause => {
                let before = self.engine.pause_state();
                changed(self.engine.toggle_pause(false) != before)
            }
            NewGame => self.new_game(),
            OpenLeaderboard => self.open_leaderboard(None),
            CloseLeaderboard => Response::NoChange,
        }
    }

    fn new_game(&mut self) -> Response {
        let generator = RandomMinefieldGenerator::new(self.seeds.random());
        match self.engine.new_game(generator) {
            Ok(()) => {
                self.win_announced = false;
                Response::Changed
            }
            Err(err) => {
                // the configuration was validated when the session started
                log::error!("Could not start a new game: {}", err);
                Response::NoChange
            }
        }
    }

    /// Fires once per won game: records the run and opens the leaderboard.
    fn announce_win(&mut self) -> Response {
        if self.win_announced {
            return Response::Changed;
        }
        self.win_announced = true;
        let secs = self.engine.total_elapsed().as_secs();
        self.open_leaderboard(Some(secs))
    }

    fn open_leaderboard(&mut self, won_in_secs: Option<u64>) -> Response {
        self.engine.toggle_pause(true);

        let mut leaderboard = Leaderboard::load(self.leaderboard_path.clone());
        if let Some(secs) = won_in_secs {
            leaderboard.insert(secs, self.player_name.clone());
        }
        self.leaderboard = Some(leaderboard);
        Response::ShowLeaderboard
    }

    fn close_leaderboard(&mut self) -> Response {
        let Some(leaderboard) = self.leaderboard.take() else {
            return Response::NoChange;
        };
        if let Err(err) = leaderboard.save() {
            log::warn!(
                "Leaderboard not saved to {}: {}",
                leaderboard.path().display(),
                err
            );
        }
        self.engine.toggle_pause(true);
        Response::Changed
    }

    pub fn frame(&self) -> Frame {
        let (rows, cols) = self.engine.size();
        let cells = (0..rows)
            .map(|row| {
                (0..cols)
                    .filter_map(|col| self.engine.view_at((row, col)))
                    .collect()
            })
            .collect();

        let leaderboard = self.leaderboard.as_ref().map(|leaderboard| {
            leaderboard
                .top()
                .into_iter()
                .map(|entry| LeaderboardLine {
                    rank: entry.rank,
                    time: entry.record.time.clone(),
                    name: entry.record.name.clone(),
                    is_new: entry.is_new,
                })
                .collect()
        });

        Frame {
            cells,
            flag_counter: flag_counter_value(self.engine.flags_remaining()),
            clock: format_time_label(self.engine.elapsed_seconds().into()),
            outcome: self.engine.outcome(),
            pause: self.engine.pause_state(),
            debug: self.engine.is_debug(),
            leaderboard,
        }
    }
}

fn changed(has_update: bool) -> Response {
    if has_update {
        Response::Changed
    } else {
        Response::NoChange
    }
}

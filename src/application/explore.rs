//! Interactive exploration of a room tree
//!
//! The explorer is a small state machine:
//!
//! ```text
//! Idle ──root──▶ AtRoom ◀──move──┐
//!  │               │  └──────────┘
//!  │ empty         ├──leaf──▶ Stuck ──▶ Done
//!  ▼               └──quit──▶ Exited ─▶ Done
//! Done
//! ```
//!
//! It consumes one key per turn from any `BufRead`, skipping whitespace,
//! and narrates to any `Write`, so sessions can be driven from stdin or
//! from memory. Several keys typed on one line are played in order.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use tracing::{debug, info, instrument, warn};

use crate::application::error_ext::IoResultExt;
use crate::application::narration::Narrator;
use crate::application::visit_log::{VisitLog, DEFAULT_CAPACITY};
use crate::application::ApplicationResult;
use crate::domain::{Command, Language, RoomId, RoomTree, Side};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExploreState {
    /// Not started yet
    Idle,
    /// On a room with at least one child, waiting for a choice
    AtRoom(RoomId),
    /// On a leaf room
    Stuck(RoomId),
    /// The player asked to leave
    Exited(RoomId),
    /// Summary printed, nothing left to do
    Done,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The tree had no root
    EmptyMap,
    /// The cursor landed on a room without children
    ReachedLeaf,
    /// The player chose to quit
    PlayerQuit,
    /// Input reached end of stream
    InputClosed,
    /// The visit log could not take another room
    VisitLogFull,
}

/// Outcome of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorationReport {
    pub termination: Termination,
    pub visited: VisitLog,
}

/// Knobs for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExploreOptions {
    pub language: Language,
    pub max_visits: usize,
}

impl Default for ExploreOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            max_visits: DEFAULT_CAPACITY,
        }
    }
}

/// One unit of player input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Key(char),
    Unreadable,
    Closed,
}

pub struct Explorer<'t, R, W> {
    tree: &'t RoomTree,
    input: R,
    output: W,
    narrator: Narrator,
    state: ExploreState,
    log: VisitLog,
    termination: Option<Termination>,
    /// Keys read but not yet played
    pending: VecDeque<char>,
}

impl<'t, R: BufRead, W: Write> Explorer<'t, R, W> {
    pub fn new(tree: &'t RoomTree, input: R, output: W, options: ExploreOptions) -> Self {
        Self {
            tree,
            input,
            output,
            narrator: Narrator::new(options.language),
            state: ExploreState::Idle,
            log: VisitLog::with_capacity(options.max_visits),
            termination: None,
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> ExploreState {
        self.state
    }

    /// Room the player currently occupies, if any.
    pub fn cursor(&self) -> Option<RoomId> {
        match self.state {
            ExploreState::AtRoom(id) | ExploreState::Stuck(id) | ExploreState::Exited(id) => {
                Some(id)
            }
            ExploreState::Idle | ExploreState::Done => None,
        }
    }

    pub fn visited(&self) -> &VisitLog {
        &self.log
    }

    /// Drives the session until it is done and returns its report.
    #[instrument(level = "debug", skip(self))]
    pub fn run(mut self) -> ApplicationResult<ExplorationReport> {
        while self.state != ExploreState::Done {
            self.step()?;
        }
        let termination = self.termination.unwrap_or(Termination::EmptyMap);
        info!(?termination, visited = self.log.len(), "exploration finished");
        Ok(ExplorationReport {
            termination,
            visited: self.log,
        })
    }

    /// Performs one transition and returns the new state.
    pub fn step(&mut self) -> ApplicationResult<ExploreState> {
        self.state = match self.state {
            ExploreState::Idle => self.start()?,
            ExploreState::AtRoom(current) => self.turn(current)?,
            ExploreState::Stuck(current) => {
                let name = self.room_name(current)?;
                self.say(self.narrator.dead_end(&name))?;
                self.finish(Termination::ReachedLeaf)?
            }
            ExploreState::Exited(_) => {
                self.say(self.narrator.player_quit())?;
                self.finish(Termination::PlayerQuit)?
            }
            ExploreState::Done => ExploreState::Done,
        };
        Ok(self.state)
    }

    #[instrument(level = "debug", skip(self))]
    fn start(&mut self) -> ApplicationResult<ExploreState> {
        let Some(root) = self.tree.root() else {
            warn!("exploration started on an empty map");
            self.say(self.narrator.empty_map())?;
            self.termination = Some(Termination::EmptyMap);
            return Ok(ExploreState::Done);
        };

        let name = self.room_name(root)?;
        self.say(self.narrator.banner(&name))?;
        if self.log.record(root, &name).is_err() {
            return self.log_full();
        }
        self.say(self.narrator.current_room(&name))?;
        self.arrive(root)
    }

    /// Shows the menu, reads a choice and applies it.
    fn turn(&mut self, current: RoomId) -> ApplicationResult<ExploreState> {
        let tree = self.tree;
        let room = tree.room(current)?;
        let menu = self.narrator.menu(room.left().is_some(), room.right().is_some());
        self.say(menu)?;
        write!(self.output, "{}", self.narrator.prompt()).io_context("write prompt")?;
        self.output.flush().io_context("flush prompt")?;

        let key = match self.read_input()? {
            Input::Key(key) => key,
            Input::Unreadable => {
                debug!("unreadable input line");
                self.say(self.narrator.unreadable())?;
                return Ok(ExploreState::AtRoom(current));
            }
            Input::Closed => {
                warn!("input closed before the exploration ended");
                self.say(self.narrator.unreadable())?;
                return self.finish(Termination::InputClosed);
            }
        };

        match self.narrator.language().parse_key(key) {
            Some(Command::Quit) => Ok(ExploreState::Exited(current)),
            Some(Command::Go(side)) => self.walk(current, side),
            None => {
                debug!(%key, "unrecognised choice");
                self.say(self.narrator.invalid_option())?;
                Ok(ExploreState::AtRoom(current))
            }
        }
    }

    #[instrument(level = "debug", skip(self))]
    fn walk(&mut self, current: RoomId, side: Side) -> ApplicationResult<ExploreState> {
        let tree = self.tree;
        let room = tree.room(current)?;
        let Some(next) = room.child(side) else {
            debug!(from = room.name(), %side, "no path");
            let line = self.narrator.no_path(side, room.name());
            self.say(line)?;
            return Ok(ExploreState::AtRoom(current));
        };

        let name = self.room_name(next)?;
        if self.log.record(next, &name).is_err() {
            return self.log_full();
        }
        debug!(to = %name, %side, "moved");
        self.say(self.narrator.moved_to(&name))?;
        self.arrive(next)
    }

    fn arrive(&self, id: RoomId) -> ApplicationResult<ExploreState> {
        if self.tree.room(id)?.is_leaf() {
            Ok(ExploreState::Stuck(id))
        } else {
            Ok(ExploreState::AtRoom(id))
        }
    }

    fn log_full(&mut self) -> ApplicationResult<ExploreState> {
        warn!(capacity = self.log.capacity(), "visit log is full");
        self.say(self.narrator.log_full(self.log.capacity()))?;
        self.finish(Termination::VisitLogFull)
    }

    /// Prints the visited rooms and ends the session.
    fn finish(&mut self, termination: Termination) -> ApplicationResult<ExploreState> {
        self.termination = Some(termination);

        let mut summary = String::from(self.narrator.summary_header());
        for (index, name) in self.log.numbered() {
            summary.push_str(&format!("\n{index}) {name}"));
        }
        summary.push('\n');
        summary.push_str(self.narrator.summary_footer());
        self.say(summary)?;

        Ok(ExploreState::Done)
    }

    /// Hands out the next non-whitespace key, reading more lines as needed.
    ///
    /// A line that is not valid UTF-8 is consumed whole and reported once.
    fn read_input(&mut self) -> ApplicationResult<Input> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Ok(Input::Key(key));
            }

            let mut buf = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .io_context("read player input")?;
            if read == 0 {
                return Ok(Input::Closed);
            }
            let Ok(line) = String::from_utf8(buf) else {
                return Ok(Input::Unreadable);
            };
            self.pending
                .extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    fn room_name(&self, id: RoomId) -> ApplicationResult<String> {
        Ok(self.tree.room(id)?.name().to_string())
    }

    fn say(&mut self, line: impl AsRef<str>) -> ApplicationResult<()> {
        writeln!(self.output, "{}", line.as_ref()).io_context("write narration")
    }
}

/// Runs a whole session over `tree`.
pub fn explore<R: BufRead, W: Write>(
    tree: &RoomTree,
    input: R,
    output: W,
    options: ExploreOptions,
) -> ApplicationResult<ExplorationReport> {
    Explorer::new(tree, input, output, options).run()
}

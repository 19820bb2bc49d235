//! Core game model for Kit-Tac-Toe.
//! Board, players and the turn state machine driven through `yew::Reducible`.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::settings::{sanitize_name, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO};
use crate::util::clog;

pub const BOARD_SIZE: usize = 3;
pub const MAX_TURNS: u8 = 9;

/// Every line that wins the game: rows top to bottom, columns left to right, then both diagonals.
pub const WIN_LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    Cross,
    Nought,
}

impl Mark {
    pub fn symbol(self) -> &'static str {
        match self {
            Mark::Cross => "✕",
            Mark::Nought => "◯",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Places `mark` on an empty in-bounds cell. Returns false if the cell is taken or out of range.
    fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) if *cell == Cell::Empty => {
                *cell = Cell::Marked(mark);
                true
            }
            _ => false,
        }
    }

    pub fn filled(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c != Cell::Empty)
            .count()
    }
}

/// Index into `WIN_LINES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub index: usize,
}

impl WinLine {
    pub fn cells(self) -> [(usize, usize); 3] {
        WIN_LINES[self.index]
    }

    /// First and last cell of the line, used to anchor the connector.
    pub fn ends(self) -> ((usize, usize), (usize, usize)) {
        let cells = self.cells();
        (cells[0], cells[2])
    }
}

/// First complete line in `WIN_LINES` order, if any.
pub fn check_winner(board: &Board) -> Option<(Mark, WinLine)> {
    WIN_LINES.iter().enumerate().find_map(|(index, [a, b, c])| {
        match (
            board.get(a.0, a.1)?,
            board.get(b.0, b.1)?,
            board.get(c.0, c.1)?,
        ) {
            (Cell::Marked(m), second, third)
                if second == Cell::Marked(m) && third == Cell::Marked(m) =>
            {
                Some((m, WinLine { index }))
            }
            _ => None,
        }
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub mark: Mark,
    /// Session-only record; not persisted.
    pub tally: Tally,
}

impl Player {
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            tally: Tally::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: PlayerSlot, line: WinLine },
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Before the welcome popup is closed; the board is locked.
    Welcome,
    AwaitingMove,
    /// A mark has been placed and is waiting for the post-render evaluation.
    Evaluating { row: usize, col: usize },
    GameOver(Outcome),
}

/// Mutually exclusive appearance of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellVisual {
    Open,
    Cross,
    Nought,
    Locked,
}

impl CellVisual {
    pub fn class(self) -> &'static str {
        match self {
            CellVisual::Open => "",
            CellVisual::Cross => "style-cross",
            CellVisual::Nought => "style-zero",
            CellVisual::Locked => "disabled",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    /// Evaluated moves this game (0..=9).
    pub turn: u8,
    pub current: PlayerSlot,
    pub phase: Phase,
    pub players: [Player; 2],
}

impl GameState {
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            board: Board::default(),
            turn: 0,
            current: PlayerSlot::One,
            phase: Phase::Welcome,
            players: [
                Player::new(player_one, Mark::Cross),
                Player::new(player_two, Mark::Nought),
            ],
        }
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn is_board_locked(&self) -> bool {
        self.phase != Phase::AwaitingMove
    }

    pub fn cell_visual(&self, row: usize, col: usize) -> CellVisual {
        match self.board.get(row, col) {
            Some(Cell::Marked(Mark::Cross)) => CellVisual::Cross,
            Some(Cell::Marked(Mark::Nought)) => CellVisual::Nought,
            Some(Cell::Empty) if !self.is_board_locked() => CellVisual::Open,
            _ => CellVisual::Locked,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn outcome_message(&self) -> Option<String> {
        self.outcome().map(|outcome| match outcome {
            Outcome::Win { winner, .. } => format!("Winner: {}!", self.player(winner).name),
            Outcome::Draw => "Draw!".to_string(),
        })
    }

    /// Applies one action in place. Returns false when the action is not valid in the current phase.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::Select { row, col } => self.select(row, col),
            GameAction::Evaluate => self.evaluate(),
            GameAction::RenamePlayers { one, two } => {
                self.players[0].name = sanitize_name(&one, DEFAULT_PLAYER_ONE);
                self.players[1].name = sanitize_name(&two, DEFAULT_PLAYER_TWO);
                true
            }
        }
    }

    fn reset(&mut self) {
        self.board = Board::default();
        self.turn = 0;
        self.current = PlayerSlot::One;
        self.phase = Phase::AwaitingMove;
        clog(&format!("new game, {} to move", self.current_player().name));
    }

    fn select(&mut self, row: usize, col: usize) -> bool {
        if self.phase != Phase::AwaitingMove {
            clog(&format!("select ({row},{col}) ignored in {:?}", self.phase));
            return false;
        }
        let mark = self.current_player().mark;
        if !self.board.place(row, col, mark) {
            clog(&format!("select ({row},{col}) ignored: cell unavailable"));
            return false;
        }
        self.phase = Phase::Evaluating { row, col };
        true
    }

    fn evaluate(&mut self) -> bool {
        let Phase::Evaluating { row, col } = self.phase else {
            clog("evaluate ignored: no pending move");
            return false;
        };
        self.turn = self.turn.saturating_add(1);
        let mover = self.current;
        let mark = self.player(mover).mark;
        clog(&format!(
            "turn {}: {} at ({row},{col})",
            self.turn,
            self.player(mover).name
        ));
        if let Some((_, line)) = check_winner(&self.board).filter(|(m, _)| *m == mark) {
            self.finish(Outcome::Win {
                winner: mover,
                line,
            });
        } else if self.turn >= MAX_TURNS {
            self.finish(Outcome::Draw);
        } else {
            self.current = mover.other();
            self.phase = Phase::AwaitingMove;
        }
        true
    }

    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win { winner, .. } => {
                let w = &mut self.players[winner.index()].tally;
                w.wins = w.wins.saturating_add(1);
                let l = &mut self.players[winner.other().index()].tally;
                l.losses = l.losses.saturating_add(1);
            }
            Outcome::Draw => {
                for p in self.players.iter_mut() {
                    p.tally.draws = p.tally.draws.saturating_add(1);
                }
            }
        }
        self.phase = Phase::GameOver(outcome);
        if let Some(msg) = self.outcome_message() {
            clog(&format!("game over after {} turns: {}", self.turn, msg));
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum GameAction {
    Reset,
    Select { row: usize, col: usize },
    Evaluate, // dispatched after the marked cell has rendered
    RenamePlayers { one: String, two: String },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        if new.apply(action) {
            Rc::new(new)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> GameState {
        let mut state = GameState::new("A", "B");
        state.apply(GameAction::Reset);
        state
    }

    fn play(state: &mut GameState, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            assert!(state.apply(GameAction::Select { row, col }), "select ({row},{col})");
            assert!(state.apply(GameAction::Evaluate));
        }
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::default()), None);
    }

    #[test]
    fn every_line_wins_for_its_owner() {
        for (index, line) in WIN_LINES.iter().enumerate() {
            let others: Vec<(usize, usize)> = (0..BOARD_SIZE)
                .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
                .filter(|cell| !line.contains(cell))
                .take(2)
                .collect();
            let mut state = started();
            play(
                &mut state,
                &[line[0], others[0], line[1], others[1], line[2]],
            );
            assert_eq!(
                state.phase,
                Phase::GameOver(Outcome::Win {
                    winner: PlayerSlot::One,
                    line: WinLine { index },
                }),
                "line {index}"
            );
            assert_eq!(state.turn, 5);
        }
    }

    #[test]
    fn top_row_scenario_wins_on_turn_five() {
        let mut state = started();
        play(&mut state, &[(0, 0), (1, 1), (0, 1)]);
        play(&mut state, &[(2, 2)]);
        assert_eq!(state.phase, Phase::AwaitingMove);
        play(&mut state, &[(0, 2)]);
        assert_eq!(state.turn, 5);
        assert_eq!(state.outcome_message().as_deref(), Some("Winner: A!"));
        assert!(matches!(
            state.outcome(),
            Some(Outcome::Win {
                winner: PlayerSlot::One,
                ..
            })
        ));
    }

    #[test]
    fn second_player_can_win() {
        let mut state = started();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
        assert_eq!(
            state.outcome(),
            Some(Outcome::Win {
                winner: PlayerSlot::Two,
                line: WinLine { index: 1 },
            })
        );
        assert_eq!(state.player(PlayerSlot::Two).tally.wins, 1);
        assert_eq!(state.player(PlayerSlot::One).tally.losses, 1);
        assert_eq!(state.player(PlayerSlot::One).tally.wins, 0);
    }

    #[test]
    fn full_board_without_line_is_draw_on_ninth_move() {
        let moves = [
            (0, 0),
            (1, 1),
            (2, 2),
            (0, 2),
            (2, 0),
            (1, 0),
            (1, 2),
            (2, 1),
            (0, 1),
        ];
        let mut state = started();
        play(&mut state, &moves[..8]);
        assert_eq!(state.phase, Phase::AwaitingMove);
        play(&mut state, &moves[8..]);
        assert_eq!(state.turn, MAX_TURNS);
        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert_eq!(state.outcome_message().as_deref(), Some("Draw!"));
        for p in &state.players {
            assert_eq!(p.tally, Tally { wins: 0, losses: 0, draws: 1 });
        }
    }

    #[test]
    fn turn_counts_moves_and_players_alternate() {
        let mut state = started();
        assert_eq!(state.turn, 0);
        let moves = [(1, 1), (0, 0), (2, 2), (0, 2)];
        for (n, &(row, col)) in moves.iter().enumerate() {
            let before = state.current;
            play(&mut state, &[(row, col)]);
            assert_eq!(state.turn as usize, n + 1);
            assert_eq!(state.board.filled(), n + 1);
            assert_ne!(state.current, before);
        }
    }

    #[test]
    fn reset_twice_leaves_empty_board() {
        let mut state = started();
        play(&mut state, &[(0, 0), (1, 1)]);
        state.apply(GameAction::Reset);
        assert_eq!(state.board.filled(), 0);
        state.apply(GameAction::Reset);
        assert_eq!(state.board.filled(), 0);
        assert_eq!(state.turn, 0);
        assert_eq!(state.current, PlayerSlot::One);
        assert_eq!(state.phase, Phase::AwaitingMove);
    }

    #[test]
    fn reset_keeps_tallies() {
        let mut state = started();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        state.apply(GameAction::Reset);
        assert_eq!(state.player(PlayerSlot::One).tally.wins, 1);
        assert_eq!(state.cell_visual(0, 0), CellVisual::Open);
    }

    #[test]
    fn selection_is_ignored_outside_awaiting_move() {
        let mut state = GameState::new("A", "B");
        assert!(!state.apply(GameAction::Select { row: 0, col: 0 }));
        assert_eq!(state.board.filled(), 0);

        state.apply(GameAction::Reset);
        assert!(state.apply(GameAction::Select { row: 0, col: 0 }));
        // second click before evaluation
        assert!(!state.apply(GameAction::Select { row: 1, col: 1 }));
        assert_eq!(state.board.filled(), 1);
        assert_eq!(state.turn, 0);
    }

    #[test]
    fn invalid_cells_and_stray_evaluations_are_ignored() {
        let mut state = started();
        assert!(!state.apply(GameAction::Evaluate));
        assert!(!state.apply(GameAction::Select { row: 3, col: 0 }));
        play(&mut state, &[(0, 0)]);
        assert!(!state.apply(GameAction::Select { row: 0, col: 0 }));
        assert_eq!(state.current, PlayerSlot::Two);
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn game_over_locks_remaining_cells() {
        let mut state = started();
        play(&mut state, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(state.is_board_locked());
        assert_eq!(state.cell_visual(2, 2), CellVisual::Locked);
        assert_eq!(state.cell_visual(0, 0), CellVisual::Cross);
        assert_eq!(state.cell_visual(1, 0), CellVisual::Nought);
        assert!(!state.apply(GameAction::Select { row: 2, col: 2 }));
    }

    #[test]
    fn evaluating_cell_shows_mark_and_locks_board() {
        let mut state = started();
        state.apply(GameAction::Select { row: 1, col: 1 });
        assert_eq!(state.phase, Phase::Evaluating { row: 1, col: 1 });
        assert_eq!(state.cell_visual(1, 1), CellVisual::Cross);
        assert_eq!(state.cell_visual(0, 0), CellVisual::Locked);
    }

    #[test]
    fn rename_falls_back_to_defaults() {
        let mut state = started();
        state.apply(GameAction::RenamePlayers {
            one: "  Tom ".into(),
            two: "   ".into(),
        });
        assert_eq!(state.player(PlayerSlot::One).name, "Tom");
        assert_eq!(state.player(PlayerSlot::Two).name, DEFAULT_PLAYER_TWO);
    }

    #[test]
    fn reducer_returns_same_state_for_ignored_action() {
        let state = Rc::new(started());
        let next = state.clone().reduce(GameAction::Evaluate);
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(GameAction::Select { row: 0, col: 0 });
        assert!(!Rc::ptr_eq(&state, &next));
    }
}

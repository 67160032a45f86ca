use crate::session::GameSession;
use crate::spawn::SpawnedTile;
use crate::types::{Cell, Mode, MAX_SIDE};

/// Fixed-size copy of everything a view needs from a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; MAX_SIDE]; MAX_SIDE],
    pub side: u8,
    pub mode: Mode,
    pub score: u64,
    pub best: u64,
    pub moves: u32,
    pub game_over: bool,
    pub max_tile: Cell,
    pub last_spawn: Option<SpawnedTile>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0; MAX_SIDE]; MAX_SIDE],
            side: Mode::Classic.side() as u8,
            mode: Mode::Classic,
            score: 0,
            best: 0,
            moves: 0,
            game_over: false,
            max_tile: 0,
            last_spawn: None,
        }
    }
}

impl GameSnapshot {
    /// Overwrite `self` from `session` without allocating.
    pub fn fill_from(&mut self, session: &GameSession) {
        let board = session.board();
        board.write_grid(&mut self.board);
        self.side = board.side() as u8;
        self.mode = session.mode();
        self.score = session.score();
        self.best = self.best.max(self.score);
        self.moves = session.moves();
        self.game_over = session.is_terminal();
        self.max_tile = board.max_tile();
    }

    pub fn side(&self) -> usize {
        self.side as usize
    }

    /// In-use rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        let side = self.side();
        self.board[..side].iter().map(move |row| &row[..side])
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl From<&GameSession> for GameSnapshot {
    fn from(session: &GameSession) -> Self {
        let mut snap = GameSnapshot::default();
        snap.fill_from(session);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn snapshot_copies_session_fields() {
        let board = Board::from_rows(&[
            [2u32, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 128, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 4],
        ])
        .unwrap();
        let session = GameSession::from_board(Mode::Hardcore, board).unwrap();
        let snap = GameSnapshot::from(&session);
        assert_eq!(snap.side(), 5);
        assert_eq!(snap.mode, Mode::Hardcore);
        assert_eq!(snap.board[2][2], 128);
        assert_eq!(snap.board[4][4], 4);
        assert_eq!(snap.max_tile, 128);
        assert!(snap.playable());
        assert_eq!(snap.rows().count(), 5);
    }

    #[test]
    fn refill_clears_cells_outside_smaller_board() {
        let big = Board::from_rows(&[[2u32; 5]; 5]).unwrap();
        let small = Board::from_rows(&[[0u32, 0, 0, 0]; 4]).unwrap();
        let mut snap = GameSnapshot::from(&GameSession::from_board(Mode::Hardcore, big).unwrap());
        snap.fill_from(&GameSession::from_board(Mode::Classic, small).unwrap());
        assert_eq!(snap.side(), 4);
        assert!(snap.board.iter().flatten().all(|&v| v == 0));
    }
}

use log::{debug, info};

use crate::board::{Board, BoardErr};
use crate::config::Config;
use crate::data::{Dir, Pos};
use crate::engine;
use crate::input;
use crate::moves::{Move, Moves};
use crate::registry::{LevelRegistry, RegistryErr};
use crate::render::Render;

/// One player working through levels from a registry.
///
/// Each click is handled completely (at most one move) before the next one,
/// so the board is never seen half updated.
#[derive(Debug, Clone)]
pub struct Session {
    registry: LevelRegistry,
    config: Config,
    level_id: String,
    board: Board,
    moves: Moves,
}

impl Session {
    pub fn new(registry: LevelRegistry, level_id: &str, config: Config) -> Result<Self, RegistryErr> {
        let board = registry.new_board(level_id)?;
        info!("Starting level {}", level_id);
        Ok(Session {
            registry,
            config,
            level_id: level_id.to_string(),
            board,
            moves: Moves::default(),
        })
    }

    /// Replaces the board with a fresh copy of level `id` and forgets the moves.
    ///
    /// Selecting the current level restarts it.
    /// On error the current level stays.
    pub fn select_level(&mut self, id: &str) -> Result<(), RegistryErr> {
        self.board = self.registry.new_board(id)?;
        self.level_id = id.to_string();
        self.moves.clear();
        info!("Starting level {}", id);
        Ok(())
    }

    /// Moves the player into `target` if it's next to the player.
    pub fn click(&mut self, target: Pos) -> Result<Option<Move>, BoardErr> {
        let mov = engine::click(&mut self.board, target)?;
        if let Some(mov) = mov {
            self.moves.add(mov);
            debug!("Move {} ({} total)", mov, self.moves.move_cnt());
        }
        Ok(mov)
    }

    /// Like `click` but for a pixel position, clicks outside the board are ignored.
    pub fn click_pixel(&mut self, px: i64, py: i64) -> Result<Option<Move>, BoardErr> {
        match input::cell_at_pixel(px, py, self.config.tile_size, &self.board) {
            Some(target) => self.click(target),
            None => {
                debug!("Click at pixel [{}, {}] is outside the board", px, py);
                Ok(None)
            }
        }
    }

    pub fn render<R: Render>(&self, renderer: &mut R) {
        self.board.render(renderer, self.facing());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level_id(&self) -> &str {
        &self.level_id
    }

    pub fn moves(&self) -> &Moves {
        &self.moves
    }

    /// Direction of the last move, up at the start of a level.
    pub fn facing(&self) -> Dir {
        self.moves.last().map_or(Dir::Up, |mov| mov.dir)
    }

    pub fn config(&self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Tile;

    fn session() -> Session {
        Session::new(LevelRegistry::builtin(), "level_0", Config::default()).unwrap()
    }

    #[test]
    fn starting() {
        let session = session();
        assert_eq!(session.level_id(), "level_0");
        assert_eq!(session.board().player_pos(), Some(Pos::new(7, 5)));
        assert_eq!(session.moves().move_cnt(), 0);
        assert_eq!(session.facing(), Dir::Up);
        assert_eq!(session.config(), Config::default());

        let err = Session::new(LevelRegistry::builtin(), "nope", Config::default()).unwrap_err();
        assert_eq!(err, RegistryErr::UnknownLevel("nope".to_string()));
    }

    #[test]
    fn clicking_cells() {
        let mut session = session();
        // box is right of the player
        assert_eq!(session.click(Pos::new(8, 5)), Ok(Some(Move::new(Dir::Right, true))));
        assert_eq!(session.click(Pos::new(9, 5)), Ok(Some(Move::new(Dir::Right, true))));
        assert_eq!(session.click(Pos::new(9, 4)), Ok(Some(Move::new(Dir::Up, false))));
        // not next to the player
        assert_eq!(session.click(Pos::new(1, 1)), Ok(None));

        assert_eq!(session.moves().to_string(), "RRu");
        assert_eq!(session.moves().push_cnt(), 2);
        assert_eq!(session.facing(), Dir::Up);
        assert_eq!(session.board().rows()[4], "#        @ #");
        assert_eq!(session.board().rows()[5], "#    #    $#");
    }

    #[test]
    fn clicking_pixels() {
        let mut session = session();
        // left of the player at [7, 5]
        let outcome = session.click_pixel(6 * 32 + 5, 5 * 32 + 31);
        assert_eq!(outcome, Ok(Some(Move::new(Dir::Left, false))));
        assert_eq!(session.board().player_pos(), Some(Pos::new(6, 5)));
        assert_eq!(session.facing(), Dir::Left);

        let before = session.board().clone();
        assert_eq!(session.click_pixel(12 * 32, 0), Ok(None));
        assert_eq!(session.click_pixel(-3, 40), Ok(None));
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn tile_size_from_config() {
        let config = Config {
            tile_size: 10,
            ..Config::default()
        };
        let mut session = Session::new(LevelRegistry::builtin(), "level_0", config).unwrap();
        // [7, 4], above the player
        let outcome = session.click_pixel(75, 45);
        assert_eq!(outcome, Ok(Some(Move::new(Dir::Up, false))));
    }

    #[test]
    fn replaying_starts_fresh() {
        let mut session = session();
        let original = session.board().clone();
        session.click(Pos::new(8, 5)).unwrap();
        assert_ne!(session.board(), &original);
        assert_eq!(session.facing(), Dir::Right);

        session.select_level("level_1").unwrap();
        assert_eq!(session.level_id(), "level_1");
        assert_eq!(session.moves().move_cnt(), 0);
        assert_eq!(session.facing(), Dir::Up);

        session.select_level("level_0").unwrap();
        assert_eq!(session.board(), &original);

        assert!(session.select_level("missing").is_err());
        assert_eq!(session.level_id(), "level_0");
        assert_eq!(session.board(), &original);
    }

    #[test]
    fn rendering_with_facing() {
        struct Faces(Vec<Tile>);

        impl Render for Faces {
            fn draw_tile(&mut self, _pos: Pos, tile: Tile) {
                match tile {
                    Tile::FaceUp | Tile::FaceRight | Tile::FaceDown | Tile::FaceLeft => {
                        self.0.push(tile)
                    }
                    _ => {}
                }
            }
        }

        let mut session = session();
        session.click(Pos::new(7, 6)).unwrap();
        let mut faces = Faces(Vec::new());
        session.render(&mut faces);
        assert_eq!(faces.0, vec![Tile::FaceDown]);
    }
}

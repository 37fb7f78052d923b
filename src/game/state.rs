use serde::Serialize;

use crate::config::game::{ENDZONE_DEPTH, FIELD_LENGTH, FIELD_WIDTH};
use crate::game::entities::{Ball, Player, Team, TeamSide};
use crate::game::grid::{classify, field_centre};
use crate::game::systems::{
    back_up, check_end_round_condition, fix_players, kick, open_cell_near, step_forward, turn_player,
};
use crate::game::types::{ActionKind, Card, Direction, Occupant, PlayerId, Position, Zone};

/// The authoritative board: both teams, the ball and the field dimensions.
///
/// Serialized as-is for the `board` snapshot consumed by displays.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub team1: Team,
    pub team2: Team,
    pub ball: Ball,
    pub field_length: i32,
    pub field_width: i32,
    pub endzone_depth: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        let mf = field_centre();
        let slot = |dx: i32, dy: i32, d: Direction| Position::new(mf.x + dx, mf.y + dy, d);
        let team1 = Team::new(
            "Team 1",
            "#FF0000",
            vec![
                slot(-2, -1, Direction::East),
                slot(-2, 1, Direction::East),
                slot(-1, -2, Direction::South),
                slot(-1, 2, Direction::North),
            ],
        );
        let team2 = Team::new(
            "Team 2",
            "#0000FF",
            vec![
                slot(2, 1, Direction::West),
                slot(2, -1, Direction::West),
                slot(1, 2, Direction::North),
                slot(1, -2, Direction::South),
            ],
        );
        Board {
            team1,
            team2,
            ball: Ball::at_centre(),
            field_length: FIELD_LENGTH,
            field_width: FIELD_WIDTH,
            endzone_depth: ENDZONE_DEPTH,
        }
    }

    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::One => &self.team1,
            TeamSide::Two => &self.team2,
        }
    }

    pub fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::One => &mut self.team1,
            TeamSide::Two => &mut self.team2,
        }
    }

    /// Every player in join order: team 1 slots, then team 2 slots.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.team1.players.iter().chain(self.team2.players.iter())
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.team1.players.iter_mut().chain(self.team2.players.iter_mut())
    }

    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players().map(|p| p.id.clone()).collect()
    }

    pub fn player_count(&self) -> usize {
        self.team1.players.len() + self.team2.players.len()
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.team1.player(id).or_else(|| self.team2.player(id))
    }

    pub fn player_mut(&mut self, id: &str) -> Option<&mut Player> {
        match self.team_of(id)? {
            TeamSide::One => self.team1.player_mut(id),
            TeamSide::Two => self.team2.player_mut(id),
        }
    }

    pub fn team_of(&self, id: &str) -> Option<TeamSide> {
        if self.team1.player(id).is_some() {
            Some(TeamSide::One)
        } else if self.team2.player(id).is_some() {
            Some(TeamSide::Two)
        } else {
            None
        }
    }

    /// Seat a new player on the smaller team (team 1 on a tie).
    /// Returns `None` once both teams are full or the id is already seated.
    ///
    /// The player keeps its slot as default position but starts on the nearest open
    /// cell. With nothing open around the slot it joins dead and respawns at round end.
    pub fn add_player(&mut self, player: Player) -> Option<TeamSide> {
        if self.player(&player.id).is_some() {
            return None;
        }
        let side = if self.team1.players.len() <= self.team2.players.len() {
            TeamSide::One
        } else {
            TeamSide::Two
        };
        // The smaller team can only be full when both are.
        let slot = self.team(side).next_slot()?;
        let start = open_cell_near(self, slot);
        let id = player.id.clone();
        if !self.team_mut(side).seat(player) {
            return None;
        }
        if let Some(seated) = self.player_mut(&id) {
            match start {
                Some(cell) => seated.pos = cell,
                None => seated.is_dead = true,
            }
        }
        Some(side)
    }

    /// Ball first, then the first live player on the cell. Dead players are off the board.
    pub fn occupant_at(&self, pos: Position) -> Occupant {
        if self.ball.pos.same_cell(&pos) {
            return Occupant::Ball;
        }
        self.players()
            .find(|p| !p.is_dead && p.pos.same_cell(&pos))
            .map(|p| Occupant::Player(p.id.clone()))
            .unwrap_or(Occupant::Empty)
    }

    /// In bounds (field or endzone) and unoccupied.
    pub fn is_open(&self, pos: Position) -> bool {
        classify(pos) != Zone::OutOfBounds && self.occupant_at(pos) == Occupant::Empty
    }

    /// Resolve one card for one player. Dead or unknown players do nothing.
    pub fn apply_move(&mut self, player_id: &str, card: &Card) {
        match self.player(player_id) {
            Some(player) if !player.is_dead => {}
            _ => return,
        }
        match card.action {
            ActionKind::Move1 => {
                step_forward(self, player_id);
            }
            ActionKind::Move2 => {
                step_forward(self, player_id);
                step_forward(self, player_id);
            }
            ActionKind::Backup => {
                back_up(self, player_id);
            }
            ActionKind::Kick => {
                kick(self, player_id);
            }
            ActionKind::TurnLeft => turn_player(self, player_id, 1),
            ActionKind::TurnRight => turn_player(self, player_id, -1),
            ActionKind::TurnAround => turn_player(self, player_id, 2),
        }
    }

    /// Kill players standing in an endzone and score a ball that reached one.
    /// Returns true when a team scored (the board has been reset).
    pub fn check_end_round_condition(&mut self) -> bool {
        check_end_round_condition(self)
    }

    /// Respawn dead players that still have lives. Returns those brought back.
    pub fn fix_players(&mut self) -> Vec<Player> {
        fix_players(self)
    }

    /// Kickoff layout: everyone to their slot, ball to the centre.
    /// Death counters and dead flags are left alone.
    pub fn reset(&mut self) {
        for player in self.players_mut() {
            player.pos = player.default_pos;
        }
        self.ball = Ball::at_centre();
    }
}

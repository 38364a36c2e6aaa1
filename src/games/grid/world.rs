//! Grid world state and rules.

use std::sync::Arc;

use im::HashSet;

use crate::core::{AgentIndex, Move, MoveList, Position};
use crate::state::{AdversaryView, GameState, GridView};

use super::layout::Layout;

/// Moves an adversary stays scared after the player eats a capsule.
pub const SCARED_MOVES: u32 = 40;

const TIME_PENALTY: f64 = 1.0;
const FOOD_REWARD: f64 = 10.0;
const WIN_BONUS: f64 = 500.0;
const LOSE_PENALTY: f64 = 500.0;
const EAT_ADVERSARY_REWARD: f64 = 200.0;

#[derive(Clone, Debug)]
struct Adversary {
    position: Position,
    spawn: Position,
    scared_timer: u32,
}

/// One snapshot of a grid pursuit game.
///
/// Cloning is cheap: the static geometry is shared behind an `Arc` and
/// the food/capsule collections are persistent sets, so the per-clone
/// cost is a handful of pointers plus the adversary list. Successor
/// generation leans on this: every expanded node clones the state once.
///
/// ## Rules
///
/// - Each player move costs 1 point; eating food scores 10; clearing the
///   last food wins (+500).
/// - Contact with an active adversary loses (-500). Contact with a
///   scared one scores 200 and sends it back to its spawn, no longer
///   scared. Contact resolution overrides a same-move win.
/// - Eating a capsule makes every adversary scared for [`SCARED_MOVES`]
///   of its own moves.
/// - `Stop` is legal for the player only.
#[derive(Clone, Debug)]
pub struct GridState {
    layout: Arc<Layout>,
    player: Position,
    adversaries: Vec<Adversary>,
    food: HashSet<Position>,
    capsules: HashSet<Position>,
    score: f64,
    won: bool,
    lost: bool,
}

impl GridState {
    /// Initial state for a layout.
    #[must_use]
    pub fn from_layout(layout: Arc<Layout>) -> Self {
        let adversaries = layout
            .adversary_starts()
            .iter()
            .map(|&spawn| Adversary {
                position: spawn,
                spawn,
                scared_timer: 0,
            })
            .collect();
        let food = layout.food().iter().copied().collect();
        let capsules = layout.capsules().iter().copied().collect();

        Self {
            player: layout.player_start(),
            adversaries,
            food,
            capsules,
            score: 0.0,
            won: false,
            lost: false,
            layout,
        }
    }

    /// Parse a layout and build its initial state.
    pub fn parse(text: &str) -> Result<Self, super::layout::LayoutError> {
        Ok(Self::from_layout(Arc::new(Layout::parse(text)?)))
    }

    /// The board this state lives on.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Remaining food count.
    #[must_use]
    pub fn food_remaining(&self) -> usize {
        self.food.len()
    }

    /// Remaining capsule count.
    #[must_use]
    pub fn capsules_remaining(&self) -> usize {
        self.capsules.len()
    }

    /// Scared timer of one adversary. `agent` must not be the player.
    #[must_use]
    pub fn scared_timer(&self, agent: AgentIndex) -> u32 {
        debug_assert!(!agent.is_player(), "the player has no scared timer");
        self.adversaries[agent.index() - 1].scared_timer
    }

    /// Position of any agent.
    #[must_use]
    pub fn agent_position(&self, agent: AgentIndex) -> Position {
        if agent.is_player() {
            self.player
        } else {
            self.adversaries[agent.index() - 1].position
        }
    }

    fn open(&self, pos: Position) -> bool {
        !self.layout.is_wall(pos)
    }

    /// Resolve player/adversary coincidence after a move.
    fn resolve_contacts(&mut self) {
        for i in 0..self.adversaries.len() {
            if self.adversaries[i].position != self.player {
                continue;
            }
            if self.adversaries[i].scared_timer > 0 {
                self.score += EAT_ADVERSARY_REWARD;
                self.adversaries[i].position = self.adversaries[i].spawn;
                self.adversaries[i].scared_timer = 0;
            } else {
                self.score -= LOSE_PENALTY;
                self.lost = true;
                self.won = false;
            }
        }
    }

    fn apply_player_move(&mut self, mv: Move) {
        self.player = self.player.step(mv);
        debug_assert!(self.open(self.player), "player stepped into a wall");
        self.score -= TIME_PENALTY;

        if self.food.remove(&self.player).is_some() {
            self.score += FOOD_REWARD;
            if self.food.is_empty() {
                self.score += WIN_BONUS;
                self.won = true;
            }
        }

        if self.capsules.remove(&self.player).is_some() {
            for adversary in &mut self.adversaries {
                adversary.scared_timer = SCARED_MOVES;
            }
        }

        self.resolve_contacts();
    }

    fn apply_adversary_move(&mut self, agent: AgentIndex, mv: Move) {
        let i = agent.index() - 1;
        self.adversaries[i].position = self.adversaries[i].position.step(mv);
        debug_assert!(
            self.open(self.adversaries[i].position),
            "adversary stepped into a wall"
        );
        self.resolve_contacts();

        // The mover's own timer runs down; eaten adversaries respawned
        // by contact resolution are already at zero.
        let timer = &mut self.adversaries[i].scared_timer;
        *timer = timer.saturating_sub(1);
    }
}

impl GameState for GridState {
    fn agent_count(&self) -> usize {
        1 + self.adversaries.len()
    }

    fn legal_moves(&self, agent: AgentIndex) -> MoveList {
        let from = self.agent_position(agent);
        let mut moves = MoveList::new();
        for mv in Move::ALL {
            if mv == Move::Stop {
                if agent.is_player() {
                    moves.push(mv);
                }
            } else if self.open(from.step(mv)) {
                moves.push(mv);
            }
        }
        moves
    }

    fn successor(&self, agent: AgentIndex, mv: Move) -> Self {
        debug_assert!(!self.won && !self.lost, "successor of a terminal state");
        let mut next = self.clone();
        if agent.is_player() {
            next.apply_player_move(mv);
        } else {
            next.apply_adversary_move(agent, mv);
        }
        next
    }

    fn is_win(&self) -> bool {
        self.won
    }

    fn is_lose(&self) -> bool {
        self.lost
    }

    fn score(&self) -> f64 {
        self.score
    }
}

impl GridView for GridState {
    fn player_position(&self) -> Position {
        self.player
    }

    fn food(&self) -> Vec<Position> {
        self.food.iter().copied().collect()
    }

    fn adversaries(&self) -> Vec<AdversaryView> {
        self.adversaries
            .iter()
            .map(|a| AdversaryView {
                position: a.position,
                scared_timer: a.scared_timer,
            })
            .collect()
    }
}

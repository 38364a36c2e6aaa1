//! Property-based tests over randomly generated arenas.

use proptest::prelude::*;
use rust_pursuit::Strategy as SearchStrategy;
use rust_pursuit::{
    AgentIndex, CombinedEvaluator, Evaluator, GameState, GridState, Move, ScoreEvaluator,
    SearchAgent, SearchConfig,
};

const INTERIOR_W: usize = 5;
const INTERIOR_H: usize = 3;
const CELLS: usize = INTERIOR_W * INTERIOR_H;

/// Renders a bordered arena with the player, one adversary and a food
/// mask over the interior cells.
fn render_arena(player: usize, ghost: usize, food_bits: u16) -> String {
    let mut rows = vec!["%".repeat(INTERIOR_W + 2)];
    for y in 0..INTERIOR_H {
        let mut row = String::from("%");
        for x in 0..INTERIOR_W {
            let idx = y * INTERIOR_W + x;
            let tile = if idx == player {
                'P'
            } else if idx == ghost {
                'G'
            } else if food_bits & (1 << idx) != 0 {
                '.'
            } else {
                ' '
            };
            row.push(tile);
        }
        row.push('%');
        rows.push(row);
    }
    rows.push("%".repeat(INTERIOR_W + 2));
    rows.join("\n")
}

fn arena() -> impl Strategy<Value = GridState> {
    (0..CELLS, 0..CELLS, any::<u16>())
        .prop_filter("agents must start apart", |(p, g, _)| p != g)
        .prop_map(|(p, g, food)| {
            let text = render_arena(p, g, food);
            GridState::parse(&text).unwrap()
        })
}

proptest! {
    #[test]
    fn prop_alpha_beta_agrees_with_minimax(state in arena(), depth in 1u32..=2) {
        let mut mm = SearchAgent::new(
            CombinedEvaluator::default(),
            SearchConfig::default()
                .with_strategy(SearchStrategy::Minimax)
                .with_max_depth(depth),
        );
        let mut ab = SearchAgent::new(
            CombinedEvaluator::default(),
            SearchConfig::default()
                .with_strategy(SearchStrategy::AlphaBeta)
                .with_max_depth(depth),
        );

        let mm_result = mm.search(&state);
        let ab_result = ab.search(&state);

        prop_assert_eq!(mm_result.value, ab_result.value);
        prop_assert_eq!(mm_result.action, ab_result.action);
        prop_assert!(ab.stats().leaves_evaluated <= mm.stats().leaves_evaluated);
    }

    #[test]
    fn prop_zero_depth_returns_root_evaluation(state in arena()) {
        let mut search = SearchAgent::new(
            ScoreEvaluator,
            SearchConfig::default().with_max_depth(0),
        );
        let result = search.search(&state);

        prop_assert_eq!(result.action, None);
        prop_assert_eq!(result.value, ScoreEvaluator.evaluate(&state));
    }

    #[test]
    fn prop_chosen_action_is_legal(state in arena()) {
        let mut search = SearchAgent::new(
            CombinedEvaluator::default(),
            SearchConfig::default().with_max_depth(2),
        );
        if let Some(action) = search.decide(&state) {
            prop_assert!(state.legal_moves(AgentIndex::PLAYER).contains(&action));
        }
    }

    #[test]
    fn prop_adversaries_never_stop(state in arena()) {
        for agent in AgentIndex::adversaries(state.agent_count()) {
            prop_assert!(!state.legal_moves(agent).contains(&Move::Stop));
        }
    }

    #[test]
    fn prop_player_move_never_raises_walls(state in arena(), mv_idx in 0usize..5) {
        let moves = state.legal_moves(AgentIndex::PLAYER);
        let mv = moves[mv_idx % moves.len()];
        let next = state.successor(AgentIndex::PLAYER, mv);
        let pos = rust_pursuit::GridView::player_position(&next);
        prop_assert!(!state.layout().is_wall(pos));
    }
}

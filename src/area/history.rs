use std::collections::HashMap;

use super::GameId;

/// Outcome ledger row for one game identity: display-name to score.
/// A rematch under the same identity accumulates in the same row.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MatchResult {
    pub game_id: GameId,
    pub scores: HashMap<String, u32>,
}

#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct MatchHistory {
    results: Vec<MatchResult>,
}

impl MatchHistory {
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn find(&self, game_id: GameId) -> Option<&MatchResult> {
        self.results.iter().find(|r| r.game_id == game_id)
    }

    /// Fold one completed round into the ledger.
    ///
    /// If a row for `game_id` exists, the acting participant's score goes up
    /// by one iff they are the winner; other entries stay untouched.
    /// Otherwise a fresh row is created for both participants, seeded with
    /// 1 for the winner and 0 for everyone else. Without a resolvable
    /// opponent no row can be created.
    pub fn record(
        &mut self,
        game_id: GameId,
        actor: &str,
        opponent: Option<&str>,
        winner: Option<&str>,
    ) {
        if let Some(result) = self.results.iter_mut().find(|r| r.game_id == game_id) {
            if winner == Some(actor) {
                *result.scores.entry(actor.to_string()).or_insert(0) += 1;
            }
            return;
        }
        let Some(opponent) = opponent else {
            return;
        };
        let score = |name: &str| u32::from(winner == Some(name));
        let scores = HashMap::from([
            (actor.to_string(), score(actor)),
            (opponent.to_string(), score(opponent)),
        ]);
        self.results.push(MatchResult { game_id, scores });
    }
}

use wordgame_types::GameOutcome;

pub struct ScoreCalculator;

impl ScoreCalculator {
    pub const BASE_SCORE: i32 = 1000;
    pub const WRONG_ATTEMPT_PENALTY: i32 = 50;
    pub const HINT_PENALTY: i32 = 200;

    /// Score a finished round. Starts from the base score, deducts one
    /// point per elapsed second, 50 per wrong attempt and a flat 200
    /// when the hint was used. The result is not clamped: a slow round
    /// can score below zero.
    pub fn calculate(elapsed_seconds: u32, attempts: u32, used_hint: bool) -> i32 {
        let mut score = Self::BASE_SCORE;

        score -= elapsed_seconds as i32;
        score -= attempts as i32 * Self::WRONG_ATTEMPT_PENALTY;

        if used_hint {
            score -= Self::HINT_PENALTY;
        }

        score
    }

    pub fn score_outcome(outcome: &GameOutcome) -> i32 {
        Self::calculate(outcome.elapsed_seconds, outcome.attempts, outcome.used_hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_game_scores_base() {
        assert_eq!(ScoreCalculator::calculate(0, 0, false), 1000);
    }

    #[test]
    fn test_all_penalties_combine() {
        // 1000 - 30 seconds - 2*50 attempts - 200 hint
        assert_eq!(ScoreCalculator::calculate(30, 2, true), 670);
    }

    #[test]
    fn test_time_alone_can_zero_the_score() {
        assert_eq!(ScoreCalculator::calculate(1000, 0, false), 0);
    }

    #[test]
    fn test_score_is_not_clamped_at_zero() {
        assert_eq!(ScoreCalculator::calculate(2000, 0, false), -1000);
        assert_eq!(ScoreCalculator::calculate(500, 20, true), 1000 - 500 - 1000 - 200);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        let first = ScoreCalculator::calculate(42, 3, true);
        for _ in 0..10 {
            assert_eq!(ScoreCalculator::calculate(42, 3, true), first);
        }
    }

    #[test]
    fn test_outcome_scoring_matches_raw_calculation() {
        let outcome = GameOutcome {
            nickname: "alice".to_string(),
            elapsed_seconds: 12,
            attempts: 1,
            used_hint: false,
        };

        assert_eq!(
            ScoreCalculator::score_outcome(&outcome),
            ScoreCalculator::calculate(12, 1, false)
        );
        assert_eq!(ScoreCalculator::score_outcome(&outcome), 938);
    }
}

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.ai >= win_score {
            Some(Side::Ai)
        } else {
            None
        }
    }

    /// Leader by comparing scores; ties go to the opponent
    pub fn leader(&self) -> Side {
        if self.player > self.ai {
            Side::Player
        } else {
            Side::Ai
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: u8,   // bounces off top/bottom this frame
    pub ball_hit_paddle: u8, // bounces off paddles this frame
    pub scored: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = 0;
        self.ball_hit_paddle = 0;
        self.scored = None;
    }

    pub fn bounces(&self) -> u8 {
        self.ball_hit_wall + self.ball_hit_paddle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_player() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        score.increment(Side::Player);
        assert_eq!(score.player, 1);
        score.increment(Side::Player);
        assert_eq!(score.player, 2);
        assert_eq!(score.ai, 0);
    }

    #[test]
    fn test_score_increment_ai() {
        let mut score = Score::new();
        score.increment(Side::Ai);
        assert_eq!(score.ai, 1);
        assert_eq!(score.get(Side::Ai), 1);
        assert_eq!(score.get(Side::Player), 0);
    }

    #[test]
    fn test_score_has_winner_player() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment(Side::Player);
        }
        assert_eq!(score.has_winner(5), Some(Side::Player));
    }

    #[test]
    fn test_score_has_winner_ai() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment(Side::Ai);
        }
        assert_eq!(score.has_winner(5), Some(Side::Ai));
    }

    #[test]
    fn test_score_no_winner_below_threshold() {
        let score = Score { player: 4, ai: 4 };
        assert_eq!(score.has_winner(5), None, "No winner below threshold");
    }

    #[test]
    fn test_score_leader() {
        assert_eq!(Score { player: 5, ai: 3 }.leader(), Side::Player);
        assert_eq!(Score { player: 2, ai: 5 }.leader(), Side::Ai);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.ball_hit_wall = 1;
        events.ball_hit_paddle = 2;
        events.scored = Some(Side::Ai);
        assert_eq!(events.bounces(), 3);

        events.clear();

        assert_eq!(events.bounces(), 0);
        assert_eq!(events.scored, None);
    }
}

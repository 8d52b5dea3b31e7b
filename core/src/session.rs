use rand::Rng;

use crate::*;

/// Draws the live game after every change.
pub trait RenderSink {
    fn render(&mut self, engine: &PuzzleEngine);
}

/// Asks the player for the word of a door they walked into. The answer comes back through
/// [`GameSession::submit_word`].
pub trait UiPrompt {
    fn door_challenge(&mut self, door: &Door);
}

/// One game at a time, wired to its timer, score store and front end.
#[derive(Debug)]
pub struct GameSession<T, S, R, U> {
    builder: LevelBuilder,
    engine: Option<PuzzleEngine>,
    tier: Tier,
    timer: T,
    scores: S,
    render: R,
    prompt: U,
}

impl<T, S, R, U> GameSession<T, S, R, U>
where
    T: Timer,
    S: ScoreStore,
    R: RenderSink,
    U: UiPrompt,
{
    pub fn new(timer: T, scores: S, render: R, prompt: U) -> Self {
        Self {
            builder: LevelBuilder::default(),
            engine: None,
            tier: Tier::default(),
            timer,
            scores,
            render,
            prompt,
        }
    }

    /// Replaces the current game with a freshly built level. On failure the session is left idle.
    pub fn build<C, G>(
        &mut self,
        tier: Tier,
        config: &C,
        rng: &mut G,
    ) -> core::result::Result<(), GenerationFailure>
    where
        C: DifficultyConfig,
        G: Rng + ?Sized,
    {
        self.timer.stop();
        self.engine = None;
        self.tier = tier;

        let level = self.builder.build(tier, config, rng)?;
        self.start(tier, level);
        Ok(())
    }

    fn start(&mut self, tier: Tier, level: Level) {
        self.tier = tier;
        let engine = self.engine.insert(PuzzleEngine::new(level));
        self.timer.start();
        self.render.render(engine);
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let Some(engine) = self.engine.as_mut() else {
            return MoveOutcome::NoChange;
        };

        let outcome = engine.move_player(direction);
        if let MoveOutcome::DoorChallenge(id) = outcome {
            if let Ok(door) = engine.door(id) {
                self.prompt.door_challenge(door);
            }
        }
        if outcome.has_update() {
            self.render.render(engine);
        }
        outcome
    }

    pub fn submit_word(&mut self, id: DoorId, candidate: &str) -> Result<WordOutcome> {
        let Some(engine) = self.engine.as_mut() else {
            return Err(GameError::UnknownDoor(id));
        };

        let outcome = engine.submit_word(id, candidate)?;
        if outcome == WordOutcome::Won {
            self.timer.stop();
            self.scores.save(self.tier, self.timer.elapsed_secs());
        }
        if outcome.has_update() {
            self.render.render(engine);
        }
        Ok(outcome)
    }

    pub fn current_state(&self) -> GameSnapshot {
        self.engine
            .as_ref()
            .map(PuzzleEngine::snapshot)
            .unwrap_or_default()
    }

    pub fn status(&self) -> GameStatus {
        self.engine
            .as_ref()
            .map_or(GameStatus::Idle, PuzzleEngine::state)
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn engine(&self) -> Option<&PuzzleEngine> {
        self.engine.as_ref()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }

    pub fn render_sink(&self) -> &R {
        &self.render
    }

    pub fn prompt(&self) -> &U {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[derive(Default)]
    struct FixedTimer {
        running: bool,
        starts: u32,
    }

    impl Timer for FixedTimer {
        fn start(&mut self) {
            self.running = true;
            self.starts += 1;
        }

        fn stop(&mut self) {
            self.running = false;
        }

        fn elapsed_secs(&self) -> u64 {
            42
        }
    }

    #[derive(Default)]
    struct Frames(Vec<GameSnapshot>);

    impl RenderSink for Frames {
        fn render(&mut self, engine: &PuzzleEngine) {
            self.0.push(engine.snapshot());
        }
    }

    #[derive(Default)]
    struct Challenges(Vec<DoorId>);

    impl UiPrompt for Challenges {
        fn door_challenge(&mut self, door: &Door) {
            self.0.push(door.id);
        }
    }

    type TestSession = GameSession<FixedTimer, Leaderboard, Frames, Challenges>;

    fn session_with(rows: &[&str], words: &[&str]) -> TestSession {
        let mut session = TestSession::new(
            FixedTimer::default(),
            Leaderboard::new(),
            Frames::default(),
            Challenges::default(),
        );
        session.start(Tier::Medium, parse_level(rows, words));
        session
    }

    struct TinyConfig(DifficultyParams);

    impl DifficultyConfig for TinyConfig {
        fn params(&self, _tier: Tier) -> DifficultyParams {
            self.0
        }

        fn select_words<G: Rng + ?Sized>(&self, _tier: Tier, _rng: &mut G) -> TargetWords {
            TargetWords::new(["AB"]).unwrap()
        }
    }

    #[test]
    fn idle_before_the_first_build() {
        let mut session = TestSession::new(
            FixedTimer::default(),
            Leaderboard::new(),
            Frames::default(),
            Challenges::default(),
        );

        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.current_state(), GameSnapshot::default());
        assert_eq!(session.move_player(Direction::East), MoveOutcome::NoChange);
        assert_eq!(
            session.submit_word(DoorId(0), "AB"),
            Err(GameError::UnknownDoor(DoorId(0)))
        );
    }

    #[test]
    fn door_bump_prompts_without_rendering() {
        let mut session = session_with(&["#####", "#@0A#", "#####"], &["A"]);
        let frames_before = session.render_sink().0.len();

        let outcome = session.move_player(Direction::East);

        assert_eq!(outcome, MoveOutcome::DoorChallenge(DoorId(0)));
        assert_eq!(session.prompt().0, [DoorId(0)]);
        assert_eq!(session.render_sink().0.len(), frames_before);
        assert_eq!(session.current_state().player, (1, 1));
    }

    #[test]
    fn winning_saves_one_score() {
        let mut session = session_with(&["#######", "#0@.A1#", "#######"], &["A", "A"]);

        assert_eq!(
            session.submit_word(DoorId(1), "a").unwrap(),
            WordOutcome::Opened(DoorId(1))
        );
        assert!(session.scores().scores(Tier::Medium).is_empty());

        assert_eq!(session.submit_word(DoorId(0), "a").unwrap(), WordOutcome::Won);
        assert_eq!(session.submit_word(DoorId(0), "a").unwrap(), WordOutcome::NoChange);

        assert_eq!(
            session.scores().scores(Tier::Medium),
            [Score { elapsed_secs: 42 }]
        );
        assert!(!session.timer().running);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(
            session.render_sink().0.last().map(|frame| frame.status),
            Some(GameStatus::Won)
        );
    }

    #[test]
    fn moves_render_each_change() {
        let mut session = session_with(&["#####", "#@A.#", "#####"], &[]);

        assert_eq!(session.move_player(Direction::East), MoveOutcome::Collected('A'));
        assert_eq!(session.move_player(Direction::North), MoveOutcome::NoChange);
        assert_eq!(session.move_player(Direction::East), MoveOutcome::Moved);

        // one frame for the start, one per accepted move
        assert_eq!(session.render_sink().0.len(), 3);
        assert_eq!(session.current_state().collected_letters, ['A']);
    }

    #[test]
    fn failed_build_leaves_the_session_idle() {
        let mut session = session_with(&["#####", "#@A.#", "#####"], &[]);
        let config = TinyConfig(DifficultyParams::new((3, 3), 1, (2, 2)).unwrap());
        let mut rng = SmallRng::seed_from_u64(3);

        let failure = session.build(Tier::Hard, &config, &mut rng).unwrap_err();

        assert_eq!(failure.attempts, MAX_BUILD_ATTEMPTS);
        assert_eq!(session.status(), GameStatus::Idle);
        assert!(session.engine().is_none());
        assert!(!session.timer().running);
    }

    #[test]
    fn successful_build_starts_the_clock() {
        let mut session = session_with(&["#####", "#@A.#", "#####"], &[]);
        let config = TinyConfig(DifficultyParams::new((9, 9), 1, (2, 2)).unwrap());
        let mut rng = SmallRng::seed_from_u64(8);

        session.build(Tier::Easy, &config, &mut rng).unwrap();

        assert_eq!(session.status(), GameStatus::Active);
        assert_eq!(session.tier(), Tier::Easy);
        assert_eq!(session.timer().starts, 2);
        assert_eq!(session.current_state().doors.len(), 1);
    }
}

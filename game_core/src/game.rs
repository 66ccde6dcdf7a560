//! Game controller
//!
//! Owns the world (one ball, two paddles), the menu and the match state, and
//! drives them through the screen FSM once per frame.

use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, Color, Config, Controls, Events, GameAction,
    GameMap, GameMode, HighScoreStore, Lives, Menu, Paddle, ScreenFsm, ScreenState, Score, Side,
    Surface, Text, TextSize, Time,
};

/// Input gathered by the frontend for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub controls: Controls,
    pub pointer_down: Option<Vec2>,
    pub confirm: bool,
}

/// How the last match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    VsAi { final_score: u32, new_high_score: bool },
    VsPlayer { winner: Side, score: Score },
}

pub struct Game<S: HighScoreStore> {
    config: Config,
    map: GameMap,
    world: World,
    ball: Entity,
    fsm: ScreenFsm,
    menu: Menu,
    mode: GameMode,
    score: Score,
    lives: Lives,
    high_score: u32,
    store: S,
    time: Time,
    accumulator: f32,
    events: Events,
    score_text: Text,
    lives_text: Text,
    outcome: Option<Outcome>,
}

impl<S: HighScoreStore> Game<S> {
    /// Set up the world and read the stored high score.
    ///
    /// A store that cannot be read counts as no previous high score.
    pub fn new(config: Config, store: S) -> Self {
        let map = GameMap::new(&config);
        let mut world = World::new();
        create_paddle(&mut world, &config, Side::Left);
        create_paddle(&mut world, &config, Side::Right);
        let ball = create_ball(
            &mut world,
            &config,
            config.ball_spawn(),
            config.ball_velocity(),
        );

        let high_score = match store.load() {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!("starting without a high score: {e}");
                0
            }
        };
        let mut menu = Menu::new(&config);
        menu.set_high_score(high_score);

        let score = Score::new();
        let lives = Lives::new(config.starting_lives);
        let center_x = config.window_width / 2.0;

        Self {
            score_text: Text::centered(score.text(), Vec2::new(center_x, 35.0), TextSize::LABEL),
            lives_text: Text::new(lives.text(), Vec2::new(20.0, 20.0), TextSize::LABEL),
            config,
            map,
            world,
            ball,
            fsm: ScreenFsm::new(),
            menu,
            mode: GameMode::default(),
            score,
            lives,
            high_score,
            store,
            time: Time::default(),
            accumulator: 0.0,
            events: Events::new(),
            outcome: None,
        }
    }

    /// Run one frame: screen input, simulation, drawing
    pub fn tick(&mut self, dt: f32, input: &FrameInput, surface: &mut impl Surface) {
        if let Some(point) = input.pointer_down {
            self.pointer_down(point);
        }
        if input.confirm {
            self.confirm();
        }
        self.update(dt, &input.controls);
        self.render(surface);
    }

    /// Mouse button pressed at `point`; on the menu this picks a mode
    pub fn pointer_down(&mut self, point: Vec2) {
        if self.fsm.state() != ScreenState::Menu {
            return;
        }
        if self.menu.hit_test_ai(point) {
            self.start(GameMode::VsAi);
        } else if self.menu.hit_test_pvp(point) {
            self.start(GameMode::VsPlayer);
        }
    }

    /// Confirm key; leaves the game-over screen
    pub fn confirm(&mut self) {
        if self.fsm.transition(GameAction::Confirm).success {
            self.menu.set_high_score(self.high_score);
        }
    }

    fn start(&mut self, mode: GameMode) {
        let action = match mode {
            GameMode::VsAi => GameAction::StartVsAi,
            GameMode::VsPlayer => GameAction::StartVsPlayer,
        };
        if !self.fsm.transition(action).success {
            return;
        }

        self.mode = mode;
        self.score = Score::new();
        self.lives = Lives::new(self.config.starting_lives);
        self.outcome = None;
        self.accumulator = 0.0;
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.reset(self.config.ball_spawn());
        }
        self.refresh_hud();

        tracing::info!(?mode, "match started");
    }

    /// Advance the running match by `dt` seconds.
    ///
    /// The frame time is clamped to `max_dt` and added to an accumulator that
    /// is drained in whole `fixed_dt` steps; the remainder carries over to the
    /// next frame. Does nothing outside the playing screen.
    pub fn update(&mut self, dt: f32, controls: &Controls) {
        if !self.fsm.is_playing() {
            return;
        }

        self.accumulator += dt.clamp(0.0, self.config.max_dt);
        while self.accumulator >= self.config.fixed_dt {
            self.accumulator -= self.config.fixed_dt;
            let step_dt = self.config.fixed_dt;
            self.time = Time::new(step_dt, self.time.now + step_dt);

            step(
                &mut self.world,
                &self.time,
                &self.map,
                &self.config,
                self.mode,
                controls,
                &mut self.score,
                &mut self.events,
            );
            self.apply_events();

            if self.match_over() {
                self.finish();
                self.accumulator = 0.0;
                break;
            }
        }

        self.refresh_hud();
    }

    fn apply_events(&mut self) {
        if self.events.ball_hit_paddle {
            tracing::debug!("ball hit paddle");
        }
        if self.events.ball_hit_wall {
            tracing::debug!("ball hit wall");
        }
        if self.events.left_scored {
            tracing::debug!(score = %self.score.text(), "left player scored");
        }
        if self.events.right_scored {
            tracing::debug!(score = %self.score.text(), "right player scored");
            if self.mode == GameMode::VsAi {
                self.lives.lose_one();
                tracing::debug!(remaining = self.lives.remaining, "life lost");
            }
        }
    }

    fn match_over(&self) -> bool {
        match self.mode {
            GameMode::VsAi => self.lives.is_exhausted(),
            GameMode::VsPlayer => self.score.has_winner(self.config.target_score).is_some(),
        }
    }

    fn finish(&mut self) {
        let outcome = match self.mode {
            GameMode::VsAi => {
                let final_score = self.score.left;
                let new_high_score = final_score > self.high_score;
                if new_high_score {
                    self.high_score = final_score;
                    tracing::info!(high_score = final_score, "new high score");
                    if let Err(e) = self.store.save(final_score) {
                        tracing::warn!("high score not saved: {e}");
                    }
                }
                self.menu.set_high_score(self.high_score);
                Outcome::VsAi {
                    final_score,
                    new_high_score,
                }
            }
            GameMode::VsPlayer => {
                let winner = if self.score.left > self.score.right {
                    Side::Left
                } else {
                    Side::Right
                };
                Outcome::VsPlayer {
                    winner,
                    score: self.score,
                }
            }
        };

        tracing::info!(?outcome, "match finished");
        self.outcome = Some(outcome);
        self.fsm.transition(GameAction::GameOver);
    }

    fn refresh_hud(&mut self) {
        self.score_text.set_content(self.score.text());
        self.lives_text.set_content(self.lives.text());
    }

    /// Draw the current screen
    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear(Color::BLACK);

        match self.fsm.state() {
            ScreenState::Menu => self.menu.draw(surface),
            ScreenState::Playing => self.draw_match(surface),
            ScreenState::GameOver => self.draw_game_over(surface),
        }
    }

    fn draw_match(&self, surface: &mut impl Surface) {
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            surface.fill_rect(paddle.bounds(), Color::WHITE);
        }
        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            surface.fill_circle(ball.center(), ball.radius, Color::WHITE);
        }

        surface.draw_text(&self.score_text);
        if self.mode == GameMode::VsAi {
            surface.draw_text(&self.lives_text);
        }
    }

    fn draw_game_over(&self, surface: &mut impl Surface) {
        let center_x = self.config.window_width / 2.0;
        let line = |content: String, y: f32, size: TextSize| {
            Text::centered(content, Vec2::new(center_x, y), size)
        };

        surface.draw_text(&line("GAME OVER".to_string(), 150.0, TextSize::TITLE));

        match self.outcome {
            Some(Outcome::VsAi {
                final_score,
                new_high_score,
            }) => {
                surface.draw_text(&line(
                    format!("Final Score: {final_score}"),
                    260.0,
                    TextSize::LABEL,
                ));
                if new_high_score {
                    surface.draw_text(&line(
                        "New High Score!".to_string(),
                        310.0,
                        TextSize::LABEL,
                    ));
                }
            }
            Some(Outcome::VsPlayer { winner, score }) => {
                let name = match winner {
                    Side::Left => "Left",
                    Side::Right => "Right",
                };
                surface.draw_text(&line(
                    format!("{name} Player Wins!"),
                    260.0,
                    TextSize::LABEL,
                ));
                surface.draw_text(&line(score.text(), 310.0, TextSize::LABEL));
            }
            None => {}
        }

        surface.draw_text(&line(
            "Press Enter to return to menu".to_string(),
            420.0,
            TextSize::BUTTON,
        ));
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> ScreenState {
        self.fsm.state()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives.remaining
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn score_text(&self) -> &str {
        &self.score_text.content
    }

    pub fn lives_text(&self) -> &str {
        &self.lives_text.content
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    /// Direct world access, for staging positions
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

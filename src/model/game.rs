//! The session state machine: setup rounds, generations, win/draw.
//!
//! ## Flow
//!
//! 1. Every player in seating order gets their area unlocked and places
//!    creatures until their budget is spent (`K` in the first round, `N`
//!    afterwards). Placing decrements the budget, taking a creature back
//!    increments it.
//! 2. Up to `T` generations are computed over the whole board.
//! 3. One surviving owner wins, no survivors is a draw. Either ends the
//!    round and the model waits for the user to restart or close. Two or
//!    more survivors after `T` generations start the next setup round.
//!
//! Each generation is computed in two passes: every transition is collected
//! into an aside buffer against the unchanged board, then the buffer is
//! applied and emptied.

use std::rc::Rc;

use tracing::{debug, info, instrument, warn};

use super::input::{InputEvent, UserInput};
use super::state::{AsideOp, ModelState};
use super::tracker::SetupTracker;
use crate::core::{
    ConfigError, FieldError, GameRng, GameRngState, LifeConfig, Player, PlayerId, PlayerMap,
    RoundConfig,
};
use crate::events::{EventKind, ModelEvent, Subject};
use crate::field::{AreaFactory, Field, FieldArea};
use crate::rules::{attribute_newborn, Conway, LifeRule, RoundOutcome};

/// Orchestrates one session over a shared field.
///
/// # Example
///
/// ```
/// use life_arena::core::{CellPos, LifeConfig, RoundConfig, ShapeConfig};
/// use life_arena::model::{GameModel, ModelState, ScriptedInput};
///
/// let config = LifeConfig::default()
///     .with_board(6, 4, ShapeConfig::Rectangle)
///     .with_rounds(RoundConfig {
///         first_round_creatures: 3,
///         round_creatures: 3,
///         generations_per_round: 5,
///     });
/// let mut model = GameModel::from_config(&config).unwrap();
///
/// // Player 0 builds an L that grows into a block; player 1 scatters
/// // three loners that starve.
/// let mut input = ScriptedInput::new()
///     .taps([CellPos::new(0, 0), CellPos::new(1, 0), CellPos::new(0, 1)])
///     .taps([CellPos::new(3, 0), CellPos::new(5, 0), CellPos::new(3, 3)])
///     .close();
/// model.run(&mut input).unwrap();
///
/// assert_eq!(model.winner().map(|p| p.index()), Some(0));
/// assert_eq!(model.state(), ModelState::Closed);
/// ```
#[derive(Debug)]
pub struct GameModel {
    rounds: RoundConfig,
    field: Rc<Field>,
    judge: FieldArea,
    aside: Vec<AsideOp>,
    players: Vec<Player>,
    rule: Box<dyn LifeRule>,
    rng: GameRng,
    events: Subject<ModelEvent>,
    tracker: Rc<SetupTracker>,
    state: ModelState,
    setup_phase: bool,
    round_is_over: bool,
    asked_restart: bool,
    asked_close: bool,
    current_player: Option<PlayerId>,
    winner: Option<PlayerId>,
    round: u32,
    generations_remaining: u32,
}

impl GameModel {
    /// Build the field and seat the players in configuration order.
    /// [`GameModel::new`] hands each of them a vertical strip.
    pub fn from_config(config: &LifeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = &config.board;
        let field = Rc::new(Field::new(
            board.width,
            board.height,
            board.shape.build(board.width, board.height),
        )?);

        let players = PlayerId::all(config.players.len())
            .zip(&config.players)
            .map(|(id, name)| Player::new(id, name.as_str()))
            .collect();

        Self::new(config.rounds, field, players, config.seed)
    }

    /// Assemble a model from parts.
    ///
    /// Ids must be unique and run `0..players.len()` in any seating order.
    /// Players keep the areas they carry, which must lie over `field`; a
    /// player without one gets the vertical strip matching their seat.
    pub fn new(
        rounds: RoundConfig,
        field: Rc<Field>,
        mut players: Vec<Player>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        rounds.validate()?;
        let first = players.first().map(Player::id).ok_or(ConfigError::NoPlayers)?;
        if players.len() > usize::from(u8::MAX) {
            return Err(ConfigError::TooManyPlayers(players.len()));
        }
        Self::check_roster(&field, &players)?;

        if players.iter().any(|p| p.field_area().is_none()) {
            let strips = AreaFactory::new(Rc::clone(&field)).vertical_strips(players.len())?;
            for (player, strip) in players.iter_mut().zip(strips) {
                if player.field_area().is_none() {
                    debug!(player = %player.id(), "assigning seat strip");
                    player.set_field_area(strip);
                }
            }
        }

        let mut judge = FieldArea::whole(Rc::clone(&field));
        judge.unlock();

        let tracker = Rc::new(SetupTracker::new());
        field
            .events()
            .attach_all(&tracker, &[EventKind::CreatureSet, EventKind::CreatureRemoved]);

        Ok(Self {
            rounds,
            field,
            judge,
            aside: Vec::new(),
            players,
            rule: Box::new(Conway),
            rng: GameRng::new(seed),
            events: Subject::new(),
            tracker,
            state: ModelState::AwaitingSetup(first),
            setup_phase: false,
            round_is_over: false,
            asked_restart: false,
            asked_close: false,
            current_player: None,
            winner: None,
            round: 0,
            generations_remaining: 0,
        })
    }

    fn check_roster(field: &Rc<Field>, players: &[Player]) -> Result<(), ConfigError> {
        let mut seated = vec![false; players.len()];
        for player in players {
            let id = player.id();
            match seated.get_mut(id.index()) {
                None => {
                    return Err(ConfigError::PlayerOutOfRange {
                        id,
                        players: players.len(),
                    })
                }
                Some(true) => return Err(ConfigError::DuplicatePlayer(id)),
                Some(slot) => *slot = true,
            }
            if let Some(area) = player.field_area() {
                if !Rc::ptr_eq(area.field(), field) {
                    return Err(ConfigError::ForeignArea(id));
                }
            }
        }
        Ok(())
    }

    /// Replace the life rule (Conway by default).
    #[must_use]
    pub fn with_rule(mut self, rule: impl LifeRule + 'static) -> Self {
        self.rule = Box::new(rule);
        self
    }

    /// Subject the model publishes [`ModelEvent`]s through.
    #[must_use]
    pub fn events(&self) -> &Subject<ModelEvent> {
        &self.events
    }

    #[must_use]
    pub fn field(&self) -> &Rc<Field> {
        &self.field
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn rounds(&self) -> &RoundConfig {
        &self.rounds
    }

    #[must_use]
    pub fn state(&self) -> ModelState {
        self.state
    }

    /// The player placing creatures, during setup only.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current_player
    }

    /// Creatures the current player still has to place. Zero outside setup.
    #[must_use]
    pub fn moves_remaining(&self) -> u32 {
        self.tracker.remaining()
    }

    #[must_use]
    pub fn generations_remaining(&self) -> u32 {
        self.generations_remaining
    }

    /// Winner of the finished round, if it had one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// 0-based setup round within the current session.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Tie-break RNG position, for replaying a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Creatures on the board per seated player.
    #[must_use]
    pub fn population(&self) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(self.players.len(), 0);
        for (_, owner) in self.field.occupancy() {
            // creatures placed straight on the field may name anyone
            if owner.index() < counts.player_count() {
                counts[owner] += 1;
            }
        }
        counts
    }

    #[must_use]
    pub fn is_setup_phase(&self) -> bool {
        self.setup_phase
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.round_is_over
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.asked_close
    }

    fn stop_requested(&self) -> bool {
        self.asked_close || self.asked_restart
    }

    fn first_player(&self) -> PlayerId {
        self.players.first().map_or(PlayerId::new(0), Player::id)
    }

    /// Let `player` place `budget` creatures.
    ///
    /// Returns once the budget is spent or a close/restart arrives. Taps the
    /// player's area refuses are ignored.
    pub fn setup_player(&mut self, player: PlayerId, budget: u32, input: &mut dyn UserInput) {
        let Some(index) = self.players.iter().position(|p| p.id() == player) else {
            warn!(%player, "setup requested for an unknown player");
            return;
        };

        self.state = ModelState::AwaitingSetup(player);
        self.current_player = Some(player);
        self.tracker.begin(player, budget);
        if let Some(area) = self.players[index].field_area_mut() {
            area.unlock();
        }
        info!(%player, budget, round = self.round, "setup started");

        while self.tracker.remaining() > 0 && !self.stop_requested() {
            let remaining = self.tracker.remaining();
            self.state = ModelState::SetupInProgress { player, remaining };
            self.events.notify(&ModelEvent::PlayerTurn { player, remaining });
            self.events.notify(&ModelEvent::InputRequired { player });

            match input.read_input() {
                InputEvent::Close => self.close(),
                InputEvent::Restart => self.request_restart(),
                InputEvent::SetCreature => match input.last_coord_input() {
                    Some(pos) => {
                        let outcome = self.players[index].tap_on_creature(pos);
                        debug!(%player, %pos, ?outcome, "tap");
                    }
                    None => debug!(%player, "tap missed the board"),
                },
                InputEvent::Idle => {}
            }
        }

        if let Some(area) = self.players[index].field_area_mut() {
            area.lock();
        }
        self.tracker.finish();
    }

    /// One setup slice for every player, in seating order.
    pub fn setup_round(&mut self, input: &mut dyn UserInput) {
        let budget = self.rounds.creatures_for_round(self.round);
        let seating: Vec<PlayerId> = self.players.iter().map(Player::id).collect();

        self.setup_phase = true;
        for player in seating {
            if self.stop_requested() {
                break;
            }
            self.setup_player(player, budget, input);
        }
        self.setup_phase = false;
        self.current_player = None;
    }

    /// Advance the board by one generation and judge it.
    ///
    /// Errors only if the judge area cannot reach a cell it enumerated,
    /// which means the field was misconfigured.
    #[instrument(level = "debug", skip(self), fields(round = self.round))]
    pub fn compute_generation(&mut self) -> Result<RoundOutcome, FieldError> {
        self.compute_aside()?;
        let (born, died) = self.apply_n_clear_aside()?;

        self.generations_remaining = self.generations_remaining.saturating_sub(1);
        self.state = ModelState::Computing {
            generations_remaining: self.generations_remaining,
        };
        debug!(born, died, remaining = self.generations_remaining, "generation computed");
        self.events.notify(&ModelEvent::GenerationComputed {
            remaining: self.generations_remaining,
        });

        Ok(self.check_outcome())
    }

    fn compute_aside(&mut self) -> Result<(), FieldError> {
        let mut aside = std::mem::take(&mut self.aside);
        aside.clear();

        for pos in self.judge.cells() {
            let counts = self.judge.count_cell_neighbors_creatures(pos)?;
            let alive = self.judge.has_creature_in_cell(pos)?;
            match (alive, self.rule.next_alive(alive, counts.total())) {
                (false, true) => {
                    if let Some(owner) = attribute_newborn(&counts, &mut self.rng) {
                        aside.push(AsideOp::Spawn { pos, owner });
                    }
                }
                (true, false) => aside.push(AsideOp::Clear { pos }),
                _ => {}
            }
        }

        self.aside = aside;
        Ok(())
    }

    fn apply_n_clear_aside(&mut self) -> Result<(usize, usize), FieldError> {
        let (mut born, mut died) = (0, 0);
        for op in self.aside.drain(..) {
            match op {
                AsideOp::Spawn { pos, owner } => {
                    self.judge.set_creature_in_cell(pos, owner)?;
                    born += 1;
                }
                AsideOp::Clear { pos } => {
                    self.judge.remove_creature_in_cell(pos)?;
                    died += 1;
                }
            }
        }
        Ok((born, died))
    }

    /// Judge the board as it stands and publish a winner or a draw.
    pub fn check_outcome(&mut self) -> RoundOutcome {
        let outcome = RoundOutcome::from_survivors(&self.judge.check_creature_in_area());
        match outcome {
            RoundOutcome::Winner(player) => {
                info!(%player, round = self.round, "winner determined");
                self.finish_round(outcome);
                self.winner = Some(player);
                self.events.notify(&ModelEvent::WinnerDetermined { player });
            }
            RoundOutcome::Draw => {
                info!(round = self.round, "draw determined");
                self.finish_round(outcome);
                self.events.notify(&ModelEvent::DrawDetermined);
            }
            RoundOutcome::Continue => {}
        }
        outcome
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        self.round_is_over = true;
        self.state = ModelState::RoundOver(outcome);
    }

    /// Compute up to `T` generations, stopping early on a winner or a draw.
    ///
    /// [`RoundOutcome::Continue`] means the budget ran out undecided.
    pub fn compute_round(&mut self) -> Result<RoundOutcome, FieldError> {
        self.generations_remaining = self.rounds.generations_per_round;
        info!(
            round = self.round,
            generations = self.generations_remaining,
            "computing generations"
        );

        while self.generations_remaining > 0 && !self.stop_requested() {
            self.state = ModelState::Computing {
                generations_remaining: self.generations_remaining,
            };
            let outcome = self.compute_generation()?;
            if outcome.is_decided() {
                return Ok(outcome);
            }
        }
        debug!(round = self.round, "generation budget spent without a result");
        Ok(RoundOutcome::Continue)
    }

    /// Alternate setup and generations until the round is decided or a
    /// close/restart arrives.
    fn play_rounds(&mut self, input: &mut dyn UserInput) -> Result<(), FieldError> {
        while !self.round_is_over && !self.stop_requested() {
            self.setup_round(input);
            if self.stop_requested() {
                break;
            }
            if !self.compute_round()?.is_decided() {
                self.round += 1;
            }
        }
        Ok(())
    }

    fn await_user_decision(&mut self, input: &mut dyn UserInput) {
        self.state = ModelState::AwaitingUserDecision;
        while !self.stop_requested() {
            match input.read_input() {
                InputEvent::Close => self.close(),
                InputEvent::Restart => self.request_restart(),
                InputEvent::SetCreature | InputEvent::Idle => {}
            }
        }
    }

    /// Drive the session until the user closes it.
    ///
    /// A decided round waits for a restart or close; a restart clears the
    /// board and begins again from the first round.
    #[instrument(level = "info", skip_all)]
    pub fn run(&mut self, input: &mut dyn UserInput) -> Result<(), FieldError> {
        info!(players = self.players.len(), "session started");
        while !self.asked_close {
            self.play_rounds(input)?;
            if self.round_is_over && !self.stop_requested() {
                self.await_user_decision(input);
            }
            if self.asked_restart && !self.asked_close {
                self.restart_model();
            }
        }
        self.state = ModelState::Closed;
        info!(round = self.round, "session closed");
        Ok(())
    }

    /// Ask the running session to start over at the next check.
    pub fn request_restart(&mut self) {
        debug!("restart requested");
        self.asked_restart = true;
    }

    /// Clear the board and all round state. Players and areas are kept.
    pub fn restart_model(&mut self) {
        info!(round = self.round, "restarting session");
        self.judge.clear();
        for player in &mut self.players {
            if let Some(area) = player.field_area_mut() {
                area.lock();
            }
        }
        self.tracker.finish();
        self.aside.clear();
        self.setup_phase = false;
        self.round_is_over = false;
        self.asked_restart = false;
        self.current_player = None;
        self.winner = None;
        self.round = 0;
        self.generations_remaining = 0;
        self.state = ModelState::AwaitingSetup(self.first_player());
    }

    /// Stop every wait loop. Terminal.
    pub fn close(&mut self) {
        info!("close requested");
        self.asked_close = true;
        self.state = ModelState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CellPos, ShapeConfig};
    use crate::model::ScriptedInput;

    fn small_config(budget: u32) -> LifeConfig {
        LifeConfig::default()
            .with_board(6, 4, ShapeConfig::Rectangle)
            .with_rounds(RoundConfig {
                first_round_creatures: budget,
                round_creatures: budget,
                generations_per_round: 3,
            })
    }

    #[test]
    fn test_from_config_splits_board() {
        let model = GameModel::from_config(&small_config(2)).unwrap();
        assert_eq!(model.players().len(), 2);

        let left = model.players()[0].field_area().unwrap();
        let right = model.players()[1].field_area().unwrap();
        assert_eq!(left.lower_right_corner(), CellPos::new(2, 3));
        assert_eq!(right.upper_left_corner(), CellPos::new(3, 0));
        assert!(left.is_locked() && right.is_locked());
        assert_eq!(model.state(), ModelState::AwaitingSetup(PlayerId::new(0)));
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = small_config(2).with_players(Vec::<String>::new());
        assert_eq!(GameModel::from_config(&config).unwrap_err(), ConfigError::NoPlayers);
    }

    fn bare_field() -> Rc<Field> {
        Rc::new(Field::new(6, 4, Box::new(crate::field::Rectangle)).unwrap())
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let players = vec![
            Player::new(PlayerId::new(0), "a"),
            Player::new(PlayerId::new(0), "b"),
        ];
        let err = GameModel::new(RoundConfig::default(), bare_field(), players, 1).unwrap_err();
        assert_eq!(err, ConfigError::DuplicatePlayer(PlayerId::new(0)));
    }

    #[test]
    fn test_new_rejects_gapped_ids() {
        let players = vec![
            Player::new(PlayerId::new(1), "a"),
            Player::new(PlayerId::new(2), "b"),
        ];
        let err = GameModel::new(RoundConfig::default(), bare_field(), players, 1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::PlayerOutOfRange {
                id: PlayerId::new(2),
                players: 2
            }
        );
    }

    #[test]
    fn test_new_accepts_any_seating_order() {
        let players = vec![
            Player::new(PlayerId::new(1), "b"),
            Player::new(PlayerId::new(0), "a"),
        ];
        let model = GameModel::new(RoundConfig::default(), bare_field(), players, 1).unwrap();
        model.field().set_creature_in_cell(CellPos::new(0, 0), PlayerId::new(1)).unwrap();
        model.field().set_creature_in_cell(CellPos::new(1, 0), PlayerId::new(1)).unwrap();

        let population = model.population();
        assert_eq!(population[PlayerId::new(1)], 2);
        assert_eq!(population[PlayerId::new(0)], 0);
        assert_eq!(model.state(), ModelState::AwaitingSetup(PlayerId::new(1)));
        // the first seat takes the left strip
        assert_eq!(
            model.player(PlayerId::new(1)).unwrap().field_area().unwrap().upper_left_corner(),
            CellPos::new(0, 0)
        );
    }

    #[test]
    fn test_new_rejects_area_over_other_field() {
        let mut player = Player::new(PlayerId::new(0), "a");
        player.set_field_area(FieldArea::whole(bare_field()));
        let err =
            GameModel::new(RoundConfig::default(), bare_field(), vec![player], 1).unwrap_err();
        assert_eq!(err, ConfigError::ForeignArea(PlayerId::new(0)));
    }

    #[test]
    fn test_new_keeps_carried_areas() {
        let field = bare_field();
        let mut player = Player::new(PlayerId::new(0), "a");
        let area = AreaFactory::new(Rc::clone(&field))
            .create_area(CellPos::new(4, 2), CellPos::new(5, 3))
            .unwrap();
        player.set_field_area(area);
        let players = vec![player, Player::new(PlayerId::new(1), "b")];

        let model = GameModel::new(RoundConfig::default(), field, players, 1).unwrap();
        let areas: Vec<_> = model
            .players()
            .iter()
            .map(|p| p.field_area().unwrap().upper_left_corner())
            .collect();
        assert_eq!(areas, vec![CellPos::new(4, 2), CellPos::new(3, 0)]);
    }

    #[test]
    fn test_setup_player_spends_budget() {
        let mut model = GameModel::from_config(&small_config(2)).unwrap();
        let mut input = ScriptedInput::new()
            .tap(CellPos::new(4, 0)) // right strip, rejected for player 0
            .tap(CellPos::new(0, 0))
            .tap(CellPos::new(0, 0)) // take it back
            .tap(CellPos::new(1, 1))
            .tap(CellPos::new(2, 2));

        model.setup_player(PlayerId::new(0), 2, &mut input);

        assert_eq!(input.remaining(), 0);
        assert_eq!(
            model.field().occupancy(),
            vec![
                (CellPos::new(1, 1), PlayerId::new(0)),
                (CellPos::new(2, 2), PlayerId::new(0)),
            ]
        );
        assert!(model.players()[0].field_area().unwrap().is_locked());
        assert_eq!(model.moves_remaining(), 0);
    }

    #[test]
    fn test_close_during_setup_stops() {
        let mut model = GameModel::from_config(&small_config(3)).unwrap();
        let mut input = ScriptedInput::new().tap(CellPos::new(0, 0)).close();

        model.setup_round(&mut input);

        assert!(model.is_closed());
        assert_eq!(model.state(), ModelState::Closed);
        assert_eq!(model.field().occupancy().len(), 1);
        assert_eq!(model.current_player(), None);
    }

    #[test]
    fn test_compute_generation_is_simultaneous() {
        let mut model = GameModel::from_config(&small_config(3)).unwrap();
        let field = Rc::clone(model.field());
        for x in 1..=3 {
            field.set_creature_in_cell(CellPos::new(x, 1), PlayerId::new(0)).unwrap();
        }
        field.set_creature_in_cell(CellPos::new(5, 3), PlayerId::new(1)).unwrap();

        let outcome = model.compute_generation().unwrap();

        assert_eq!(outcome, RoundOutcome::Winner(PlayerId::new(0)));
        assert_eq!(model.population()[PlayerId::new(0)], 3);
        assert_eq!(model.population()[PlayerId::new(1)], 0);
        assert_eq!(
            field.occupancy(),
            vec![
                (CellPos::new(2, 0), PlayerId::new(0)),
                (CellPos::new(2, 1), PlayerId::new(0)),
                (CellPos::new(2, 2), PlayerId::new(0)),
            ]
        );
        assert!(model.is_round_over());
    }

    #[test]
    fn test_restart_resets_round_state() {
        let mut model = GameModel::from_config(&small_config(1)).unwrap();
        model.field().set_creature_in_cell(CellPos::new(0, 0), PlayerId::new(1)).unwrap();
        model.check_outcome();
        assert_eq!(model.winner(), Some(PlayerId::new(1)));

        model.restart_model();

        assert!(model.field().occupancy().is_empty());
        assert_eq!(model.winner(), None);
        assert!(!model.is_round_over());
        assert_eq!(model.round(), 0);
        assert_eq!(model.state(), ModelState::AwaitingSetup(PlayerId::new(0)));
    }

    #[test]
    fn test_custom_rule() {
        #[derive(Debug)]
        struct Freeze;
        impl LifeRule for Freeze {
            fn next_alive(&self, is_alive: bool, _: u32) -> bool {
                is_alive
            }
        }

        let mut model = GameModel::from_config(&small_config(1)).unwrap().with_rule(Freeze);
        model.field().set_creature_in_cell(CellPos::new(0, 0), PlayerId::new(0)).unwrap();
        model.field().set_creature_in_cell(CellPos::new(5, 3), PlayerId::new(1)).unwrap();

        assert_eq!(model.compute_generation().unwrap(), RoundOutcome::Continue);
        assert_eq!(model.field().occupancy().len(), 2);
    }
}

use rand::RngCore;
use serde::Serialize;

use super::achievements::{Achievement, AchievementLedger, award_achievements, settle_outcome};
use super::choice::{ChoiceOutcome, apply_choice};
use super::config::TurnConfig;
use super::turn::{
    Outcome, TurnReport, conclude_cycle, outcome_of, record_achievements, resolve_cycle,
};
use crate::error::TurnError;
use crate::model::{GameState, PlayerAction};
use crate::store::StateStore;
use crate::worldgen::{NewGameConfig, generate_game};

/// A concluded turn whose commit failed. Holds the working copy so the
/// commit can be retried without rolling the cycle again.
#[derive(Debug)]
struct PendingTurn {
    state: GameState,
    report: TurnReport,
}

/// Outcome of resolving a dilemma.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceReport {
    pub title: String,
    #[serde(flatten)]
    pub choice: ChoiceOutcome,
    pub unlocked: Vec<Achievement>,
    pub outcome: Outcome,
}

/// Owns the active game and drives it one cycle at a time.
///
/// Every mutation runs on a copy of the current state. The copy replaces the
/// caller-visible state only after the store accepted it, so a failed commit
/// never exposes a half-finished turn.
pub struct TurnEngine<S, L> {
    state: Option<GameState>,
    pending: Option<PendingTurn>,
    rng: Box<dyn RngCore>,
    store: S,
    ledger: L,
    config: TurnConfig,
}

impl<S: StateStore, L: AchievementLedger> TurnEngine<S, L> {
    pub fn new(rng: Box<dyn RngCore>, store: S, ledger: L, config: TurnConfig) -> Self {
        Self {
            state: None,
            pending: None,
            rng,
            store,
            ledger,
            config,
        }
    }

    /// Generate and commit a fresh game, replacing any active one.
    pub fn start(&mut self, config: &NewGameConfig) -> Result<&GameState, TurnError> {
        let state = generate_game(config);
        self.store.commit(&state)?;
        self.pending = None;
        Ok(&*self.state.insert(state))
    }

    /// Resume a previously saved game. The state is clamped on the way in.
    pub fn load(&mut self, mut state: GameState) -> &GameState {
        state.clamp();
        tracing::info!(cycle = state.cycle, faction = %state.faction.name, "game loaded");
        self.pending = None;
        self.state.insert(state)
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn config(&self) -> &TurnConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Report of a resolved turn still waiting on [`TurnEngine::commit_pending`].
    pub fn pending_turn(&self) -> Option<&TurnReport> {
        self.pending.as_ref().map(|p| &p.report)
    }

    /// Resolve one full cycle for `actions`.
    ///
    /// On [`TurnError::Persistence`] the concluded turn is held back;
    /// [`TurnEngine::commit_pending`] retries it. Until then further turns
    /// are refused with [`TurnError::CommitPending`].
    pub fn process_turn(&mut self, actions: &[PlayerAction]) -> Result<TurnReport, TurnError> {
        if self.pending.is_some() {
            return Err(TurnError::CommitPending);
        }
        let current = self.state.as_ref().ok_or(TurnError::NoActiveGame)?;

        let mut next = current.clone();
        let mut report = resolve_cycle(&mut next, actions, &mut *self.rng, &self.config)?;
        conclude_cycle(&mut next, &mut report, &self.config);
        self.pending = Some(PendingTurn {
            state: next,
            report,
        });
        self.commit_pending()
    }

    /// Commit the held-back turn, then unlock its achievements.
    pub fn commit_pending(&mut self) -> Result<TurnReport, TurnError> {
        let PendingTurn { state, mut report } = self.pending.take().ok_or(TurnError::NothingToCommit)?;

        if let Err(error) = self.store.commit(&state) {
            tracing::warn!(cycle = report.cycle, %error, "commit failed, turn held for retry");
            self.pending = Some(PendingTurn { state, report });
            return Err(error.into());
        }

        record_achievements(&state, &mut report, &mut self.ledger, &self.config);
        tracing::info!(
            cycle = report.cycle,
            events = report.events.len(),
            unlocked = report.unlocked.len(),
            "cycle complete"
        );
        self.state = Some(state);
        Ok(report)
    }

    /// Resolve the pending dilemma by following `path` through its choices.
    ///
    /// Win/loss is evaluated against the cycle the dilemma arose in. A
    /// failed commit leaves the dilemma pending; choices involve no
    /// randomness, so the same call can simply be repeated.
    pub fn resolve_choice(&mut self, path: &[usize]) -> Result<ChoiceReport, TurnError> {
        if self.pending.is_some() {
            return Err(TurnError::CommitPending);
        }
        let current = self.state.as_ref().ok_or(TurnError::NoActiveGame)?;
        let title = current
            .pending_event()
            .map(|e| e.title.clone())
            .ok_or(TurnError::NoPendingChoice)?;

        let mut next = current.clone();
        let choice = apply_choice(&mut next, path)?;
        let completed_cycle = next.cycle.saturating_sub(1);
        settle_outcome(&mut next, completed_cycle, &self.config);
        if let Err(error) = self.store.commit(&next) {
            tracing::warn!(%title, %error, "commit failed, dilemma left pending");
            return Err(error.into());
        }

        let unlocked = award_achievements(&next, completed_cycle, &mut self.ledger, &self.config);
        let outcome = outcome_of(&next);
        self.state = Some(next);
        Ok(ChoiceReport {
            title,
            choice,
            unlocked,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::model::{ActionKind, FactionType};
    use crate::sim::achievements::MemoryLedger;
    use crate::store::MemoryStore;

    fn engine(config: TurnConfig) -> TurnEngine<MemoryStore, MemoryLedger> {
        TurnEngine::new(
            Box::new(SmallRng::seed_from_u64(42)),
            MemoryStore::new(),
            MemoryLedger::new(),
            config,
        )
    }

    #[test]
    fn turn_without_game_is_refused() {
        let mut e = engine(TurnConfig::default());
        assert!(matches!(e.process_turn(&[]), Err(TurnError::NoActiveGame)));
        assert!(matches!(e.resolve_choice(&[0]), Err(TurnError::NoActiveGame)));
    }

    #[test]
    fn start_commits_initial_state() {
        let mut e = engine(TurnConfig::default());
        let cycle = e.start(&NewGameConfig::new(FactionType::Empire, 3)).unwrap().cycle;
        assert_eq!(cycle, 1);
        assert_eq!(e.store().snapshots().len(), 1);
    }

    #[test]
    fn nothing_to_commit() {
        let mut e = engine(TurnConfig::default());
        assert!(matches!(e.commit_pending(), Err(TurnError::NothingToCommit)));
    }

    #[test]
    fn failed_commit_holds_turn_until_retried() {
        let mut e = engine(TurnConfig::without_random_events());
        e.start(&NewGameConfig::new(FactionType::Republic, 1)).unwrap();
        let before = e.state().unwrap().clone();

        e.store_mut().fail_next(1);
        let err = e
            .process_turn(&[PlayerAction::new(ActionKind::BuildDefenses)])
            .unwrap_err();
        assert!(matches!(err, TurnError::Persistence(_)));
        assert_eq!(e.state(), Some(&before));
        assert!(e.pending_turn().is_some());
        assert!(matches!(e.process_turn(&[]), Err(TurnError::CommitPending)));

        let report = e.commit_pending().unwrap();
        assert_eq!(report.applied, vec![ActionKind::BuildDefenses]);
        let after = e.state().unwrap();
        assert_eq!(after.cycle, 2);
        assert_eq!(after.faction.military, (before.faction.military + 5).min(100));
        assert!(e.pending_turn().is_none());
    }

    #[test]
    fn losing_turn_commits_terminal_state_before_unlocking() {
        let mut e = engine(TurnConfig::without_random_events());
        let mut state = generate_game(&NewGameConfig::new(FactionType::Nomads, 6));
        state.faction.resources = 2;
        e.load(state);

        e.store_mut().fail_next(1);
        let research = [PlayerAction::new(ActionKind::ResearchTechnology)];
        assert!(e.process_turn(&research).is_err());
        assert!(e.ledger().is_empty());
        assert!(!e.state().unwrap().has_lost);

        let report = e.commit_pending().unwrap();
        assert_eq!(report.outcome, Outcome::Lost);
        assert!(report.unlocked.contains(&Achievement::Defeat));
        let saved = e.store().latest().unwrap();
        assert!(saved.has_lost);
        assert_eq!(saved.cycle, 2);
        assert_eq!(Some(saved), e.state());
    }

    #[test]
    fn no_pending_choice() {
        let mut e = engine(TurnConfig::without_random_events());
        e.start(&NewGameConfig::default()).unwrap();
        assert!(matches!(e.resolve_choice(&[0]), Err(TurnError::NoPendingChoice)));
    }
}

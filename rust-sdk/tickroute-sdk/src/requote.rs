//
// Copyright (c) Cryptic Dot
//
// Licensed under FusionAMM SDK Source-Available License v1.0
// See the LICENSE file in the project root for license information.
//

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tickroute_client::AccountFetcher;
use tickroute_core::{parse_ui_amount, AccountSet, Quote, QuoteOutcome, SwapAmount, SwapSimulator, TokenPair};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::{quote_resolved_routes, resolve_routes, AccountProbe, ResolvedRoutes, RouterConfig, RouterError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RequotePhase {
    #[default]
    Idle,
    /// First quote of a pair: accounts are being fetched.
    Loading,
    Ready,
    /// A quote is shown while a newer one is computed.
    Refreshing,
    /// The pair changed and the previous quote was dropped.
    Aborted,
}

/// An amount as entered by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AmountInput {
    Raw(SwapAmount),
    /// Decimal text in the units of the input mint (`exact_in`) or the output mint.
    Ui { value: String, exact_in: bool },
}

impl AmountInput {
    /// Converts to base units. Text that does not parse is a zero amount.
    pub fn resolve(&self, pair: &TokenPair, accounts: &AccountSet) -> SwapAmount {
        match self {
            AmountInput::Raw(amount) => *amount,
            AmountInput::Ui { value, exact_in } => {
                let mint = if *exact_in { pair.token_in } else { pair.token_out };
                let decimals = accounts.decimals(&mint).unwrap_or_default();
                let amount = parse_ui_amount(value, decimals).unwrap_or_else(|err| {
                    debug!(target: "log", "Ignoring amount '{}': {}", value, err);
                    0
                });
                if *exact_in {
                    SwapAmount::ExactIn(amount)
                } else {
                    SwapAmount::ExactOut(amount)
                }
            }
        }
    }
}

/// What the consumer renders. Published on every transition.
#[derive(Clone, Debug, Default)]
pub struct RequoteState {
    pub phase: RequotePhase,
    pub pair: Option<TokenPair>,
    pub amount: Option<SwapAmount>,
    pub outcome: Option<QuoteOutcome>,
    pub error: Option<RouterError>,
    /// When the next automatic refresh fires. `None` while an amount change is pending.
    pub refresh_at: Option<Instant>,
    /// Token of the most recently started cycle.
    pub cycle: u64,
}

impl RequoteState {
    pub fn quote(&self) -> Option<&Quote> {
        self.outcome.as_ref().and_then(QuoteOutcome::quote)
    }

    /// Time left until the automatic refresh.
    pub fn countdown(&self) -> Option<Duration> {
        self.refresh_at.map(|at| at.saturating_duration_since(Instant::now()))
    }
}

enum Command {
    SetPair(TokenPair),
    SetAmount(AmountInput),
    Requote,
    Shutdown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum CycleKind {
    /// Resolve a new pair from scratch.
    Initial,
    /// Refetch every account of the current pair.
    Refresh,
    /// Re-simulate over the accounts of the last cycle.
    Resimulate,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TriggerKind {
    Debounce,
    Refresh,
}

#[derive(Copy, Clone, Debug)]
struct Trigger {
    kind: TriggerKind,
    at: Instant,
}

struct InFlight {
    kind: CycleKind,
    handle: JoinHandle<()>,
}

struct CycleOutput {
    routes: Arc<ResolvedRoutes>,
    quote: Option<(SwapAmount, QuoteOutcome)>,
}

struct CycleResult {
    cycle: u64,
    output: Result<CycleOutput, RouterError>,
}

/// Handle to a background task that keeps a quote for the selected pair up to date.
///
/// Amount changes are debounced and only re-simulate. Pair changes and the periodic refresh refetch
/// every account. Dropping the handle stops the task and any cycle it is running.
pub struct RequoteController {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<RequoteState>,
    task: Option<JoinHandle<()>>,
}

impl RequoteController {
    /// Starts the controller on the current tokio runtime.
    pub fn spawn<F, P, S>(fetcher: Arc<F>, probe: Arc<P>, simulator: Arc<S>, config: RouterConfig) -> Self
    where
        F: AccountFetcher + ?Sized + 'static,
        P: AccountProbe + ?Sized + 'static,
        S: SwapSimulator + Send + Sync + ?Sized + 'static,
    {
        let (commands, command_receiver) = mpsc::unbounded_channel();
        let (results, result_receiver) = mpsc::unbounded_channel();
        let (state_sender, state) = watch::channel(RequoteState::default());

        let supervisor = Supervisor {
            fetcher,
            probe,
            simulator,
            config: Arc::new(config),
            state: state_sender,
            results,
            pair: None,
            input: None,
            routes: None,
            trigger: None,
            in_flight: None,
            cycle: 0,
        };
        let task = tokio::spawn(supervisor.run(command_receiver, result_receiver));

        Self {
            commands,
            state,
            task: Some(task),
        }
    }

    fn send(&self, command: Command) -> Result<(), RouterError> {
        self.commands.send(command).map_err(|_| RouterError::Disposed)
    }

    pub fn set_pair(&self, pair: TokenPair) -> Result<(), RouterError> {
        self.send(Command::SetPair(pair))
    }

    pub fn set_amount(&self, amount: SwapAmount) -> Result<(), RouterError> {
        self.send(Command::SetAmount(AmountInput::Raw(amount)))
    }

    pub fn set_ui_amount(&self, value: impl Into<String>, exact_in: bool) -> Result<(), RouterError> {
        self.send(Command::SetAmount(AmountInput::Ui {
            value: value.into(),
            exact_in,
        }))
    }

    /// Refetches and requotes now, restarting the countdown.
    pub fn requote(&self) -> Result<(), RouterError> {
        self.send(Command::Requote)
    }

    pub fn state(&self) -> RequoteState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequoteState> {
        self.state.clone()
    }

    /// Stops the controller and waits until no further state can be published.
    pub async fn shutdown(mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for RequoteController {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

struct Supervisor<F: ?Sized, P: ?Sized, S: ?Sized> {
    fetcher: Arc<F>,
    probe: Arc<P>,
    simulator: Arc<S>,
    config: Arc<RouterConfig>,
    state: watch::Sender<RequoteState>,
    results: mpsc::UnboundedSender<CycleResult>,
    pair: Option<TokenPair>,
    input: Option<AmountInput>,
    routes: Option<Arc<ResolvedRoutes>>,
    /// Either the pending debounce or the refresh countdown, never both.
    trigger: Option<Trigger>,
    in_flight: Option<InFlight>,
    cycle: u64,
}

impl<F, P, S> Supervisor<F, P, S>
where
    F: AccountFetcher + ?Sized + 'static,
    P: AccountProbe + ?Sized + 'static,
    S: SwapSimulator + Send + Sync + ?Sized + 'static,
{
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>, mut results: mpsc::UnboundedReceiver<CycleResult>) {
        loop {
            let deadline = self.trigger.map(|trigger| trigger.at);
            tokio::select! {
                command = commands.recv() => match command {
                    Some(Command::SetPair(pair)) => self.change_pair(pair),
                    Some(Command::SetAmount(input)) => self.change_amount(input),
                    Some(Command::Requote) => self.requote(),
                    Some(Command::Shutdown) | None => break,
                },
                Some(result) = results.recv() => self.apply(result),
                _ = wait_until(deadline) => self.fire(),
            }
        }

        self.cancel();
        self.state.send_modify(|state| state.refresh_at = None);
        debug!(target: "log", "Requote controller stopped");
    }

    fn change_pair(&mut self, pair: TokenPair) {
        if self.pair == Some(pair) {
            return;
        }
        info!(target: "log", "Quoting {} -> {}", pair.token_in, pair.token_out);

        self.cancel();
        self.pair = Some(pair);
        self.routes = None;
        self.state.send_modify(|state| {
            state.phase = RequotePhase::Aborted;
            state.pair = Some(pair);
            state.amount = None;
            state.outcome = None;
            state.error = None;
            state.refresh_at = None;
        });
        self.start_cycle(CycleKind::Initial);
    }

    fn change_amount(&mut self, input: AmountInput) {
        self.input = Some(input);
        if self.pair.is_none() {
            return;
        }
        self.trigger = Some(Trigger {
            kind: TriggerKind::Debounce,
            at: Instant::now() + self.config.debounce_delay,
        });
        self.state.send_modify(|state| state.refresh_at = None);
    }

    fn requote(&mut self) {
        self.trigger = None;
        let kind = if self.routes.is_some() { CycleKind::Refresh } else { CycleKind::Initial };
        self.start_cycle(kind);
    }

    fn fire(&mut self) {
        let Some(trigger) = self.trigger.take() else {
            return;
        };
        let running = self.in_flight.as_ref().map(|in_flight| in_flight.kind);
        let kind = match (trigger.kind, running) {
            _ if self.routes.is_none() => CycleKind::Initial,
            (TriggerKind::Refresh, _) | (TriggerKind::Debounce, Some(CycleKind::Refresh)) => CycleKind::Refresh,
            (TriggerKind::Debounce, _) => CycleKind::Resimulate,
        };
        if trigger.kind == TriggerKind::Refresh {
            info!(target: "log", "Refreshing quote");
        }
        self.start_cycle(kind);
    }

    fn start_cycle(&mut self, kind: CycleKind) {
        let Some(pair) = self.pair else {
            return;
        };
        self.abort_in_flight();
        self.cycle += 1;
        let cycle = self.cycle;

        self.state.send_modify(|state| {
            state.cycle = cycle;
            state.refresh_at = None;
            state.phase = if kind == CycleKind::Initial || state.outcome.is_none() {
                RequotePhase::Loading
            } else {
                RequotePhase::Refreshing
            };
        });
        debug!(target: "log", "Starting {:?} cycle {}", kind, cycle);

        let routes = match kind {
            CycleKind::Resimulate => self.routes.clone(),
            CycleKind::Initial | CycleKind::Refresh => None,
        };
        let fetcher = self.fetcher.clone();
        let probe = self.probe.clone();
        let simulator = self.simulator.clone();
        let config = self.config.clone();
        let input = self.input.clone();
        let results = self.results.clone();

        let handle = tokio::spawn(async move {
            let output = run_cycle(&*fetcher, &*probe, &*simulator, &config, pair, routes, input).await;
            let _ = results.send(CycleResult { cycle, output });
        });
        self.in_flight = Some(InFlight { kind, handle });
    }

    fn apply(&mut self, result: CycleResult) {
        if result.cycle != self.cycle {
            debug!(target: "log", "Discarding result of stale cycle {}", result.cycle);
            return;
        }
        self.in_flight = None;

        let refresh_at = match self.trigger {
            Some(_) => None,
            None => {
                let at = Instant::now() + self.config.requote_interval;
                self.trigger = Some(Trigger {
                    kind: TriggerKind::Refresh,
                    at,
                });
                Some(at)
            }
        };

        match result.output {
            Ok(output) => {
                self.routes = Some(output.routes);
                self.state.send_modify(|state| {
                    state.phase = RequotePhase::Ready;
                    state.error = None;
                    state.refresh_at = refresh_at;
                    if let Some((amount, outcome)) = output.quote {
                        state.amount = Some(amount);
                        state.outcome = Some(outcome);
                    }
                });
            }
            Err(err) => {
                warn!(target: "log", "Quote cycle {} failed: {}", result.cycle, err);
                self.state.send_modify(|state| {
                    state.phase = RequotePhase::Ready;
                    state.error = Some(err);
                    state.refresh_at = refresh_at;
                });
            }
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }

    /// Drops the in-flight cycle and whichever trigger is pending.
    fn cancel(&mut self) {
        self.abort_in_flight();
        self.trigger = None;
    }
}

impl<F: ?Sized, P: ?Sized, S: ?Sized> Drop for Supervisor<F, P, S> {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.handle.abort();
        }
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}

async fn run_cycle<F, P, S>(
    fetcher: &F,
    probe: &P,
    simulator: &S,
    config: &RouterConfig,
    pair: TokenPair,
    routes: Option<Arc<ResolvedRoutes>>,
    input: Option<AmountInput>,
) -> Result<CycleOutput, RouterError>
where
    F: AccountFetcher + ?Sized,
    P: AccountProbe + ?Sized,
    S: SwapSimulator + ?Sized,
{
    let routes = match routes {
        Some(routes) => routes,
        None => Arc::new(resolve_routes(fetcher, config, pair).await?),
    };
    let quote = match input {
        Some(input) => {
            let amount = input.resolve(&pair, &routes.accounts);
            Some((amount, quote_resolved_routes(simulator, probe, &routes, amount, config).await?))
        }
        None => None,
    };
    Ok(CycleOutput { routes, quote })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{MockProbe, MockSwap, TestMarket, TEST_FEE_TIERS};

    fn spawn_controller(market: &TestMarket) -> RequoteController {
        RequoteController::spawn(market.fetcher.clone(), Arc::new(MockProbe::new(true)), market.simulator.clone(), market.config())
    }

    async fn wait_for_cycle(controller: &RequoteController, cycle: u64) -> RequoteState {
        let mut state = controller.subscribe();
        let ready = state
            .wait_for(|state| state.cycle == cycle && state.phase == RequotePhase::Ready)
            .await
            .unwrap();
        ready.clone()
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_fires_once_per_interval() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let controller = spawn_controller(&market);

        controller.set_amount(SwapAmount::ExactIn(1_000)).unwrap();
        controller.set_pair(market.pair()).unwrap();
        let state = wait_for_cycle(&controller, 1).await;
        assert_eq!(state.quote().unwrap().amount_out, 1_000);
        assert!(state.refresh_at.is_some());
        assert_eq!(market.fetcher.request_count(&market.token_in), 1);

        tokio::time::sleep(Duration::from_secs(59)).await;
        assert_eq!(market.fetcher.request_count(&market.token_in), 1);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(market.fetcher.request_count(&market.token_in), 2);
        let state = controller.state();
        assert_eq!(state.cycle, 2);
        assert_eq!(state.phase, RequotePhase::Ready);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let controller = spawn_controller(&market);

        controller.set_pair(market.pair()).unwrap();
        wait_for_cycle(&controller, 1).await;
        tokio::time::sleep(Duration::from_secs(10)).await;

        let left = controller.state().countdown().unwrap();
        assert!(left <= Duration::from_secs(50));
        assert!(left > Duration::from_secs(49));
    }

    #[tokio::test(start_paused = true)]
    async fn test_amount_burst_resimulates_once() {
        let market = TestMarket::new();
        let pool = market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let controller = spawn_controller(&market);

        controller.set_pair(market.pair()).unwrap();
        let state = wait_for_cycle(&controller, 1).await;
        assert!(state.outcome.is_none());

        controller.set_amount(SwapAmount::ExactIn(100)).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.set_amount(SwapAmount::ExactIn(200)).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.set_amount(SwapAmount::ExactIn(300)).unwrap();

        let state = wait_for_cycle(&controller, 2).await;
        assert_eq!(state.amount, Some(SwapAmount::ExactIn(300)));
        assert_eq!(state.quote().unwrap().amount_out, 300);
        assert_eq!(market.simulator.calls(), vec![(pool.address, SwapAmount::ExactIn(300))]);
        assert_eq!(market.fetcher.request_count(&market.token_in), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pair_change_discards_stale_cycle() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let other = market.add_pool(market.token_in, market.intermediate, TEST_FEE_TIERS[0], MockSwap::rate(2, 1));
        market.fetcher.set_delay(Duration::from_secs(5));
        let controller = spawn_controller(&market);
        let other_pair = TokenPair::new(market.token_in, market.intermediate);

        controller.set_amount(SwapAmount::ExactIn(1_000)).unwrap();
        controller.set_pair(market.pair()).unwrap();
        tokio::time::sleep(Duration::from_secs(1)).await;
        controller.set_pair(other_pair).unwrap();

        let state = wait_for_cycle(&controller, 2).await;
        assert_eq!(state.pair, Some(other_pair));
        assert_eq!(state.quote().unwrap().pair, other_pair);
        assert_eq!(state.quote().unwrap().amount_out, 2_000);

        tokio::time::sleep(Duration::from_secs(10)).await;
        let state = controller.state();
        assert_eq!(state.cycle, 2);
        assert_eq!(state.quote().unwrap().pair, other_pair);
        assert!(market.simulator.calls().iter().all(|(pool, _)| *pool == other.address));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pair_change_cancels_pending_debounce() {
        let market = TestMarket::new();
        let pool = market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let other = market.add_pool(market.token_in, market.intermediate, TEST_FEE_TIERS[0], MockSwap::rate(2, 1));
        let controller = spawn_controller(&market);
        let other_pair = TokenPair::new(market.token_in, market.intermediate);

        controller.set_pair(market.pair()).unwrap();
        wait_for_cycle(&controller, 1).await;

        controller.set_amount(SwapAmount::ExactIn(500)).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        controller.set_pair(other_pair).unwrap();

        let state = wait_for_cycle(&controller, 2).await;
        assert_eq!(state.pair, Some(other_pair));
        assert_eq!(state.quote().unwrap().amount_out, 1_000);

        tokio::time::sleep(Duration::from_secs(1)).await;
        let state = controller.state();
        assert_eq!(state.cycle, 2);
        assert_eq!(state.phase, RequotePhase::Ready);
        assert_eq!(state.quote().unwrap().pair, other_pair);
        assert_eq!(market.simulator.calls(), vec![(other.address, SwapAmount::ExactIn(500))]);
        assert!(market.simulator.calls().iter().all(|(address, _)| *address != pool.address));
        assert_eq!(market.fetcher.request_count(&market.token_out), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ui_amount_uses_input_decimals() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let controller = spawn_controller(&market);

        controller.set_pair(market.pair()).unwrap();
        wait_for_cycle(&controller, 1).await;
        controller.set_ui_amount("1.5", true).unwrap();

        let state = wait_for_cycle(&controller, 2).await;
        assert_eq!(state.amount, Some(SwapAmount::ExactIn(1_500_000)));
        assert_eq!(state.quote().unwrap().amount_out, 1_500_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unparsable_amount_never_simulates() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let controller = spawn_controller(&market);

        controller.set_ui_amount("1.2.3", true).unwrap();
        controller.set_pair(market.pair()).unwrap();

        let state = wait_for_cycle(&controller, 1).await;
        assert_eq!(state.amount, Some(SwapAmount::ExactIn(0)));
        assert_eq!(state.quote().unwrap().amount_out, 0);
        assert_eq!(market.simulator.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_requote_refetches_accounts() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let controller = spawn_controller(&market);

        controller.set_amount(SwapAmount::ExactIn(10)).unwrap();
        controller.set_pair(market.pair()).unwrap();
        wait_for_cycle(&controller, 1).await;
        controller.requote().unwrap();

        let state = wait_for_cycle(&controller, 2).await;
        assert_eq!(state.quote().unwrap().amount_out, 10);
        assert_eq!(market.fetcher.request_count(&market.token_in), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_updates() {
        let market = TestMarket::new();
        market.add_pool(market.token_in, market.token_out, TEST_FEE_TIERS[0], MockSwap::rate(1, 1));
        let controller = spawn_controller(&market);

        controller.set_pair(market.pair()).unwrap();
        wait_for_cycle(&controller, 1).await;
        let mut state = controller.subscribe();
        controller.shutdown().await;

        while state.changed().await.is_ok() {}
        assert!(state.borrow().refresh_at.is_none());
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(market.fetcher.request_count(&market.token_in), 1);
    }
}

//! The action gate.

use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};
use vellum_core::{FailurePolicy, GateSettings, InvocationRequest, estimate_tokens};
use vellum_error::{GateError, GateErrorKind, VellumResult};
use vellum_interface::TextGenerator;

use crate::{GateEvent, GatePhase, SessionContext};

/// Mediates every invocation through a mana check, single-flight busy
/// tracking and post-hoc counter updates.
///
/// The gate is generic over the backend and never names a provider itself;
/// usage is attributed to whatever [`TextGenerator::provider`] reports.
#[derive(Debug)]
pub struct ActionGate<G> {
    generator: G,
    context: SessionContext,
    settings: GateSettings,
}

/// Returns the session to `Idle` if the invocation ends without settling,
/// e.g. because its future was dropped.
struct InFlightGuard<'a> {
    context: &'a SessionContext,
    armed: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(context: &'a SessionContext) -> Self {
        Self {
            context,
            armed: true,
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            warn!("Invocation abandoned before settling, releasing gate");
            self.context.with_state(|state| state.phase = GatePhase::Idle);
        }
    }
}

impl<G: TextGenerator> ActionGate<G> {
    /// Gate over `generator`, settling into `context`.
    pub fn new(generator: G, context: SessionContext, settings: GateSettings) -> Self {
        Self {
            generator,
            context,
            settings,
        }
    }

    /// The session this gate settles into.
    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Gate tuning.
    pub fn settings(&self) -> &GateSettings {
        &self.settings
    }

    /// The wrapped backend.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Run one invocation through the gate.
    ///
    /// Rejects a request the backend refuses up front (see
    /// [`TextGenerator::check`]), then with `InsufficientResource` when mana
    /// is below the threshold and with `Busy` while another invocation is
    /// unsettled. None of these make a call or touch the counters.
    ///
    /// On success `on_success` receives the text while the session still
    /// shows the pre-call gauges, after which usage metrics and gauges are
    /// updated. Failures are settled according to the configured
    /// [`FailurePolicy`] and returned unchanged.
    #[instrument(
        skip(self, request, on_success),
        fields(
            model = %request.model_identifier(),
            provider = %self.generator.provider(),
        )
    )]
    pub async fn run_gated_action<F>(
        &self,
        request: &InvocationRequest,
        on_success: F,
    ) -> VellumResult<String>
    where
        F: FnOnce(&str),
    {
        self.dispatch(request)?;
        let mut guard = InFlightGuard::new(&self.context);

        let started = Instant::now();
        let outcome = self.invoke(request).await;
        let elapsed = started.elapsed().as_secs_f64();

        let result = match outcome {
            Ok(text) => {
                self.advance(GateEvent::ResolveSuccess)?;
                on_success(&text);
                self.settle_success(request, &text, elapsed)?;
                Ok(text)
            }
            Err(e) => {
                warn!(error = %e.user_message(), elapsed_secs = elapsed, "Invocation failed");
                self.advance(GateEvent::ResolveFailure)?;
                self.settle_failure()?;
                Err(e)
            }
        };
        guard.disarm();
        result
    }

    /// Check preconditions and move `Idle -> InFlight` atomically.
    fn dispatch(&self, request: &InvocationRequest) -> VellumResult<()> {
        if let Err(e) = self.generator.check(request) {
            debug!(error = %e.user_message(), "Request rejected before dispatch");
            return Err(e);
        }

        let required = self.settings.min_mana;
        self.context.with_state(|state| {
            if !state.resources.has_mana(required) {
                debug!(available = state.resources.mana(), required, "Not enough mana");
                return Err(GateError::new(GateErrorKind::InsufficientResource {
                    available: *state.resources.mana(),
                    required,
                }));
            }
            if state.phase.is_busy() {
                debug!(phase = %state.phase, "Gate busy");
                return Err(GateError::new(GateErrorKind::Busy));
            }
            state.phase = state.phase.apply(GateEvent::Dispatch)?;
            Ok(())
        })?;
        Ok(())
    }

    async fn invoke(&self, request: &InvocationRequest) -> VellumResult<String> {
        match self.settings.timeout() {
            Some(limit) => tokio::time::timeout(limit, self.generator.generate_text(request))
                .await
                .map_err(|_| {
                    GateError::new(GateErrorKind::Timeout {
                        seconds: self.settings.timeout_secs,
                    })
                })?,
            None => self.generator.generate_text(request).await,
        }
    }

    fn advance(&self, event: GateEvent) -> Result<(), GateError> {
        self.context.with_state(|state| {
            state.phase = state.phase.apply(event)?;
            Ok(())
        })
    }

    fn settle_success(
        &self,
        request: &InvocationRequest,
        text: &str,
        elapsed_secs: f64,
    ) -> Result<(), GateError> {
        let tokens = estimate_tokens(request.instruction_prompt())
            + estimate_tokens(request.user_content())
            + estimate_tokens(text);
        let provider = self.generator.provider();
        let settings = &self.settings;

        self.context.with_state(|state| {
            state.metrics.record(provider.name(), tokens, elapsed_secs);
            state.resources.reward(
                settings.mana_cost,
                settings.xp_reward,
                settings.stress_increment,
            );
            state.phase = state.phase.apply(GateEvent::Settled)?;
            info!(
                provider = provider.name(),
                tokens,
                elapsed_secs,
                mana = state.resources.mana(),
                xp = state.resources.xp(),
                level = state.resources.level(),
                "Invocation settled"
            );
            Ok(())
        })
    }

    fn settle_failure(&self) -> Result<(), GateError> {
        let settings = &self.settings;
        self.context.with_state(|state| {
            match settings.failure_policy {
                FailurePolicy::Unpenalized => {}
                FailurePolicy::ChargeMana => state.resources.charge(settings.mana_cost),
            }
            state.phase = state.phase.apply(GateEvent::Settled)?;
            Ok(())
        })
    }
}

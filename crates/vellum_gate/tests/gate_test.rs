//! ActionGate behaviour against a mock backend.

mod test_utils;

use std::time::Duration;
use test_utils::{MockBehavior, MockGenerator, request, request_for, resources};
use vellum_core::{
    FailurePolicy, GateSettings, Provider, ProviderSettings, ResourceState, UsageMetrics,
};
use vellum_error::{GateErrorKind, ProviderErrorKind, VellumError, VellumErrorKind};
use vellum_gate::{ActionGate, GatePhase, SessionContext};
use vellum_models::GeminiClient;

fn gate_with(mock: MockGenerator, state: ResourceState) -> ActionGate<MockGenerator> {
    ActionGate::new(mock, SessionContext::new(state), GateSettings::default())
}

fn provider_kind(err: &VellumError) -> &ProviderErrorKind {
    match err.kind() {
        VellumErrorKind::Provider(e) => &e.kind,
        other => panic!("expected provider error, got {:?}", other),
    }
}

fn gate_kind(err: &VellumError) -> &GateErrorKind {
    match err.kind() {
        VellumErrorKind::Gate(e) => &e.kind,
        other => panic!("expected gate error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_low_mana_rejects_without_calling() -> anyhow::Result<()> {
    let gate = gate_with(MockGenerator::new_success("text"), resources(3, 40));

    let mut handled = false;
    let err = gate
        .run_gated_action(&request(), |_| handled = true)
        .await
        .expect_err("mana 3 is below the threshold");

    assert_eq!(
        gate_kind(&err),
        &GateErrorKind::InsufficientResource {
            available: 3,
            required: 5
        }
    );
    assert!(!handled);
    assert_eq!(gate.generator().call_count(), 0);
    assert_eq!(gate.context().resources(), resources(3, 40));
    assert_eq!(gate.context().metrics(), UsageMetrics::default());
    assert!(!gate.context().is_busy());
    Ok(())
}

#[tokio::test]
async fn test_success_updates_gauges() -> anyhow::Result<()> {
    let gate = gate_with(MockGenerator::new_success("## Summary"), resources(100, 90));

    let text = gate.run_gated_action(&request(), |_| {}).await?;
    assert_eq!(text, "## Summary");

    let after = gate.context().resources();
    assert_eq!(*after.mana(), 95);
    assert_eq!(*after.xp(), 105);
    assert_eq!(*after.level(), 2);
    assert_eq!(*after.stress(), 2);
    assert_eq!(*after.health(), 100);
    Ok(())
}

#[tokio::test]
async fn test_gauges_clamp_at_bounds() -> anyhow::Result<()> {
    let gate = gate_with(
        MockGenerator::new_success("ok"),
        ResourceState::new(100, 7, 0, 99),
    );

    gate.run_gated_action(&request(), |_| {}).await?;
    let after = gate.context().resources();
    assert_eq!(*after.mana(), 2);
    assert_eq!(*after.stress(), 100);

    let err = gate
        .run_gated_action(&request(), |_| {})
        .await
        .expect_err("mana 2 is below the threshold");
    assert!(matches!(
        gate_kind(&err),
        GateErrorKind::InsufficientResource { available: 2, .. }
    ));
    assert_eq!(gate.generator().call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_mana_cost_never_goes_negative() -> anyhow::Result<()> {
    let settings = GateSettings {
        mana_cost: 10,
        ..GateSettings::default()
    };
    let gate = ActionGate::new(
        MockGenerator::new_success("ok"),
        SessionContext::new(resources(6, 0)),
        settings,
    );

    gate.run_gated_action(&request(), |_| {}).await?;
    assert_eq!(*gate.context().resources().mana(), 0);
    Ok(())
}

#[tokio::test]
async fn test_handler_sees_state_before_settlement() -> anyhow::Result<()> {
    let gate = gate_with(MockGenerator::new_success("result"), resources(50, 10));
    let context = gate.context().clone();

    let mut seen = None;
    gate.run_gated_action(&request(), |text| {
        assert_eq!(text, "result");
        seen = Some(context.snapshot());
    })
    .await?;

    let during = seen.expect("handler ran");
    assert_eq!(*during.resources(), resources(50, 10));
    assert_eq!(*during.metrics().total_runs(), 0);
    assert_eq!(*during.phase(), GatePhase::Settling);
    assert!(during.is_busy());

    let after = context.snapshot();
    assert_eq!(*after.resources().mana(), 45);
    assert_eq!(*after.resources().xp(), 25);
    assert_eq!(*after.metrics().total_runs(), 1);
    assert!(!after.is_busy());
    Ok(())
}

#[tokio::test]
async fn test_provider_counts_accumulate() -> anyhow::Result<()> {
    let gate = gate_with(MockGenerator::new_success("text"), ResourceState::default());

    gate.run_gated_action(&request(), |_| {}).await?;
    let first = gate.context().metrics();
    assert_eq!(first.calls_for("gemini"), 1);
    assert!(*first.tokens_used() > 0);

    gate.run_gated_action(&request(), |_| {}).await?;
    let second = gate.context().metrics();
    assert_eq!(second.calls_for("gemini"), 2);
    assert_eq!(*second.total_runs(), 2);
    assert!(second.tokens_used() > first.tokens_used());
    assert_eq!(second.calls_for("openai"), 0);
    Ok(())
}

#[tokio::test]
async fn test_usage_is_attributed_to_reported_provider() -> anyhow::Result<()> {
    let mock = MockGenerator::new_success("text").with_provider(Provider::Xai);
    let gate = gate_with(mock, ResourceState::default());

    gate.run_gated_action(&request(), |_| {}).await?;

    let metrics = gate.context().metrics();
    assert_eq!(metrics.calls_for("xai"), 1);
    assert_eq!(metrics.calls_for("gemini"), 0);
    Ok(())
}

#[tokio::test]
async fn test_failure_leaves_counters_untouched() -> anyhow::Result<()> {
    let gate = gate_with(
        MockGenerator::new_error(ProviderErrorKind::Endpoint {
            status_code: 500,
            message: "Internal error".to_string(),
        }),
        resources(60, 20),
    );

    let mut handled = false;
    let err = gate
        .run_gated_action(&request(), |_| handled = true)
        .await
        .expect_err("backend fails");

    assert_eq!(err.user_message(), "Internal error");
    assert!(!handled);
    assert_eq!(gate.generator().call_count(), 1);
    assert_eq!(gate.context().resources(), resources(60, 20));
    assert_eq!(gate.context().metrics(), UsageMetrics::default());
    assert_eq!(gate.context().phase(), GatePhase::Idle);
    Ok(())
}

#[tokio::test]
async fn test_charge_mana_policy_costs_mana_only() -> anyhow::Result<()> {
    let settings = GateSettings {
        failure_policy: FailurePolicy::ChargeMana,
        ..GateSettings::default()
    };
    let gate = ActionGate::new(
        MockGenerator::new_error(ProviderErrorKind::MissingCredential),
        SessionContext::new(resources(60, 20)),
        settings,
    );

    gate.run_gated_action(&request(), |_| {})
        .await
        .expect_err("backend fails");

    let after = gate.context().resources();
    assert_eq!(*after.mana(), 55);
    assert_eq!(*after.xp(), 20);
    assert_eq!(*after.stress(), 0);
    assert_eq!(*gate.context().metrics().total_runs(), 0);
    Ok(())
}

#[tokio::test]
async fn test_rejected_request_is_never_dispatched() -> anyhow::Result<()> {
    let settings = GateSettings {
        failure_policy: FailurePolicy::ChargeMana,
        ..GateSettings::default()
    };
    let mock = MockGenerator::new_success("text")
        .rejecting(ProviderErrorKind::UnsupportedModel("claude-sonnet-4-5".to_string()));
    let gate = ActionGate::new(mock, SessionContext::new(resources(60, 20)), settings);

    let mut handled = false;
    let err = gate
        .run_gated_action(&request_for("claude-sonnet-4-5"), |_| handled = true)
        .await
        .expect_err("backend refuses the model");

    assert_eq!(
        provider_kind(&err),
        &ProviderErrorKind::UnsupportedModel("claude-sonnet-4-5".to_string())
    );
    assert!(!handled);
    assert_eq!(gate.generator().call_count(), 0);
    assert_eq!(gate.context().resources(), resources(60, 20));
    assert_eq!(gate.context().metrics(), UsageMetrics::default());
    assert_eq!(gate.context().phase(), GatePhase::Idle);
    Ok(())
}

#[tokio::test]
async fn test_gemini_gate_refuses_foreign_model_before_charging() -> anyhow::Result<()> {
    let settings = GateSettings {
        failure_policy: FailurePolicy::ChargeMana,
        ..GateSettings::default()
    };
    let client = GeminiClient::with_env_key(&ProviderSettings::default(), Some("env-key".into()))?;
    let gate = ActionGate::new(client, SessionContext::new(resources(60, 20)), settings);

    let err = gate
        .run_gated_action(&request_for("claude-sonnet-4-5"), |_| {})
        .await
        .expect_err("Gemini client only serves gemini models");

    assert!(matches!(
        provider_kind(&err),
        ProviderErrorKind::UnsupportedModel(model) if model == "claude-sonnet-4-5"
    ));
    assert_eq!(*gate.context().resources().mana(), 60);
    assert!(!gate.context().is_busy());
    Ok(())
}

#[tokio::test]
async fn test_overlapping_invocation_is_busy() -> anyhow::Result<()> {
    let gate = gate_with(
        MockGenerator::new_with_behavior(MockBehavior::Held("first".to_string())),
        ResourceState::default(),
    );
    assert!(!gate.context().is_busy());
    let request = request();

    let (first, second) = tokio::join!(gate.run_gated_action(&request, |_| {}), async {
        gate.generator().wait_started().await;
        assert!(gate.context().is_busy());
        assert_eq!(gate.context().phase(), GatePhase::InFlight);
        let second = gate.run_gated_action(&request, |_| {}).await;
        gate.generator().release();
        second
    });

    assert_eq!(first?, "first");
    let err = second.expect_err("second call overlaps the first");
    assert_eq!(gate_kind(&err), &GateErrorKind::Busy);
    assert_eq!(gate.generator().call_count(), 1);
    assert_eq!(*gate.context().metrics().total_runs(), 1);
    assert!(!gate.context().is_busy());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_timeout_releases_gate() -> anyhow::Result<()> {
    let settings = GateSettings {
        timeout_secs: 2,
        ..GateSettings::default()
    };
    let gate = ActionGate::new(
        MockGenerator::new_with_behavior(MockBehavior::Hang),
        SessionContext::new(resources(40, 0)),
        settings,
    );

    let err = gate
        .run_gated_action(&request(), |_| {})
        .await
        .expect_err("backend never answers");

    assert_eq!(gate_kind(&err), &GateErrorKind::Timeout { seconds: 2 });
    assert!(!gate.context().is_busy());
    assert_eq!(gate.context().resources(), resources(40, 0));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_slow_call_within_timeout_succeeds() -> anyhow::Result<()> {
    let settings = GateSettings {
        timeout_secs: 5,
        ..GateSettings::default()
    };
    let gate = ActionGate::new(
        MockGenerator::new_with_behavior(MockBehavior::Delayed(
            Duration::from_secs(3),
            "late".to_string(),
        )),
        SessionContext::default(),
        settings,
    );

    assert_eq!(gate.run_gated_action(&request(), |_| {}).await?, "late");
    assert!(*gate.context().metrics().last_run_duration_secs() >= 3.0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropped_invocation_releases_gate() -> anyhow::Result<()> {
    let settings = GateSettings {
        timeout_secs: 0,
        ..GateSettings::default()
    };
    let gate = ActionGate::new(
        MockGenerator::new_with_behavior(MockBehavior::Hang),
        SessionContext::default(),
        settings,
    );

    let abandoned = tokio::time::timeout(
        Duration::from_secs(30),
        gate.run_gated_action(&request(), |_| {}),
    )
    .await;

    assert!(abandoned.is_err());
    assert_eq!(gate.generator().call_count(), 1);
    assert_eq!(gate.context().phase(), GatePhase::Idle);
    assert_eq!(gate.context().resources(), ResourceState::default());
    Ok(())
}

#[tokio::test]
async fn test_panicking_handler_releases_gate() -> anyhow::Result<()> {
    let gate = std::sync::Arc::new(gate_with(
        MockGenerator::new_success("text"),
        ResourceState::default(),
    ));

    let task_gate = gate.clone();
    let joined = tokio::spawn(async move {
        task_gate
            .run_gated_action(&request(), |_| panic!("handler failure"))
            .await
    })
    .await;

    assert!(joined.is_err());
    assert!(!gate.context().is_busy());
    assert_eq!(gate.run_gated_action(&request(), |_| {}).await?, "text");
    Ok(())
}

#[tokio::test]
async fn test_snapshot_renders_hud() -> anyhow::Result<()> {
    let gate = gate_with(MockGenerator::new_success("text"), resources(100, 95));
    gate.run_gated_action(&request(), |_| {}).await?;

    let hud = gate.context().snapshot().to_string();
    assert!(hud.contains("MANA"));
    assert!(hud.contains(" 95"));
    assert!(hud.contains("LVL 2"));
    assert!(hud.contains("XP 110"));
    assert!(hud.contains("gemini=1"));
    assert!(hud.contains("Runs 1"));
    assert!(hud.contains("[idle]"));
    Ok(())
}

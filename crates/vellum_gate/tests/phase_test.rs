//! Gate lifecycle transition table.

use strum::IntoEnumIterator;
use vellum_error::GateErrorKind;
use vellum_gate::{GateEvent, GatePhase, TRANSITIONS};

#[test]
fn test_happy_paths_return_to_idle() -> anyhow::Result<()> {
    for resolution in [GateEvent::ResolveSuccess, GateEvent::ResolveFailure] {
        let phase = GatePhase::Idle
            .apply(GateEvent::Dispatch)?
            .apply(resolution)?
            .apply(GateEvent::Settled)?;
        assert_eq!(phase, GatePhase::Idle);
    }
    Ok(())
}

#[test]
fn test_only_listed_transitions_are_legal() {
    for phase in GatePhase::iter() {
        for event in GateEvent::iter() {
            let listed = TRANSITIONS
                .iter()
                .find(|(from, on, _)| *from == phase && *on == event)
                .map(|(_, _, to)| *to);

            match (phase.apply(event), listed) {
                (Ok(to), Some(expected)) => assert_eq!(to, expected),
                (Err(e), None) => assert_eq!(
                    e.kind,
                    GateErrorKind::InvalidTransition {
                        from: phase.to_string(),
                        event: event.to_string(),
                    }
                ),
                (result, listed) => {
                    panic!("{} on {}: got {:?}, table says {:?}", event, phase, result, listed)
                }
            }
        }
    }
}

#[test]
fn test_busy_outside_idle() {
    assert!(!GatePhase::Idle.is_busy());
    assert!(GatePhase::InFlight.is_busy());
    assert!(GatePhase::Settling.is_busy());
    assert_eq!(GatePhase::default(), GatePhase::Idle);
}

#[test]
fn test_double_dispatch_is_rejected() {
    let err = GatePhase::InFlight
        .apply(GateEvent::Dispatch)
        .expect_err("already in flight");
    assert_eq!(err.kind.to_string(), "Invalid gate transition: dispatch on in_flight");
}

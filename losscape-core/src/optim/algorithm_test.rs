use super::*;
use approx::assert_relative_eq;

#[test]
fn test_tags_round_trip() {
    for kind in AlgorithmKind::ALL {
        assert_eq!(AlgorithmKind::from_tag(kind.tag()), kind);
    }
}

#[test]
fn test_tag_aliases() {
    assert_eq!(AlgorithmKind::from_tag("SGD"), AlgorithmKind::GradientDescent);
    assert_eq!(AlgorithmKind::from_tag(" Adam "), AlgorithmKind::Adam);
    assert_eq!(AlgorithmKind::from_tag("rms_prop"), AlgorithmKind::RmsProp);
    assert_eq!("momentum".parse::<AlgorithmKind>(), Ok(AlgorithmKind::Momentum));
}

#[test]
fn test_unrecognized_tag_falls_back_to_gradient_descent() {
    assert_eq!(AlgorithmKind::from_tag("lbfgs"), AlgorithmKind::GradientDescent);
    assert_eq!(AlgorithmKind::from_tag(""), AlgorithmKind::GradientDescent);
}

#[test]
fn test_serde_uses_tags() -> Result<(), serde_json::Error> {
    assert_eq!(serde_json::to_string(&AlgorithmKind::RmsProp)?, "\"rmsprop\"");
    let kind: AlgorithmKind = serde_json::from_str("\"adam\"")?;
    assert_eq!(kind, AlgorithmKind::Adam);
    let fallback: AlgorithmKind = serde_json::from_str("\"newton\"")?;
    assert_eq!(fallback, AlgorithmKind::GradientDescent);
    Ok(())
}

#[test]
fn test_dispatch_matches_rule() {
    let state = OptimizerState::at(2.5, 2.5);
    let grad = Gradient::new(5.0, 5.0);
    let params = OptimizerParams::with_learning_rate(0.1);

    for kind in AlgorithmKind::ALL {
        let dispatched = kind.step(&state, &grad, &params);
        let direct = kind.rule().step(&state, &grad, &params);
        assert_eq!(dispatched, direct, "dispatch mismatch for {}", kind);
        assert!(dispatched.is_finite());
    }

    let gd = AlgorithmKind::GradientDescent.step(&state, &grad, &params);
    assert_relative_eq!(gd.x, 2.0);
    assert_relative_eq!(gd.y, 2.0);
}

#[test]
fn test_only_adam_sets_timestep() {
    let state = OptimizerState::at(1.0, 1.0);
    let grad = Gradient::new(1.0, 1.0);
    let params = OptimizerParams::default();

    for kind in AlgorithmKind::ALL {
        let next = kind.step(&state, &grad, &params);
        match kind {
            AlgorithmKind::Adam => assert_eq!(next.t, Some(1)),
            _ => assert!(next.t.is_none(), "{} must not set t", kind),
        }
    }
}

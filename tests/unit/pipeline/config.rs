use super::*;

#[test]
fn defaults_follow_the_classic_tool() {
    let cfg = PipelineConfig::default();
    assert!(cfg.comic_style);
    assert_eq!(cfg.frames, 10);
    assert_eq!(cfg.animation, MotionRequest::Simple(SimpleMotion::Bounce));
    assert_eq!(cfg.gif.frame_duration_ms, 100);
    assert_eq!(cfg.gif.loop_count, 0);
    assert_eq!(cfg.comic.edge_thickness, 2);
    assert_eq!(cfg.comic.color_levels, 8);
}

#[test]
fn motion_request_parses_both_families() {
    assert_eq!(
        "wobble".parse::<MotionRequest>().unwrap(),
        MotionRequest::Simple(SimpleMotion::Wobble)
    );
    assert_eq!(
        "Fly".parse::<MotionRequest>().unwrap(),
        MotionRequest::Parts(AnimationType::Fly)
    );
    assert!("moonwalk".parse::<MotionRequest>().is_err());
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg = PipelineConfig::from_json_str(
        r#"{ "animation": "jump", "style": "hand-drawn", "gif": { "loop_count": 2 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.animation, MotionRequest::Parts(AnimationType::Jump));
    assert_eq!(cfg.style, Some(MotionStyle::HandDrawn));
    assert_eq!(cfg.gif.loop_count, 2);
    assert_eq!(cfg.gif.frame_duration_ms, 100);
    assert_eq!(cfg.frames, 10);
}

#[test]
fn bad_json_is_a_validation_error() {
    let err = PipelineConfig::from_json_str(r#"{ "animation": "moonwalk" }"#).unwrap_err();
    assert!(matches!(err, ToonError::Validation(_)));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = PipelineConfig {
        animation: MotionRequest::Parts(AnimationType::Roll),
        seed: Some(42),
        ..PipelineConfig::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"roll\""));
    assert_eq!(PipelineConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn part_actions_default_to_realistic() {
    let cfg = PipelineConfig {
        animation: MotionRequest::Parts(AnimationType::Walk),
        frames: 12,
        ..PipelineConfig::default()
    };
    let (plan, gif) = cfg.plan().unwrap();
    assert_eq!(
        plan,
        RenderPlan::Parts {
            style: MotionStyle::Realistic,
            kind: AnimationType::Walk,
            frames: 12
        }
    );
    assert_eq!(gif, cfg.gif);
}

#[test]
fn description_overrides_frames_and_duration() {
    let cfg = PipelineConfig {
        description: Some("walks then jumps".into()),
        frames: 99,
        gif: GifSettings {
            frame_duration_ms: 500,
            loop_count: 1,
        },
        ..PipelineConfig::default()
    };
    let (plan, gif) = cfg.plan().unwrap();
    assert_eq!(plan.frames(), 32);
    assert_eq!(gif.frame_duration_ms, 70);
    assert_eq!(gif.loop_count, 1);
    match plan {
        RenderPlan::Narrative { style, script, .. } => {
            assert_eq!(style, MotionStyle::HandDrawn);
            assert_eq!(script.segments.len(), 2);
        }
        other => panic!("expected narrative plan, got {other:?}"),
    }
}

#[test]
fn blank_description_is_ignored() {
    let cfg = PipelineConfig {
        description: Some("   ".into()),
        ..PipelineConfig::default()
    };
    let (plan, _) = cfg.plan().unwrap();
    assert!(matches!(plan, RenderPlan::Simple { .. }));
}

#[test]
fn zero_frames_fail_planning() {
    let cfg = PipelineConfig {
        frames: 0,
        ..PipelineConfig::default()
    };
    assert!(matches!(cfg.plan(), Err(ToonError::Validation(_))));
}

#[test]
fn configured_seed_wins() {
    let cfg = PipelineConfig {
        seed: Some(7),
        ..PipelineConfig::default()
    };
    assert_eq!(cfg.effective_seed(), Some(7));
}

#[test]
fn seed_strings_are_trimmed() {
    assert_eq!(parse_seed(" 12 "), Some(12));
    assert_eq!(parse_seed("abc"), None);
}

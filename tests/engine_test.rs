use scm_version::registry::Registries;
use scm_version::{Result, ScmInfo, VersionEngine, VersioningConfig, VersioningError};

fn engine_for(config: &VersioningConfig) -> VersionEngine {
    VersionEngine::new(Registries::standard().bind(config).expect("Config should bind"))
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_feature_branch_git_style() {
    let config = VersioningConfig::default();
    let scm = ScmInfo::new("feature/login", "a1b2c3d4e5f60718", "a1b2c3", None, false);

    let info = engine_for(&config)
        .compute(&scm, &config, "/", |_| -> Result<Vec<String>> {
            panic!("feature branches never look up tags")
        })
        .unwrap();

    assert_eq!(info.full, "feature-login-a1b2c3");
    assert_eq!(info.display, "feature-login-a1b2c3");
    assert_eq!(info.branch_type, "feature");
    assert_eq!(info.base, "login");
}

#[test]
fn test_release_branch_without_prior_tag() {
    let config = VersioningConfig {
        releases: ["release".to_string()].into_iter().collect(),
        release_mode: "tag".to_string(),
        ..VersioningConfig::default()
    };
    let scm = ScmInfo::new("release/2.0", "ffeeddccbbaa", "ffeedd", None, false);

    let mut looked_up = Vec::new();
    let info = engine_for(&config)
        .compute(&scm, &config, "/", |base| {
            looked_up.push(base.to_string());
            Ok(Vec::new())
        })
        .unwrap();

    assert_eq!(info.display, "2.0.0");
    assert_eq!(info.last_tag, "");
    assert_eq!(looked_up, vec!["2.0"]);
}

#[test]
fn test_empty_scm_info_gives_blank_version() {
    for display_mode in ["full", "base", "snapshot"] {
        let config = VersioningConfig {
            display_mode: display_mode.to_string(),
            ..VersioningConfig::default()
        };
        let info = engine_for(&config)
            .compute(&ScmInfo::none(), &config, "/", |_| Ok(Vec::new()))
            .unwrap();

        assert!(info.is_none());
        assert_eq!(info.scm, "");
        assert_eq!(info.branch, "");
        assert_eq!(info.display, "");
        assert_eq!(info.full, "");
        assert_eq!(info.abbreviated, "");
    }
}

// ============================================================================
// Release set and modes
// ============================================================================

#[test]
fn test_custom_release_types() {
    let config = VersioningConfig {
        releases: ["hotfix".to_string(), "release".to_string()]
            .into_iter()
            .collect(),
        ..VersioningConfig::default()
    };
    let scm = ScmInfo::new("hotfix/1.4", "0a0b0c0d", "0a0b0c", None, false);

    let info = engine_for(&config)
        .compute(&scm, &config, "/", |_| Ok(vec!["1.4.2".to_string()]))
        .unwrap();
    assert_eq!(info.display, "1.4.3");
    assert_eq!(info.last_tag, "1.4.2");
}

#[test]
fn test_release_word_without_base_is_still_release() {
    // `release` alone classifies as type `release` with an empty base
    let config = VersioningConfig::default();
    let scm = ScmInfo::new("release", "0a0b0c0d", "0a0b0c", None, false);

    let info = engine_for(&config)
        .compute(&scm, &config, "/", |base| {
            assert_eq!(base, "");
            Ok(Vec::new())
        })
        .unwrap();
    assert_eq!(info.display, ".0");
}

#[test]
fn test_snapshot_release_mode_on_work_in_progress() {
    let config = VersioningConfig {
        release_mode: "snapshot".to_string(),
        snapshot_suffix: "-SNAPSHOT".to_string(),
        ..VersioningConfig::default()
    };
    let scm = ScmInfo::new("release/1.0", "0a0b0c0d", "0a0b0c", None, false);

    let info = engine_for(&config)
        .compute(&scm, &config, "/", |_| Ok(vec!["1.0.3".to_string()]))
        .unwrap();
    assert_eq!(info.display, "1.0.4-SNAPSHOT");
}

#[test]
fn test_mismatching_tag_aborts_computation() {
    let config = VersioningConfig::default();
    let scm = ScmInfo::new("release/2.0", "0a0b0c0d", "0a0b0c", None, false);

    let result = engine_for(&config).compute(&scm, &config, "/", |_| {
        Ok(vec!["not-matching".to_string()])
    });
    match result {
        Err(VersioningError::TagParse { base, tag }) => {
            assert_eq!(base, "2.0");
            assert_eq!(tag, "not-matching");
        }
        other => panic!("Expected TagParse error, got {:?}", other),
    }
}

#[test]
fn test_computation_is_repeatable() {
    let config = VersioningConfig::default();
    let engine = engine_for(&config);
    let scm = ScmInfo::new("release/5.1", "0a0b0c0d", "0a0b0c", None, true);

    let first = engine
        .compute(&scm, &config, "/", |_| Ok(vec!["5.1.0".to_string()]))
        .unwrap();
    let second = engine
        .compute(&scm, &config, "/", |_| Ok(vec!["5.1.0".to_string()]))
        .unwrap();
    assert_eq!(first, second);
    assert!(first.dirty);
}

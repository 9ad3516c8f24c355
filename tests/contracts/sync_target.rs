//! Mirror contracts (SYNC-001 through SYNC-004)
//!
//! The output directory is long-lived: it is reconciled on every build,
//! never recreated.

use assetline::application::{SyncState, SyncTarget};
use assetline::{LinkPreference, LinkStrategy, LocalFs, NoopEventSink};

use crate::common::*;

fn target(env: &TestEnv, preference: LinkPreference) -> SyncTarget<LocalFs> {
    SyncTarget::new(env.path("in"), env.path("out"), LocalFs::new()).with_preference(preference)
}

/// CONTRACT SYNC-001: Children of `modules/` are hoisted
///
/// Input `modules/foo.js` and `bar.js` produce an output with exactly
/// `foo.js` and `bar.js`, each with the input's content.
mod hoisting {
    use super::*;

    #[test]
    fn contract_modules_children_appear_at_top_level() {
        for preference in [LinkPreference::Auto, LinkPreference::Copy] {
            let env = TestEnv::new();
            env.write("in/modules/foo.js", "foo");
            env.write("in/bar.js", "bar");

            target(&env, preference)
                .build(&mut SyncState::new(), &NoopEventSink)
                .unwrap();

            assert_eq!(list(&env.path("out")), vec!["bar.js", "foo.js"]);
            assert_eq!(env.read("out/foo.js"), "foo");
            assert_eq!(env.read("out/bar.js"), "bar");
        }
    }

    #[test]
    fn contract_top_level_entry_shadows_hoisted_child() {
        let env = TestEnv::new();
        env.write("in/modules/same.js", "hoisted");
        env.write("in/same.js", "top");

        target(&env, LinkPreference::Copy)
            .build(&mut SyncState::new(), &NoopEventSink)
            .unwrap();

        assert_eq!(env.read("out/same.js"), "top");
    }

    #[cfg(unix)]
    #[test]
    fn contract_linked_modules_directory_is_hoisted() {
        let env = TestEnv::new();
        env.write("real_modules/foo.js", "foo");
        env.write("in/bar.js", "bar");
        std::os::unix::fs::symlink(env.path("real_modules"), env.path("in/modules")).unwrap();

        target(&env, LinkPreference::Copy)
            .build(&mut SyncState::new(), &NoopEventSink)
            .unwrap();

        assert_eq!(list(&env.path("out")), vec!["bar.js", "foo.js"]);
        assert_eq!(env.read("out/foo.js"), "foo");
    }
}

/// CONTRACT SYNC-002: Rebuilding an unchanged input is a no-op
mod idempotence {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn contract_second_build_changes_nothing() {
        let env = TestEnv::new();
        env.write("in/a.js", "a");
        env.write("in/modules/b.js", "b");
        let target = target(&env, LinkPreference::Symlink);
        let mut state = SyncState::new();

        target.build(&mut state, &NoopEventSink).unwrap();
        let first = std::fs::read_link(env.path("out/a.js")).unwrap();
        let report = target.build(&mut state, &NoopEventSink).unwrap();

        assert_eq!(report.linked, 0);
        assert_eq!(report.removed, 0);
        assert_eq!(report.kept, 2);
        assert_eq!(std::fs::read_link(env.path("out/a.js")).unwrap(), first);
    }

    #[test]
    fn contract_strategy_is_chosen_once() {
        let env = TestEnv::new();
        env.write("in/a.js", "a");
        let target = target(&env, LinkPreference::Copy);
        let mut state = SyncState::new();

        target.build(&mut state, &NoopEventSink).unwrap();
        assert_eq!(state.strategy(), Some(LinkStrategy::Copy));
        assert!(state.has_run());

        let report = target.build(&mut state, &NoopEventSink).unwrap();
        assert_eq!(report.strategy, LinkStrategy::Copy);
        assert!(!report.first_build);
    }
}

/// CONTRACT SYNC-003: The output reflects the current input
///
/// Entries removed from the input disappear; entries added appear; copies
/// pick up changed content.
mod reconciliation {
    use super::*;

    #[test]
    fn contract_removed_inputs_disappear_and_new_ones_appear() {
        let env = TestEnv::new();
        env.write("in/old.js", "old");
        env.write("in/modules/gone.js", "gone");
        let target = target(&env, LinkPreference::Copy);
        let mut state = SyncState::new();
        target.build(&mut state, &NoopEventSink).unwrap();

        env.remove("in/old.js");
        env.remove("in/modules/gone.js");
        env.write("in/new.js", "new");
        target.build(&mut state, &NoopEventSink).unwrap();

        assert_eq!(list(&env.path("out")), vec!["new.js"]);
    }

    #[test]
    fn contract_copies_follow_content_changes() {
        let env = TestEnv::new();
        env.write("in/a.js", "v1");
        let target = target(&env, LinkPreference::Copy);
        let mut state = SyncState::new();
        target.build(&mut state, &NoopEventSink).unwrap();

        env.write("in/a.js", "v2");
        target.build(&mut state, &NoopEventSink).unwrap();

        assert_eq!(env.read("out/a.js"), "v2");
    }

    #[test]
    fn contract_stale_output_from_a_previous_process_is_repaired() {
        let env = TestEnv::new();
        env.write("in/a.js", "a");
        env.write("out/leftover.js", "stale");
        env.write("out/a.js", "half-written");

        target(&env, LinkPreference::Copy)
            .build(&mut SyncState::new(), &NoopEventSink)
            .unwrap();

        assert_eq!(list(&env.path("out")), vec!["a.js"]);
        assert_eq!(env.read("out/a.js"), "a");
    }
}

/// CONTRACT SYNC-004: The input is never written to
mod input_is_read_only {
    use super::*;

    #[test]
    fn contract_teardown_leaves_input_intact() {
        let env = TestEnv::new();
        env.write("in/modules/foo.js", "foo");
        env.write("in/bar.js", "bar");
        let target = target(&env, LinkPreference::Auto);
        let mut state = SyncState::new();

        target.build(&mut state, &NoopEventSink).unwrap();
        target.teardown(&mut state).unwrap();

        assert!(!env.path("out").exists());
        assert_eq!(env.read("in/modules/foo.js"), "foo");
        assert_eq!(env.read("in/bar.js"), "bar");
        assert!(env.path("in/modules").is_dir());
    }
}

//! Property tests for dead-module pruning over wrapped modules.

use std::path::Path;

use proptest::prelude::*;

use assetline::domain::ports::{ModuleScanner, Transform};
use assetline::{DependencyGraphPruner, FileEntry, ImportScanner, NoopEventSink, Tree};

/// Wrapped modules `lib/m0..lib/mN` with random dependency lists, plus the
/// entry points to prune from
fn modules() -> impl Strategy<Value = (Tree, Vec<String>)> {
    (1usize..10).prop_flat_map(|n| {
        (
            proptest::collection::vec(proptest::collection::vec(0..n, 0..4), n),
            proptest::collection::vec(0..n, 0..3),
        )
            .prop_map(|(deps, entries)| {
                let tree = Tree::from_entries(deps.iter().enumerate().map(|(i, deps)| {
                    let list: Vec<String> = std::iter::once("\"exports\"".to_string())
                        .chain(deps.iter().map(|d| format!("\"lib/m{d}\"")))
                        .collect();
                    FileEntry::new(
                        format!("addon-tree-output/lib/m{i}.js"),
                        format!("define(\"lib/m{i}\", [{}], function () {{}});", list.join(", ")),
                    )
                }));
                let entries = entries.into_iter().map(|e| format!("lib/m{e}")).collect();
                (tree, entries)
            })
    })
}

fn pruner(entries: Vec<String>) -> DependencyGraphPruner<ImportScanner> {
    DependencyGraphPruner::new("my-app", entries, ImportScanner::new("my-app"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Pruning an already pruned tree removes nothing more.
    #[test]
    fn property_pruning_is_idempotent((tree, entries) in modules()) {
        let pruner = pruner(entries);
        let once = pruner.transform(&tree, &NoopEventSink).unwrap();
        let outcome = pruner.analyze(&once);
        prop_assert!(outcome.dead_modules.is_empty(), "{:?}", outcome.dead_modules);
    }

    /// PROPERTY: Entry points always survive and every survivor's
    /// dependencies survive with it.
    #[test]
    fn property_survivors_are_closed((tree, entries) in modules()) {
        let pruned = pruner(entries.clone()).transform(&tree, &NoopEventSink).unwrap();
        let scanner = ImportScanner::new("my-app");

        for entry in &entries {
            let path = format!("addon-tree-output/{entry}.js");
            prop_assert!(pruned.contains(Path::new(&path)));
        }
        for file in pruned.iter() {
            let info = scanner.scan(file.path(), &file.text()).unwrap();
            for dep in info.dependencies {
                let path = format!("addon-tree-output/{dep}.js");
                prop_assert!(pruned.contains(Path::new(&path)), "missing {}", dep);
            }
        }
    }

    /// PROPERTY: Without entry points or namespace modules nothing is live.
    #[test]
    fn property_no_roots_prunes_everything((tree, _entries) in modules()) {
        let pruned = pruner(Vec::new()).transform(&tree, &NoopEventSink).unwrap();
        prop_assert!(pruned.is_empty());
    }
}

//! Property tests for the wrapped/plain partition.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;

use assetline::domain::ports::Transform;
use assetline::{FileEntry, FilterMode, InclusionFilter, NoopEventSink, Tree};

/// Files that are wrapped, plain, or outside the `.js` scope
fn tree() -> impl Strategy<Value = Tree> {
    let body = proptest::string::string_regex("[a-z (){};'\"]{0,24}").unwrap();
    let file = (0u8..3, body);
    proptest::collection::vec(file, 0..16).prop_map(|files| {
        Tree::from_entries(files.into_iter().enumerate().map(|(i, (shape, body))| {
            match shape {
                0 => FileEntry::new(format!("addon/m{i}.js"), format!("define('m{i}', {body}")),
                1 => FileEntry::new(format!("vendor/p{i}.js"), body),
                _ => FileEntry::new(format!("styles/s{i}.css"), format!("define({body}")),
            }
        }))
    })
}

fn paths(tree: &Tree) -> BTreeSet<PathBuf> {
    tree.paths().map(PathBuf::from).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Include and exclude split the scoped files exactly; files
    /// outside the scope appear on both sides.
    #[test]
    fn property_modes_are_complementary(input in tree()) {
        let included = InclusionFilter::new(FilterMode::Include)
            .transform(&input, &NoopEventSink)
            .unwrap();
        let excluded = InclusionFilter::new(FilterMode::Exclude)
            .transform(&input, &NoopEventSink)
            .unwrap();

        let (inc, exc) = (paths(&included), paths(&excluded));
        let out_of_scope: BTreeSet<PathBuf> = paths(&input)
            .into_iter()
            .filter(|p| p.extension().is_none_or(|ext| ext != "js"))
            .collect();

        let union: BTreeSet<PathBuf> = inc.union(&exc).cloned().collect();
        prop_assert_eq!(union, paths(&input));
        let both: BTreeSet<PathBuf> = inc.intersection(&exc).cloned().collect();
        prop_assert_eq!(both, out_of_scope);
    }

    /// PROPERTY: Filtering is idempotent.
    #[test]
    fn property_filter_is_idempotent(input in tree(), include in any::<bool>()) {
        let mode = if include { FilterMode::Include } else { FilterMode::Exclude };
        let filter = InclusionFilter::new(mode);
        let once = filter.transform(&input, &NoopEventSink).unwrap();
        let twice = filter.transform(&once, &NoopEventSink).unwrap();
        prop_assert_eq!(paths(&once), paths(&twice));
    }

    /// PROPERTY: Surviving files keep their bytes.
    #[test]
    fn property_content_is_untouched(input in tree()) {
        let output = InclusionFilter::new(FilterMode::Exclude)
            .transform(&input, &NoopEventSink)
            .unwrap();
        for entry in output.iter() {
            let original = input.get(entry.path()).unwrap();
            prop_assert_eq!(original.content(), entry.content());
        }
    }
}

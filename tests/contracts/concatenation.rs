//! Concatenation contracts (CONCAT-001 through CONCAT-003)
//!
//! A bundle is headers in listed order, then body files glob by glob in
//! path order, then footers in listed order.

use std::path::PathBuf;

use assetline::{AssetlineError, ConcatSpec, ConcatenationAssembler, FileEntry, Tree};

fn tree(files: &[(&str, &str)]) -> Tree {
    Tree::from_entries(files.iter().map(|(p, c)| FileEntry::new(*p, *c)))
}

fn spec() -> ConcatSpec {
    ConcatSpec::new("out.js")
        .with_headers(vec![PathBuf::from("h1.js"), PathBuf::from("h2.js")])
        .with_inputs(vec!["body/**/*.js".to_string()])
        .with_footers(vec![PathBuf::from("f1.js")])
}

fn assemble(spec: ConcatSpec, tree: &Tree) -> String {
    let bundle = ConcatenationAssembler::new(spec).unwrap().assemble(tree).unwrap();
    String::from_utf8(bundle.content().to_vec()).unwrap()
}

/// CONTRACT CONCAT-001: Headers, sorted body, footers
mod layout {
    use super::*;

    #[test]
    fn contract_headers_then_sorted_body_then_footers() {
        let input = tree(&[
            ("body/z.js", "Z"),
            ("f1.js", "F1"),
            ("h2.js", "H2"),
            ("body/a.js", "A"),
            ("h1.js", "H1"),
        ]);
        assert_eq!(assemble(spec(), &input), "H1\nH2\nA\nZ\nF1");
    }

    #[test]
    fn contract_body_is_ordered_per_glob() {
        let input = tree(&[("a/2.js", "A2"), ("b/1.js", "B1"), ("a/1.js", "A1")]);
        let spec = ConcatSpec::new("out.js")
            .with_inputs(vec!["b/**/*.js".to_string(), "a/**/*.js".to_string()]);
        assert_eq!(assemble(spec, &input), "B1\nA1\nA2");
    }

    #[test]
    fn contract_header_is_not_repeated_in_body() {
        let input = tree(&[("body/h.js", "H"), ("body/x.js", "X")]);
        let spec = ConcatSpec::new("out.js")
            .with_headers(vec![PathBuf::from("body/h.js")])
            .with_inputs(vec!["body/**/*.js".to_string()]);
        assert_eq!(assemble(spec, &input), "H\nX");
    }
}

/// CONTRACT CONCAT-002: Listed framing files must exist
mod missing_files {
    use super::*;

    #[test]
    fn contract_missing_footer_fails_with_its_path() {
        let input = tree(&[("h1.js", "H1"), ("h2.js", "H2")]);
        let err = ConcatenationAssembler::new(spec())
            .unwrap()
            .assemble(&input)
            .unwrap_err();

        match err {
            AssetlineError::MissingFile { path, bundle } => {
                assert_eq!(path, PathBuf::from("f1.js"));
                assert_eq!(bundle, "out.js");
            }
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[test]
    fn contract_empty_body_is_not_an_error() {
        let input = tree(&[("h1.js", "H1"), ("h2.js", "H2"), ("f1.js", "F1")]);
        assert_eq!(assemble(spec(), &input), "H1\nH2\nF1");
    }
}

/// CONTRACT CONCAT-003: Output is a pure function of the tree
mod determinism {
    use super::*;

    #[test]
    fn contract_insertion_order_does_not_matter() {
        let files = [
            ("h1.js", "H1"),
            ("h2.js", "H2"),
            ("body/m.js", "M"),
            ("body/n/o.js", "O"),
            ("f1.js", "F1"),
        ];
        let forward = tree(&files);
        let mut reversed_files = files;
        reversed_files.reverse();
        let reversed = tree(&reversed_files);

        assert_eq!(assemble(spec(), &forward), assemble(spec(), &reversed));
    }
}

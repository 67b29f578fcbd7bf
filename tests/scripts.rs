use std::{fs, path::Path};

use reckon::{
    config::LexerConfig,
    error::Error,
    interpreter::{
        evaluator::core::Evaluator,
        value::{core::Numeric, number::Number},
    },
    parse,
};
use walkdir::WalkDir;

/// Runs `src` and returns everything it printed, one value per line.
fn printed_lines<V: Numeric>(src: &str) -> Result<Vec<String>, Error> {
    let program = parse(src, &LexerConfig::default())?;
    let mut evaluator = Evaluator::<V, Vec<V>>::with_sink(Vec::new());
    evaluator.eval_program(&program)?;
    Ok(evaluator.into_sink().iter().map(ToString::to_string).collect())
}

fn check_script(path: &Path) {
    let src = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let expected_path = path.with_extension("out");
    let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                          panic!("Failed to read {expected_path:?}: {e}")
                                                      });

    let result = match path.extension().and_then(|ext| ext.to_str()) {
        Some("tcalc") => printed_lines::<Number>(&src),
        _ => printed_lines::<i64>(&src),
    };

    match result {
        Ok(lines) => assert_eq!(lines, expected.lines().collect::<Vec<_>>(), "script: {path:?}"),
        Err(e) => panic!("Script {path:?} failed:\n{src}\nError: {e}"),
    }
}

#[test]
fn script_corpus_matches_expected_output() {
    let mut count = 0;

    for entry in WalkDir::new("tests/scripts").into_iter()
                                              .filter_map(Result::ok)
                                              .filter(|e| {
                                                  e.path()
                                                   .extension()
                                                   .is_some_and(|ext| ext == "calc" || ext == "tcalc")
                                              })
    {
        count += 1;
        check_script(entry.path());
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

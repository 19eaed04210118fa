//! End-to-end conversion scenarios through the public API.

use infix_pda::automaton;
use infix_pda::engine::{ConverterBuilder, ConverterConfig, Mode, INVALID_INPUT};
use infix_pda::validation::validate;
use infix_pda::{convert, ConversionReport, PdaState, State, Verdict};

#[test]
fn sum_then_product() {
    let result = convert("a+b*c").unwrap();
    assert_eq!(result.postfix, "abc*+");
    assert_eq!(result.verdict, Verdict::Accept);
}

#[test]
fn product_then_sum_differs_between_modes() {
    let flush = convert("a*b+c").unwrap();
    assert_eq!(flush.postfix, "abc+*");

    let mut converter = ConverterBuilder::new().mode(Mode::Precedence).build();
    let precedence = converter.convert("a*b+c").unwrap();
    assert_eq!(precedence.postfix, "ab*c+");

    assert_eq!(flush.verdict, Verdict::Accept);
    assert_eq!(precedence.verdict, Verdict::Accept);
}

#[test]
fn grouped_sum_times_operand() {
    let result = convert("(a+b)*c").unwrap();
    assert_eq!(result.postfix, "ab+c*");
    assert!(result.is_accepted());
}

#[test]
fn unmatched_close_rejects() {
    let result = convert("a+b)").unwrap();
    assert_eq!(result.verdict, Verdict::Reject);
    assert_eq!(result.postfix, "ab+");
    assert!(result.trace.lines().contains(&INVALID_INPUT.to_string()));
}

#[test]
fn operand_after_closed_group_rejects() {
    for input in ["(a)b", "(a+b)c", "a+(b)c"] {
        let result = convert(input).unwrap();
        assert_eq!(result.verdict, Verdict::Reject, "{input}");
        assert!(result.trace.lines().contains(&INVALID_INPUT.to_string()), "{input}");
        assert_eq!(automaton::model().recognize(input), Verdict::Reject, "{input}");
        assert!(validate(input).is_failure(), "{input}");
    }
    assert!(convert("(a+b)*c+(d)").unwrap().is_accepted());
}

#[test]
fn empty_expression() {
    let result = convert("").unwrap();
    assert_eq!(result.postfix, "");
    assert_eq!(result.verdict, Verdict::Accept);
    assert!(result.trace.is_empty());
}

#[test]
fn invalid_character_rejects() {
    let result = convert("a+b#c").unwrap();
    assert_eq!(result.verdict, Verdict::Reject);
    assert!(result.trace.lines().iter().any(|l| l == INVALID_INPUT));
}

#[test]
fn config_file_drives_the_converter() {
    let config = ConverterConfig::from_json(r#"{ "mode": "precedence" }"#).unwrap();
    let mut converter = ConverterBuilder::from_config(config).build();
    assert_eq!(converter.convert("a+b*c-d").unwrap().postfix, "abc*+d-");
}

#[test]
fn automaton_export_is_renderable() {
    let model = automaton::model();
    let graph = model.graph();

    for node in &graph.nodes {
        assert!(graph
            .edges
            .iter()
            .any(|e| e.from == node.name || e.to == node.name));
    }
    assert!(graph
        .nodes
        .iter()
        .filter(|n| n.accepting)
        .all(|n| n.name == PdaState::Accept.name()));
    assert!(model.to_dot().contains("q_dead"));
}

#[test]
fn report_carries_the_full_result() {
    let mut converter = ConverterBuilder::new().build();
    let report = ConversionReport::capture(&mut converter, "x^(y-z)").unwrap();

    assert_eq!(report.result.postfix, "xyz-^");
    assert_eq!(report.mode, Mode::BracketFlush);

    let restored = ConversionReport::from_json(&report.to_json().unwrap()).unwrap();
    assert_eq!(restored.result.trace, report.result.trace);
}

#[test]
fn conversions_run_in_parallel() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = if i % 2 == 0 { "(a+b)*c" } else { "a+b#c" };
                convert(input).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(result.postfix, "ab+c*");
            assert!(result.is_accepted());
        } else {
            assert!(!result.is_accepted());
        }
    }
}

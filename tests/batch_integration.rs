//! Batch Integration Tests
//!
//! JSON Lines in, ordered outcomes out, across the default pool and a
//! dedicated one.

use pedstat::batch::{
    evaluate_all, parse_requests, write_jsonl, BatchError, BatchRequest, BatchSummary,
    CalculatorResult,
};
use pedstat::config::BatchConfig;
use pedstat::types::{BilirubinInterpretation, BpClassification, GestationalAge, Sex};

const MIXED: &str = r#"
# growth, bp, bilirubin, then two invalid requests
{"calculator":"growth","sex":"male","measurement":"weight_for_age","age_months":0,"value":3.3464}
{"calculator":"blood_pressure","systolic":114.16,"diastolic":60,"age_years":10,"sex":"male","height_percentile":50}
{"calculator":"bilirubin","bilirubin":11.0,"postnatal_age_hours":24,"gestational_age":"term","has_risk_factors":false}
{"calculator":"blood_pressure","systolic":100,"diastolic":60,"age_years":18,"sex":"female","height_percentile":50}
{"calculator":"bilirubin","bilirubin":11.0,"postnatal_age_hours":-2,"gestational_age":"late_preterm"}
"#;

#[test]
fn mixed_batch_preserves_order_and_line_numbers() {
    let requests = parse_requests(MIXED.as_bytes()).unwrap();
    assert_eq!(requests.len(), 5);

    let outcomes = evaluate_all(&requests, &BatchConfig::default()).unwrap();
    let lines: Vec<usize> = outcomes.iter().map(|o| o.line).collect();
    assert_eq!(lines, vec![3, 4, 5, 6, 7]);

    match &outcomes[0].result {
        Ok(CalculatorResult::Growth(g)) => assert!((g.percentile - 50.0).abs() < 1e-6),
        other => panic!("expected growth result, got {other:?}"),
    }
    match &outcomes[1].result {
        Ok(CalculatorResult::BloodPressure(bp)) => {
            assert!(bp.classification >= BpClassification::Stage1Hypertension);
        }
        other => panic!("expected bp result, got {other:?}"),
    }
    match &outcomes[2].result {
        Ok(CalculatorResult::Bilirubin(b)) => {
            assert_eq!(b.interpretation, BilirubinInterpretation::ExceedsPhototherapy);
        }
        other => panic!("expected bilirubin result, got {other:?}"),
    }
    assert!(outcomes[3].result.is_err());
    assert!(outcomes[4].result.is_err());

    assert_eq!(
        BatchSummary::from_outcomes(&outcomes),
        BatchSummary {
            total: 5,
            scored: 3,
            rejected: 2
        }
    );
}

#[test]
fn fail_fast_reports_first_rejected_line() {
    let requests = parse_requests(MIXED.as_bytes()).unwrap();
    let config = BatchConfig {
        threads: 0,
        fail_fast: true,
    };
    match evaluate_all(&requests, &config) {
        Err(BatchError::Rejected { line, source }) => {
            assert_eq!(line, 6);
            assert!(source.is_invalid_input());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn dedicated_pool_matches_global_pool() {
    let requests: Vec<(usize, BatchRequest)> = (0..500)
        .map(|i| {
            (
                i + 1,
                BatchRequest::Bilirubin {
                    bilirubin: f64::from(i as u32 % 25),
                    postnatal_age_hours: f64::from(i as u32 % 130),
                    gestational_age: if i % 2 == 0 {
                        GestationalAge::Term
                    } else {
                        GestationalAge::LatePreterm
                    },
                    has_risk_factors: i % 3 == 0,
                },
            )
        })
        .collect();

    let global = evaluate_all(&requests, &BatchConfig::default()).unwrap();
    let dedicated = evaluate_all(
        &requests,
        &BatchConfig {
            threads: 3,
            fail_fast: false,
        },
    )
    .unwrap();
    assert_eq!(global, dedicated);
    assert!(global.iter().enumerate().all(|(i, o)| o.line == i + 1));
}

#[test]
fn jsonl_output_has_one_object_per_line() {
    let requests = parse_requests(MIXED.as_bytes()).unwrap();
    let outcomes = evaluate_all(&requests, &BatchConfig::default()).unwrap();

    let mut buf = Vec::new();
    write_jsonl(&mut buf, &outcomes).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let rows: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["line"], 3);
    assert_eq!(rows[0]["result"]["calculator"], "growth");
    assert_eq!(rows[1]["result"]["classification"], "stage1_hypertension");
    assert!(rows[3]["error"].as_str().unwrap().contains("age_years"));
    assert!(rows[3].get("result").is_none());
}

#[test]
fn unknown_calculator_is_parse_error() {
    let input = "{\"calculator\":\"apgar\",\"score\":9}\n";
    assert!(matches!(
        parse_requests(input.as_bytes()),
        Err(BatchError::Parse { line: 1, .. })
    ));
}

#[test]
fn request_roundtrips_through_json() {
    let request = BatchRequest::Growth {
        sex: Sex::Female,
        measurement: pedstat::types::GrowthMeasurement::LengthForAge,
        age_months: 9.0,
        value: 70.1,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("\"calculator\":\"growth\""));
    assert!(json.contains("\"measurement\":\"length_for_age\""));
}

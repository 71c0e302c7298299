use bondgrid::commands::generate::generate_positions;
use bondgrid::commands::infer::infer_from_json;
use bondgrid::commands::preview::render_table;
use chrono::{TimeZone, Utc};
use grid_core::{FieldFormat, FieldKind, FieldValue, Row};
use position_generator::export::write_json;
use position_generator::{generate, generate_checked, positions_to_rows, GeneratorError, RowCount};
use schema_infer::{format_label, infer, InferenceConfig, SamplingPolicy, SchemaInferencer};
use tempfile::TempDir;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_generate_counts_and_ids() {
    assert!(generate(RowCount::new(0)).is_empty());

    let positions = generate(RowCount::new(75));
    assert_eq!(positions.len(), 75);
    let ids: Vec<u64> = positions.iter().map(|p| p.id).collect();
    assert_eq!(ids, (1..=75).collect::<Vec<u64>>());
}

#[test]
fn test_negative_count_rejected() {
    assert!(matches!(
        generate_checked(-5),
        Err(GeneratorError::InvalidCount(_))
    ));
    assert!("2.5".parse::<RowCount>().is_err());
}

#[test]
fn test_generated_identities_hold() {
    for p in generate(RowCount::new(500)) {
        assert!(p.ask_price >= p.bid_price, "id {}", p.id);
        assert!(close(p.modified_duration, p.duration / (1.0 + p.ytm / 100.0)));
        assert!(close(p.macaulay_duration, p.duration * (1.0 + p.ytm / 100.0)));
        assert!(close(p.cost_basis, p.market_value - p.unrealized_gain_loss));

        if !p.has_call_feature {
            assert!(p.next_call_date.is_none() && p.call_price.is_none());
        }
        if !p.has_put_feature {
            assert!(p.next_put_date.is_none() && p.put_price.is_none());
        }
    }
}

#[test]
fn test_infer_small_samples() {
    assert!(infer(&[]).is_empty());

    let rows = vec![
        Row::new().with("a", true),
        Row::new().with("a", false),
        Row::new().with("a", "true"),
    ];
    assert_eq!(infer(&rows)[0].kind, FieldKind::Boolean);

    let rows: Vec<Row> = [101.25, 99.5, 100.0]
        .iter()
        .map(|p| Row::new().with("price", *p))
        .collect();
    assert!(matches!(infer(&rows)[0].format, FieldFormat::Currency { .. }));
}

#[test]
fn test_status_enumerated_in_first_seen_order() {
    let statuses = [
        "Settled", "Pending", "Settled", "Failed", "Pending", "Settled", "Settled", "Failed",
        "Pending", "Settled",
    ];
    let rows: Vec<Row> = statuses
        .iter()
        .map(|s| Row::new().with("status", *s))
        .collect();

    let configs = SchemaInferencer::with_policy(SamplingPolicy {
        fraction: 1.0,
        min: 1,
        max: None,
    })
    .infer(&rows);

    assert_eq!(
        configs[0].kind,
        FieldKind::Enumerated {
            values: vec![
                "Settled".to_string(),
                "Pending".to_string(),
                "Failed".to_string()
            ]
        }
    );
}

#[test]
fn test_labels() {
    assert_eq!(format_label("instrumentType"), "Instrument Type");
    assert_eq!(format_label("issue_date"), "Issue date");
}

#[test]
fn test_sampling_window_of_200() {
    let mut rows: Vec<Row> = (1..=200).map(|i| Row::new().with("id", i as i64)).collect();
    rows[20].insert("record21", FieldValue::from("not sampled"));

    let configs = infer(&rows);
    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].key, "id");
}

#[test]
fn test_export_then_infer() {
    let as_of = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    let positions = generate_positions(RowCount::new(200), Some(7), Some(as_of));
    assert_eq!(
        positions,
        generate_positions(RowCount::new(200), Some(7), Some(as_of))
    );

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("positions.json");
    write_json(&path, &positions).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.starts_with("[\n  {\n    \"id\": 1,\n    \"instrumentType\""));

    let configs = infer_from_json(&json, InferenceConfig::default()).unwrap();
    assert_eq!(configs.len(), 60);

    let by_key = |key: &str| {
        configs
            .iter()
            .find(|c| c.key == key)
            .unwrap_or_else(|| panic!("missing {key}"))
    };

    assert_eq!(by_key("instrumentType").label, "Instrument Type");
    assert_eq!(by_key("issueDate").kind, FieldKind::Temporal);
    assert_eq!(by_key("lastUpdate").kind, FieldKind::Temporal);
    assert_eq!(by_key("hasCallFeature").kind, FieldKind::Boolean);
    assert!(matches!(
        by_key("nextCallDate").kind,
        FieldKind::Temporal | FieldKind::Empty
    ));
    assert!(matches!(
        by_key("bidPrice").format,
        FieldFormat::Currency { .. }
    ));
    assert!(matches!(
        by_key("couponRate").format,
        FieldFormat::Percent { .. }
    ));
    assert_eq!(by_key("ytm").format, FieldFormat::Number { decimals: 2 });
}

#[test]
fn test_preview_renders_labels() {
    let positions = generate_positions(RowCount::new(30), Some(3), None);
    let rows = positions_to_rows(&positions).unwrap();
    let configs = infer(&rows);

    let table = render_table(&configs, &rows, 3);
    let header = table.lines().next().unwrap();

    assert!(header.starts_with("| Id "));
    assert!(header.contains("Bid Ask Spread"));
    assert_eq!(table.lines().count(), 5);
}

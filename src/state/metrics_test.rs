use super::*;

#[test]
fn analyze_kpis_have_distinct_nonempty_labels() {
    for (i, a) in ANALYZE_KPIS.iter().enumerate() {
        assert!(!a.label.is_empty());
        assert!(!a.value.is_empty());
        for b in ANALYZE_KPIS.iter().skip(i + 1) {
            assert_ne!(a.label, b.label);
        }
    }
}

#[test]
fn table_rows_cover_both_years() {
    assert_eq!(MOCK_TABLE_ROWS[0].0, "2024");
    assert_eq!(MOCK_TABLE_ROWS[1].0, "2025");
}

#[test]
fn sample_sql_targets_purchase_order_fact() {
    assert!(SAMPLE_SQL.contains("fact_purchase_order"));
    assert!(SAMPLE_SQL.ends_with(';'));
}

#[test]
fn dashboard_kpi_labels_match_value_count() {
    assert_eq!(MOCK_KPI_LABELS.len(), MOCK_KPI_VALUES.len());
}

//! Mock metric set: the literal KPI, table, and SQL constants the demo
//! renders. Nothing here is computed; these stand in for backend results
//! until a real analytics service exists.

#[cfg(test)]
#[path = "metrics_test.rs"]
mod metrics_test;

/// A labeled KPI card on the analyze surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

/// KPI cards shown next to the insight summary.
pub const ANALYZE_KPIS: [Kpi; 3] = [
    Kpi { label: "2024 수주금액", value: "₩ 12.0억", note: "기준: Mock 데이터" },
    Kpi { label: "2025 수주금액", value: "₩ 14.8억", note: "+23.4% YoY (Mock)" },
    Kpi { label: "주요 공급사 수", value: "8", note: "상위 80% 기여 (Mock)" },
];

/// Year / amount / delta rows for the mock result table.
pub const MOCK_TABLE_ROWS: [(&str, &str, &str); 2] = [
    ("2024", "1,203,200,000", "-"),
    ("2025", "1,485,500,000", "+23.4%"),
];

/// The reference SQL shown in the "generated SQL" box.
pub const SAMPLE_SQL: &str = "SELECT year, SUM(order_qty * unit_price) AS total_amount
FROM fact_purchase_order
WHERE year IN (2024, 2025)
GROUP BY year
ORDER BY year;";

/// Values the dashboard mock query writes into its fixed regions.
pub const MOCK_INSIGHT: &str = "현재는 Mock 화면입니다. 백엔드 연결 시 분석 결과가 표시됩니다.";
pub const MOCK_SQL_PREVIEW: &str = "SELECT * FROM ... (Mock SQL)";
pub const MOCK_KPI_VALUES: [&str; 3] = ["1,234", "567", "89"];

/// Labels for the three dashboard KPI tiles.
pub const MOCK_KPI_LABELS: [&str; 3] = ["금일 처리 건수", "진행 중 발주", "지연 항목"];

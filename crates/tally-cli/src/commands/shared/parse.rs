use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tally_core::entities::InspectionActivityEntry;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// Parse an optional date flag.
pub fn parse_optional_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    raw.map(|value| parse_date(value, field)).transpose()
}

/// Parse a `NAME=QTY` activity argument. The last `=` separates the
/// quantity, so names may contain `=`.
pub fn parse_activity_entry(raw: &str) -> anyhow::Result<InspectionActivityEntry> {
    let Some((name, quantity)) = raw.rsplit_once('=') else {
        anyhow::bail!("invalid activity '{raw}': expected NAME=QTY");
    };
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("invalid activity '{raw}': name is empty");
    }
    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|error| anyhow::anyhow!("invalid quantity in '{raw}': {error}"))?;
    Ok(InspectionActivityEntry::new(name, quantity))
}

/// Parse every `--activity` argument, in order.
pub fn parse_activity_entries(raw: &[String]) -> anyhow::Result<Vec<InspectionActivityEntry>> {
    raw.iter().map(|entry| parse_activity_entry(entry)).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tally_report::chart::ChartMetric;

    use super::*;

    #[test]
    fn parses_snake_case_enum() {
        let metric: ChartMetric = parse_enum("quantity", "chart").expect("chart should parse");
        assert_eq!(metric, ChartMetric::Quantity);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<ChartMetric>("pie", "chart").expect_err("should fail");
        assert!(err.to_string().contains("invalid chart 'pie'"));
    }

    #[test]
    fn parses_dates() {
        assert_eq!(
            parse_date(" 2024-03-31 ", "date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        );
        assert!(parse_date("31/03/2024", "date").is_err());
        assert!(parse_date("2024-02-30", "date").is_err());
        assert_eq!(parse_optional_date(None, "date").unwrap(), None);
    }

    #[test]
    fn parses_activity_entries() {
        assert_eq!(
            parse_activity_entry("Auto de Infração = 2").unwrap(),
            InspectionActivityEntry::new("Auto de Infração", 2)
        );
        assert_eq!(
            parse_activity_entry("a=b=3").unwrap(),
            InspectionActivityEntry::new("a=b", 3)
        );
    }

    #[test]
    fn rejects_malformed_activity_entries() {
        for raw in ["Interdição", "=2", "Interdição=", "Interdição=-1", "Interdição=x"] {
            assert!(parse_activity_entry(raw).is_err(), "accepted {raw}");
        }
    }

    #[test]
    fn zero_quantity_parses_and_is_left_to_validation() {
        assert_eq!(parse_activity_entry("A=0").unwrap().quantity, 0);
    }
}

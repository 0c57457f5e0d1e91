//! Aggregate statistics over an import
//!
//! Counts are per resolved line; quantities are discarded by the parser.

use serde::Serialize;

use crate::resolve::ResolvedItem;

/// Mana values at or above this share the last curve bucket
const CURVE_CAP: usize = 10;

/// One bar of the mana curve
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurveBucket {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckSummary {
    pub total_lines: usize,
    pub resolved: usize,
    pub unresolved: usize,
    /// Sum of USD prices over resolved lines; cards without a price count as zero
    pub total_usd: f64,
    /// Non-empty buckets in ascending order, `10+` last. Lands are excluded.
    pub mana_curve: Vec<CurveBucket>,
}

/// Summarize an ordered import result
pub fn summarize(items: &[ResolvedItem]) -> DeckSummary {
    let mut counts = [0usize; CURVE_CAP + 1];
    let mut total_usd = 0.0;
    let mut resolved = 0;

    for record in items.iter().filter_map(|item| item.data.as_ref()) {
        resolved += 1;
        total_usd += record.usd_price().unwrap_or(0.0);

        if record.is_land() {
            continue;
        }
        if let Some(cmc) = record.cmc {
            let bucket = (cmc.max(0.0).floor() as usize).min(CURVE_CAP);
            counts[bucket] += 1;
        }
    }

    let mana_curve = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count > 0)
        .map(|(bucket, count)| CurveBucket {
            label: if bucket == CURVE_CAP {
                format!("{CURVE_CAP}+")
            } else {
                bucket.to_string()
            },
            count: *count,
        })
        .collect();

    DeckSummary {
        total_lines: items.len(),
        resolved,
        unresolved: items.len() - resolved,
        total_usd,
        mana_curve,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::fixtures::card;
    use crate::card::Prices;

    fn item(name: &str, cmc: f64, type_line: &str, usd: Option<&str>) -> ResolvedItem {
        let mut record = card(name);
        record.cmc = Some(cmc);
        record.type_line = Some(type_line.to_string());
        record.prices = Some(Prices {
            usd: usd.map(str::to_string),
            ..Prices::default()
        });
        ResolvedItem {
            name: name.to_string(),
            data: Some(record),
        }
    }

    #[test]
    fn test_summarize_counts_and_price() {
        let items = vec![
            item("Sol Ring", 1.0, "Artifact", Some("1.50")),
            item("Arcane Signet", 2.0, "Artifact", Some("0.25")),
            item("Island", 0.0, "Basic Land — Island", None),
            ResolvedItem {
                name: "Not A Real Card".to_string(),
                data: None,
            },
        ];

        let summary = summarize(&items);

        assert_eq!(summary.total_lines, 4);
        assert_eq!(summary.resolved, 3);
        assert_eq!(summary.unresolved, 1);
        assert!((summary.total_usd - 1.75).abs() < 1e-9);
        assert_eq!(
            summary.mana_curve,
            vec![
                CurveBucket {
                    label: "1".to_string(),
                    count: 1
                },
                CurveBucket {
                    label: "2".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_summarize_high_mana_values_share_bucket() {
        let items = vec![
            item("Draco", 16.0, "Creature — Dragon", None),
            item("Emrakul, the Aeons Torn", 15.0, "Legendary Creature — Eldrazi", None),
            item("Blightsteel Colossus", 12.0, "Artifact Creature — Phyrexian Golem", None),
            item("Ulamog's Crusher", 8.0, "Creature — Eldrazi", None),
        ];

        let summary = summarize(&items);

        assert_eq!(summary.mana_curve.len(), 2);
        assert_eq!(summary.mana_curve[0].label, "8");
        assert_eq!(summary.mana_curve[1].label, "10+");
        assert_eq!(summary.mana_curve[1].count, 3);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_lines, 0);
        assert_eq!(summary.total_usd, 0.0);
        assert!(summary.mana_curve.is_empty());
    }
}

/// Score aggregation.
///
/// Raw and scaled scores are independent axes: a record may carry either,
/// both, or neither, and each axis's statistics are computed over its own
/// non-null subset. An empty record set yields no summary at all so that
/// "no data" stays distinguishable from "all zero scores".
use rust_decimal::Decimal;

use crate::models::{AxisStats, ScoreRecord, ScoreSummary};

pub fn summarize(records: &[ScoreRecord]) -> Option<ScoreSummary> {
    if records.is_empty() {
        return None;
    }

    Some(ScoreSummary {
        count: records.len(),
        raw: axis_stats(records.iter().filter_map(|r| r.raw_score)),
        scaled: axis_stats(records.iter().filter_map(|r| r.scaled_score)),
    })
}

fn axis_stats(values: impl Iterator<Item = Decimal>) -> Option<AxisStats> {
    let values: Vec<Decimal> = values.collect();
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let sum: Decimal = values.iter().copied().sum();
    let min = values.iter().copied().min()?;
    let max = values.iter().copied().max()?;

    Some(AxisStats {
        count,
        avg: sum / Decimal::from(count as u64),
        min,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn record(raw: Option<Decimal>, scaled: Option<Decimal>) -> ScoreRecord {
        ScoreRecord {
            id: Uuid::new_v4(),
            project_id: Uuid::new_v4(),
            appointment_id: Uuid::new_v4(),
            judge_id: Uuid::new_v4(),
            raw_score: raw,
            scaled_score: scaled,
        }
    }

    #[test]
    fn empty_record_set_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn zero_scores_still_produce_a_summary() {
        let summary = summarize(&[record(Some(dec!(0)), Some(dec!(0)))]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.raw.unwrap().avg, dec!(0));
    }

    #[test]
    fn axes_are_computed_over_their_own_subsets() {
        let records = vec![
            record(Some(dec!(80)), Some(dec!(85.50))),
            record(Some(dec!(90)), None),
            record(None, Some(dec!(70.50))),
        ];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.count, 3);

        let raw = summary.raw.unwrap();
        assert_eq!(raw.count, 2);
        assert_eq!(raw.avg, dec!(85));
        assert_eq!(raw.min, dec!(80));
        assert_eq!(raw.max, dec!(90));

        let scaled = summary.scaled.unwrap();
        assert_eq!(scaled.count, 2);
        assert_eq!(scaled.avg, dec!(78));
        assert_eq!(scaled.min, dec!(70.50));
        assert_eq!(scaled.max, dec!(85.50));
    }

    #[test]
    fn axis_without_values_has_no_stats() {
        let summary = summarize(&[record(Some(dec!(75)), None)]).unwrap();
        assert!(summary.raw.is_some());
        assert!(summary.scaled.is_none());
    }

    #[test]
    fn min_avg_max_ordering_holds() {
        let records = vec![
            record(Some(dec!(-3.25)), None),
            record(Some(dec!(12.00)), None),
            record(Some(dec!(7.10)), None),
        ];
        let raw = summarize(&records).unwrap().raw.unwrap();
        assert!(raw.min <= raw.avg && raw.avg <= raw.max);
    }
}

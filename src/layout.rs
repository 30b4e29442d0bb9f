// src/layout.rs

use crate::table::Table;

/// How many leading rows feed the width estimate.
pub const WIDTH_SAMPLE_ROWS: usize = 20;

/// Estimate a relative width per column from sampled cell lengths.
///
/// For column `i` the weight is the mean character count of cell `i` over the
/// first `min(20, row_count)` rows. A ragged row with no cell in that column
/// contributes length 0. The weights are relative; callers normalize by the
/// sum to get proportional shares. Returns `None` when there are no data
/// rows, and callers fall back to equal widths.
pub fn estimate_widths(table: &Table) -> Option<Vec<f32>> {
    if table.rows.is_empty() || table.column_count() == 0 {
        return None;
    }

    let sample = &table.rows[..table.rows.len().min(WIDTH_SAMPLE_ROWS)];

    let widths = (0..table.column_count())
        .map(|col| {
            let total: usize = sample
                .iter()
                .map(|row| row.get(col).map_or(0, |cell| cell.chars().count()))
                .sum();
            total as f32 / sample.len() as f32
        })
        .collect();

    Some(widths)
}

/// Normalize hints to integer percentage shares. Zero-sum hints (all-empty
/// cells) degrade to equal shares.
pub fn percentage_shares(hints: &[f32]) -> Vec<u16> {
    let sum: f32 = hints.iter().sum();
    if sum <= 0.0 {
        return equal_shares(hints.len());
    }
    hints
        .iter()
        .map(|w| ((w / sum) * 100.0).round() as u16)
        .collect()
}

pub fn equal_shares(columns: usize) -> Vec<u16> {
    if columns == 0 {
        return Vec::new();
    }
    vec![(100 / columns) as u16; columns]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn single_column_uniform_length() {
        let t = table(&["w"], &[&["abcd"], &["efgh"], &["ijkl"]]);
        assert_eq!(estimate_widths(&t), Some(vec![4.0]));
    }

    #[test]
    fn zero_rows_gives_no_estimate() {
        let t = table(&["a", "b"], &[]);
        assert_eq!(estimate_widths(&t), None);
    }

    #[test]
    fn mean_over_rows_per_column() {
        let t = table(&["a", "b"], &[&["xx", "y"], &["xxxx", "yyy"]]);
        assert_eq!(estimate_widths(&t), Some(vec![3.0, 2.0]));
    }

    #[test]
    fn sample_is_capped_at_twenty_rows() {
        let mut rows: Vec<Vec<String>> = (0..WIDTH_SAMPLE_ROWS).map(|_| vec!["ab".into()]).collect();
        // Row 21 would skew the mean upward if it were sampled.
        rows.push(vec!["a".repeat(22)]);
        let t = Table {
            headers: vec!["c".into()],
            rows,
        };
        assert_eq!(estimate_widths(&t), Some(vec![2.0]));
    }

    #[test]
    fn ragged_row_counts_missing_cell_as_zero() {
        let t = table(&["a", "b"], &[&["xx", "yyyy"], &["xx"]]);
        assert_eq!(estimate_widths(&t), Some(vec![2.0, 2.0]));
    }

    #[test]
    fn shares_are_proportional() {
        assert_eq!(percentage_shares(&[1.0, 3.0]), vec![25, 75]);
    }

    #[test]
    fn zero_sum_hints_fall_back_to_equal() {
        assert_eq!(percentage_shares(&[0.0, 0.0]), vec![50, 50]);
    }

    #[test]
    fn equal_shares_split_evenly() {
        assert_eq!(equal_shares(4), vec![25, 25, 25, 25]);
        assert!(equal_shares(0).is_empty());
    }
}

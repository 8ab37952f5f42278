//! Letter frequency analysis
//!
//! Counts are case-insensitive. The most frequent letter is tracked while
//! counting: it only changes when a counter strictly overtakes the current
//! leader, so on ties the letter that reached the count first wins.

use std::io::BufRead;

use crate::alphabet::{self, Case, LEN};

/// Occurrences of each letter in one stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; LEN],
    total: u64,
    max_index: usize,
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; LEN],
            total: 0,
            max_index: 0,
        }
    }

    /// Counts `c` if it is a letter of the alphabet in either case.
    pub fn record(&mut self, c: char) {
        if let Some(index) = alphabet::fold(c) {
            self.counts[index] += 1;
            self.total += 1;
            if self.counts[index] > self.counts[self.max_index] {
                self.max_index = index;
            }
        }
    }

    pub fn record_str(&mut self, text: &str) {
        text.chars().for_each(|c| self.record(c));
    }

    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        table.record_str(text);
        table
    }

    pub fn counts(&self) -> &[u64; LEN] {
        &self.counts
    }

    pub fn count(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// Number of alphabet letters seen
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn max_index(&self) -> usize {
        self.max_index
    }

    /// `count / total` for the letter at `index`; 0.0 for an empty stream.
    pub fn relative(&self, index: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.counts[index] as f64 / self.total as f64
        }
    }

    pub fn relative_frequencies(&self) -> [f64; LEN] {
        std::array::from_fn(|i| self.relative(i))
    }

    /// The most frequent letter (uppercase) and its relative frequency.
    pub fn most_frequent(&self) -> (char, f64) {
        (
            alphabet::char_at(self.max_index, Case::Upper),
            self.relative(self.max_index),
        )
    }
}

/// Counts every letter read from `input`.
pub fn analyze<R: BufRead>(mut input: R) -> std::io::Result<FrequencyTable> {
    let mut table = FrequencyTable::new();
    let mut line = String::new();

    while input.read_line(&mut line)? != 0 {
        table.record_str(&line);
        line.clear();
    }

    Ok(table)
}

/// One row of the side-by-side report
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyRow {
    pub letter: char,
    pub encoded: f64,
    pub reference: f64,
}

/// An encoded stream's table next to a reference stream's table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrequencyComparison {
    pub encoded: FrequencyTable,
    pub reference: FrequencyTable,
}

impl FrequencyComparison {
    pub fn new(encoded: FrequencyTable, reference: FrequencyTable) -> Self {
        Self { encoded, reference }
    }

    /// One row per letter, in alphabet order.
    pub fn rows(&self) -> impl Iterator<Item = FrequencyRow> + '_ {
        (0..LEN).map(move |i| FrequencyRow {
            letter: alphabet::char_at(i, Case::Upper),
            encoded: self.encoded.relative(i),
            reference: self.reference.relative(i),
        })
    }

    /// Key that moves the reference's top letter onto the encoded top letter.
    ///
    /// Decoding the encoded text with this key is the usual first guess of a
    /// frequency attack. Returned in `[0, LEN)`.
    pub fn suggested_key(&self) -> i32 {
        let shift = self.encoded.max_index() as i32 - self.reference.max_index() as i32;
        shift.rem_euclid(LEN as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_ignore_case_and_foreign_chars() {
        let table = FrequencyTable::from_text("Ааа Бб, xyz 42!");
        assert_eq!(table.count(0), 3);
        assert_eq!(table.count(1), 2);
        assert_eq!(table.total(), 5);
        assert_eq!(table.max_index(), 0);
    }

    #[test]
    fn test_sum_of_counts_is_total() {
        let text = "Съешь же ещё этих мягких французских булок, да выпей же чаю";
        let table = FrequencyTable::from_text(text);
        assert_eq!(table.counts().iter().sum::<u64>(), table.total());
        assert_eq!(table.total(), 48);
    }

    #[test]
    fn test_relative_is_distribution() {
        let table =
            FrequencyTable::from_text("Широкая электрификация южных губерний даст мощный толчок");
        let freqs = table.relative_frequencies();
        assert!(freqs.iter().all(|f| (0.0..=1.0).contains(f)));
        let sum: f64 = freqs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stream() {
        let table = FrequencyTable::from_text("hello 123\n");
        assert_eq!(table.total(), 0);
        assert_eq!(table.relative(0), 0.0);
        assert_eq!(table.most_frequent(), ('А', 0.0));
    }

    #[test]
    fn test_tie_keeps_first_leader() {
        // б reaches two first; в only ties it
        let table = FrequencyTable::from_text("ббвв");
        assert_eq!(table.max_index(), 1);

        let table = FrequencyTable::from_text("вбвб");
        assert_eq!(table.max_index(), 2);
    }

    #[test]
    fn test_leader_starts_at_first_letter() {
        // а never beats the initial leader because it is the initial leader
        let table = FrequencyTable::from_text("ба");
        assert_eq!(table.max_index(), 1);
    }

    #[test]
    fn test_analyze_stream() {
        let input = "зз з\nЗаб\n";
        let table = analyze(input.as_bytes()).unwrap();
        assert_eq!(table.count(8), 4);
        assert_eq!(table.total(), 6);
        assert_eq!(table.most_frequent(), ('З', 4.0 / 6.0));
    }

    #[test]
    fn test_comparison_reports_each_peak() {
        let encoded = FrequencyTable::from_text("ззззз иии а");
        let reference = FrequencyTable::from_text("аааа бб в");
        let comparison = FrequencyComparison::new(encoded, reference);

        assert_eq!(comparison.encoded.max_index(), 8);
        assert_eq!(comparison.reference.max_index(), 0);
        assert_eq!(comparison.encoded.most_frequent(), ('З', 5.0 / 9.0));
        assert_eq!(comparison.reference.most_frequent(), ('А', 4.0 / 7.0));
        assert_eq!(comparison.suggested_key(), 8);

        let rows: Vec<FrequencyRow> = comparison.rows().collect();
        assert_eq!(rows.len(), LEN);
        assert_eq!(rows[0].letter, 'А');
        assert_eq!(rows[8].encoded, 5.0 / 9.0);
        assert_eq!(rows[32].letter, 'Я');
    }

    #[test]
    fn test_suggested_key_wraps() {
        let comparison = FrequencyComparison::new(
            FrequencyTable::from_text("а"),
            FrequencyTable::from_text("я"),
        );
        assert_eq!(comparison.suggested_key(), 1);
    }

    #[test]
    fn test_suggested_key_recovers_shift() {
        let plain =
            "в лесу родилась ёлочка, в лесу она росла. зимой и летом стройная, зелёная была.";
        let key = crate::key::ShiftKey::new(-11).unwrap();
        let encoded = crate::cipher::transform_str(plain, key, crate::cipher::Mode::Encode).text;

        let comparison = FrequencyComparison::new(
            FrequencyTable::from_text(&encoded),
            FrequencyTable::from_text(plain),
        );
        assert_eq!(comparison.suggested_key(), key.offset() as i32);
    }
}

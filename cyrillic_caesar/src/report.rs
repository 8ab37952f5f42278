//! Console text for warnings, errors and the frequency table

use colored::Colorize;

use crate::cipher::CharWarning;
use crate::frequency::FrequencyComparison;

pub fn warning(w: &CharWarning) -> String {
    format!(
        "Found unexpected character \"{}\" (line #{}, position #{})",
        w.character, w.line, w.column
    )
    .yellow()
    .to_string()
}

pub fn error(message: &str) -> String {
    message.red().to_string()
}

pub fn success(output: &std::path::Path) -> String {
    format!("Success! Check file \"{}\"", output.display()).green().to_string()
}

/// 33 rows of `letter encoded reference` followed by the two summary lines.
pub fn frequency_table(comparison: &FrequencyComparison) -> String {
    let mut out = String::new();

    for row in comparison.rows() {
        out.push_str(&format!(
            "{} {:.3} {:.3}\n",
            row.letter.to_string().blue(),
            row.encoded,
            row.reference
        ));
    }

    let (en_letter, en_freq) = comparison.encoded.most_frequent();
    let (ref_letter, ref_freq) = comparison.reference.most_frequent();
    out.push('\n');
    out.push_str(&format!(
        "{}\t {} ({:.3})\n",
        "Most frequent letter in encoded text:".bold(),
        en_letter.to_string().green(),
        en_freq
    ));
    out.push_str(&format!(
        "{} {} ({:.3})\n",
        "Most frequent letter in referenced text:".bold(),
        ref_letter.to_string().green(),
        ref_freq
    ));
    out
}

pub fn suggested_key(comparison: &FrequencyComparison) -> String {
    let key = comparison.suggested_key();
    format!(
        "{} {} (decode with -d <file> -k {})",
        "Suggested key:".bold(),
        key.to_string().green(),
        key
    )
}

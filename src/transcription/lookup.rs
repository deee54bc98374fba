/*!
 * Line tokenization and pronunciation lookup.
 *
 * Splits input lines into whitespace-delimited tokens, extracts the
 * alphabetic runs inside each token, and substitutes the runs the
 * pronunciation table knows while leaving everything else in place.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pronunciation_table::PronunciationTable;

// @const: Alphabetic run regex
static SUBWORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z]+").unwrap()
});

/// Transcribe a single line into parallel word and IPA sequences
///
/// The line is split on ASCII whitespace; a blank line yields two empty
/// sequences. Each token keeps its position in both outputs, so callers can
/// pair words with their transcriptions index by index.
pub fn transcribe_line(table: &PronunciationTable, line: &str) -> (Vec<String>, Vec<String>) {
    let mut words = Vec::new();
    let mut ipas = Vec::new();

    for token in line.split_ascii_whitespace() {
        words.push(token.to_string());
        ipas.push(transcribe_token(table, token));
    }

    (words, ipas)
}

/// Build the IPA form of one token
///
/// Alphabetic runs are resolved against the table and the token is rebuilt
/// in a single left-to-right pass, so a run occurring more than once inside
/// the token substitutes at every occurrence. Tokens without alphabetic
/// content, and tokens where no run is known, pass through verbatim.
fn transcribe_token(table: &PronunciationTable, token: &str) -> String {
    let mut matched = false;
    let mut rebuilt = String::with_capacity(token.len());
    let mut last_end = 0;

    for run in SUBWORD_REGEX.find_iter(token) {
        rebuilt.push_str(&token[last_end..run.start()]);
        match table.get(run.as_str()) {
            Some(ipa) => {
                matched = true;
                rebuilt.push_str(ipa);
            }
            None => rebuilt.push_str(run.as_str()),
        }
        last_end = run.end();
    }

    if !matched {
        return token.to_string();
    }

    rebuilt.push_str(&token[last_end..]);
    rebuilt
}

/*!
 * Pair padding and column-bounded line wrapping.
 *
 * Takes the parallel word/IPA sequences produced by lookup, pads each pair
 * to equal visual width, and greedily packs the padded pairs into line
 * pairs that stay within a configured column budget.
 */

/// Pad each (word, ipa) pair to equal character length
///
/// The shorter string of a pair is right-padded with spaces to the length
/// of the longer one. Width is counted in characters, not bytes; IPA
/// transcriptions are multi-byte in UTF-8. Order and length of the input
/// sequences are preserved, including empty paragraph-break pairs.
pub fn pad_pairs(words: &[String], ipas: &[String]) -> (Vec<String>, Vec<String>) {
    let mut padded_words = Vec::with_capacity(words.len());
    let mut padded_ipas = Vec::with_capacity(ipas.len());

    for (word, ipa) in words.iter().zip(ipas.iter()) {
        let word_len = word.chars().count();
        let ipa_len = ipa.chars().count();
        let target = word_len.max(ipa_len);

        padded_words.push(pad_to(word, word_len, target));
        padded_ipas.push(pad_to(ipa, ipa_len, target));
    }

    (padded_words, padded_ipas)
}

fn pad_to(text: &str, len: usize, target: usize) -> String {
    let mut padded = String::with_capacity(text.len() + (target - len));
    padded.push_str(text);
    for _ in len..target {
        padded.push(' ');
    }
    padded
}

/// Accumulator for the output line currently being filled
#[derive(Default)]
struct LineBuilder {
    words: Vec<String>,
    ipas: Vec<String>,
    word_width: usize,
    ipa_width: usize,
}

impl LineBuilder {
    fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Width the line would have with this pair appended
    ///
    /// Both renderings are projected on their space-joined form; the wider
    /// of the two is the one the budget check must hold for.
    fn projected_width(&self, word_len: usize, ipa_len: usize) -> usize {
        let sep = if self.words.is_empty() { 0 } else { 1 };
        (self.word_width + sep + word_len).max(self.ipa_width + sep + ipa_len)
    }

    fn push(&mut self, word: &str, ipa: &str, word_len: usize, ipa_len: usize) {
        let sep = if self.words.is_empty() { 0 } else { 1 };
        self.word_width += sep + word_len;
        self.ipa_width += sep + ipa_len;
        self.words.push(word.to_string());
        self.ipas.push(ipa.to_string());
    }

    /// Emit the accumulated pair as word-line, ipa-line and blank separator
    fn flush_into(&mut self, lines: &mut Vec<String>) {
        if self.words.is_empty() {
            return;
        }
        lines.push(self.words.join(" "));
        lines.push(self.ipas.join(" "));
        lines.push(String::new());
        self.words.clear();
        self.ipas.clear();
        self.word_width = 0;
        self.ipa_width = 0;
    }
}

/// Pack padded pairs into aligned line pairs within `max_width` columns
///
/// Pairs whose word is empty or whitespace are paragraph-break sentinels:
/// they flush the current line pair and emit nothing themselves, so
/// consecutive sentinels collapse into a single separator. A pair wider
/// than the budget occupies a line pair of its own. The result is the
/// newline-joined block of word-line, ipa-line and blank separator groups,
/// with no separator after the final pair.
pub fn wrap_pairs(words: &[String], ipas: &[String], max_width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = LineBuilder::default();

    for (word, ipa) in words.iter().zip(ipas.iter()) {
        if word.trim().is_empty() {
            current.flush_into(&mut lines);
            continue;
        }

        let word_len = word.chars().count();
        let ipa_len = ipa.chars().count();

        if !current.is_empty() && current.projected_width(word_len, ipa_len) > max_width {
            current.flush_into(&mut lines);
        }
        current.push(word, ipa, word_len, ipa_len);
    }

    current.flush_into(&mut lines);

    // Every flush appends a trailing separator; the last group keeps none
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

//! Environment variable validation with helpful error messages
//!
//! Invalid `EMICALC_*` values never abort a quote: they are reported with a
//! typo suggestion where one exists and the configured value is kept.

use std::io::Write;

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
    expected: Option<&'a str>,
}

impl<'a> EnvVarValidator<'a> {
    /// Validator for a variable with a fixed set of values
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
            expected: None,
        }
    }

    /// Validator for a free-form (numeric) variable, described by `expected`
    pub fn numeric(var_name: &'a str, expected: &'a str) -> Self {
        Self {
            var_name,
            valid_values: &[],
            expected: Some(expected),
        }
    }

    /// Parse a value, returning `fallback` if invalid (with a warning on stderr)
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    /// Parse with a custom writer (for testing)
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        fallback: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value) {
            Some(parsed) => parsed,
            None => {
                tracing::warn!(var = self.var_name, value, "ignoring invalid environment value");
                let suggestion = self.suggest(value);
                let _ = writeln!(
                    writer,
                    "Warning: Invalid {} value '{}'{}",
                    self.var_name, value, suggestion
                );
                if let Some(expected) = self.expected {
                    let _ = writeln!(writer, "Expected: {}", expected);
                } else {
                    let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
                }
                fallback
            }
        }
    }

    /// Suggest a valid value based on Levenshtein distance
    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        let mut best: Option<(&str, usize)> = None;

        for &valid in self.valid_values {
            let dist = levenshtein(&input, valid);
            match best {
                None => best = Some((valid, dist)),
                Some((_, best_dist)) if dist < best_dist => best = Some((valid, dist)),
                _ => {}
            }
        }

        // Only suggest if distance is reasonable (≤ 2 edits)
        match best {
            Some((suggested, dist)) if dist <= 2 && dist > 0 => {
                format!(". Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let a_len = a_bytes.len();
    let b_len = b_bytes.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row: Vec<usize> = vec![0; b_len + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

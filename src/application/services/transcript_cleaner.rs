use std::sync::LazyLock;

use regex::Regex;

use crate::domain::CleaningPolicy;

/// Log-tag prefixes the engine interleaves with transcript text, matched
/// case-insensitively against the start of a trimmed line.
const NOISE_PREFIXES: [&str; 5] = ["whisper_", "ggml_", "main:", "system_info:", "output_txt:"];

static TIMING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}:\d{2}").unwrap());

static BRACKETED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[^\]]*\]\s*").unwrap());

/// Whether a line is engine diagnostics rather than transcript content.
pub fn is_noise_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    if NOISE_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        return true;
    }
    TIMING_LINE.is_match(line)
}

/// Reduce raw engine output to the response transcript. When filtering
/// leaves nothing, the input is returned untouched rather than an empty
/// string.
pub fn clean_transcript(raw: &str, policy: CleaningPolicy) -> String {
    let surviving: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| !is_noise_line(l))
        .collect();

    match policy {
        CleaningPolicy::FirstUtterance => match surviving.first() {
            Some(line) => BRACKETED_PREFIX.replace(line, "").trim().to_string(),
            None => raw.to_string(),
        },
        CleaningPolicy::FullUtterance => {
            let joined = collapse_whitespace(&surviving.join(" "));
            if joined.is_empty() {
                raw.to_string()
            } else {
                joined
            }
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_was_space = false;

    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }

    out
}

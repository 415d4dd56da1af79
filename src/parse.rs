use anyhow::{Result, anyhow};

/// Extract the self-reported duration, in milliseconds, from a benchmark's
/// captured stdout.
///
/// The output is split on single spaces. When more than three tokens are
/// present the last one is discarded — tolerates exactly one trailing
/// artifact after the duration. The last remaining token, minus a single
/// trailing newline, must parse as an integer.
pub fn parse_duration(stdout: &[u8]) -> Result<i64> {
    let text =
        std::str::from_utf8(stdout).map_err(|_| anyhow!("output is not valid UTF-8"))?;

    let mut tokens: Vec<&str> = text.split(' ').collect();
    if tokens.len() > 3 {
        tokens.pop();
    }

    // split(' ') yields at least one (possibly empty) token
    let last = tokens.last().copied().unwrap_or_default();
    let token = last.strip_suffix('\n').unwrap_or(last);

    token
        .parse::<i64>()
        .map_err(|_| anyhow!("final token '{}' is not an integer", token))
}

/// Splits raw recipe instructions into an ordered list of steps.
///
/// One non-blank line is one step. Surrounding whitespace is trimmed and
/// blank lines are dropped, so `"\n"`-only or empty text yields no steps and a
/// single run-on paragraph yields exactly one step. Both `\n` and `\r\n`
/// line endings are accepted.
pub fn split_into_steps(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

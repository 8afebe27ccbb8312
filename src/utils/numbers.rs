/// Share of `part` in `whole`, in percent
pub fn percentage(part: usize, whole: usize) -> f64
{
    100.0 * part as f64 / whole as f64
}

/// Number of items making up `pct` percent of `total`, truncated towards zero
pub fn truncated_share(total: usize, pct: f64) -> usize
{
    (total as f64 * pct / 100.0) as usize
}

/// Renders `value` with at most `digits` significant digits, dropping trailing zeros
pub fn significant(value: f64, digits: usize) -> String
{
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let magnitude = value.abs().log10().floor() as i64;
    let decimals = (digits as i64 - 1 - magnitude).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);

    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

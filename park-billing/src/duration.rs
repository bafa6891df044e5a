/// Render an elapsed duration in fractional hours as dashboard text.
///
/// Decomposes into whole hours and rounded minutes: minutes-only under an
/// hour, hours-only on the whole hour, "`h` hr `m` min" otherwise. When the
/// minute part rounds up to 60 the overflow carries into the hour, so
/// 0.9999 hours renders as "1 hr", never "0 hr 60 min".
///
/// Expects a non-negative input; fee breakdowns never carry negative hours.
pub fn format_duration(hours: f64) -> String {
    let mut h = hours.floor() as u64;
    let mut m = ((hours - hours.floor()) * 60.0).round() as u64;

    if m == 60 {
        h += 1;
        m = 0;
    }

    if h == 0 {
        return format!("{} min", m);
    }
    if m == 0 {
        return format!("{} hr", h);
    }
    format!("{} hr {} min", h, m)
}

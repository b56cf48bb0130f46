/// Formats whole months as `"N yr(s) M mo(s)"`, omitting zero segments.
///
/// Zero months formats as an empty string; substituting a placeholder is
/// left to whoever displays it.
pub fn format_duration(months: u64) -> String {
    let years = months / 12;
    let remainder = months % 12;

    let mut segments = Vec::with_capacity(2);
    if years > 0 {
        segments.push(format!("{} yr{}", years, plural(years)));
    }
    if remainder > 0 {
        segments.push(format!("{} mo{}", remainder, plural(remainder)));
    }
    segments.join(" ")
}

fn plural(n: u64) -> &'static str {
    if n > 1 { "s" } else { "" }
}

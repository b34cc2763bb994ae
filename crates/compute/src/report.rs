use std::io::{self, Write};

pub const REPORT_HEADER: &str = "****** Grade Statistics ******";
pub const REPORT_FOOTER: &str = "****** END ******";

/// Deviation precision, in decimal places.
const SD_DECIMALS: usize = 3;

/// Four-line grade statistics report, each line newline-terminated.
pub fn format_report(mean: f64, sd: f64) -> String {
    format!(
        "{REPORT_HEADER}\n\
         The grades's mean is: {}\n\
         The population standard deviation of grades is:  {}\n\
         {REPORT_FOOTER}\n",
        render_number(mean),
        render_number(round_to(sd, SD_DECIMALS)),
    )
}

pub fn write_report<W: Write>(w: &mut W, mean: f64, sd: f64) -> io::Result<()> {
    w.write_all(format_report(mean, sd).as_bytes())
}

pub fn print_report(mean: f64, sd: f64) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, mean, sd)?;
    lock.flush()
}

/// Correctly rounded from the exact binary value, so `1.0005` (stored just
/// below the tie) rounds down and huge values pass through unchanged.
fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Shortest round-trip form. Integral values keep a trailing `.0`; outside
/// `[1e-4, 1e16)` the exponent is signed and at least two digits (`1e-05`,
/// `1e+16`). NaN renders as `nan`.
fn render_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let shortest = format!("{value:?}");
    if let Some((mantissa, exp)) = shortest.split_once('e') {
        let (sign, digits) = match exp.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exp),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }
    shortest
}

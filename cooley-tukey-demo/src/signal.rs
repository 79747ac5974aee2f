use cooley_tukey::Complex64;
use std::io::{self, Write};

/// Rounds `n` to `precision` decimal places.
pub fn round(n: f64, precision: i32) -> f64 {
    (n * 10.0_f64.powi(precision)).round() / 10.0_f64.powi(precision)
}

/// Two complex tones, at 5 and 12.5 cycles per signal, with amplitudes 1 and 0.5.
///
/// Both parts of every sample are rounded to `precision` decimal places.
pub fn two_tones(len: usize, precision: i32) -> Vec<Complex64> {
    (0..len)
        .map(|i| {
            let theta = i as f64 / len as f64 * std::f64::consts::PI;
            let re = 1.0 * (10.0 * theta).cos() + 0.5 * (25.0 * theta).cos();
            let im = 1.0 * (10.0 * theta).sin() + 0.5 * (25.0 * theta).sin();
            Complex64::new(round(re, precision), round(im, precision))
        })
        .collect()
}

/// Writes one `re,im` line per coefficient, rounded to `precision` decimal places.
pub fn write_spectrum<W: Write>(
    mut out: W,
    spectrum: &[Complex64],
    precision: u8,
) -> io::Result<()> {
    let p = i32::from(precision);
    for datum in spectrum {
        writeln!(
            out,
            "{:.p$},{:.p$}",
            round(datum.re, p),
            round(datum.im, p),
            p = usize::from(precision),
        )?;
    }
    out.flush()
}

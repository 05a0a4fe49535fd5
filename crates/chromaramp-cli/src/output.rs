//! Plain-text rendering of color reports.

use std::fmt::Write;

use chromaramp_core::ColorReport;

/// Render one report as an aligned block of text.
///
/// The base color's row in the shade list is marked with `*`.
pub fn render_text(report: &ColorReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", report.hex);
    let _ = writeln!(out, "  rgb            {}", report.rgb_css);
    let _ = writeln!(out, "  hsl            {}", report.hsl_css);
    let _ = writeln!(out, "  complementary  {}", report.complementary);
    let _ = writeln!(out, "  contrast       {}", report.contrast);
    let _ = writeln!(out, "  shades");

    for entry in &report.shades {
        let marker = if entry.hex == report.hex { '*' } else { ' ' };
        let _ = writeln!(out, "   {} {}  {}", marker, entry.hex, entry.hsl);
    }

    out
}

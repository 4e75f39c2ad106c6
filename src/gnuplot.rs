//! Helpers for the gnuplot command syntax: number formatting, dataset
//! serialization, terminal/output directives and the synchronous
//! invocation of the `gnuplot` binary.

use std::fmt::Write as _;
use std::process::Command;

use crate::Error;

/// Canonical decimal serializer used for every number written to a
/// script or data file.  Relies on Rust's shortest round-trip float
/// formatting, so `1.0` renders as `1` and `0.9` as `0.9`.
pub(crate) fn num(v: f64) -> String {
    format!("{}", v)
}

/// Render `set <something> <value>` followed by a newline, or nothing
/// at all when the value is empty.
pub(crate) fn command_value_str(cmd: &str, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{} {}\n", cmd, value)
    }
}

pub(crate) fn banner(out: &mut String, title: &str) {
    let rule = "#==============================================================================";
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "# {}", title);
    let _ = writeln!(out, "{}", rule);
}

/// Append the columns of one `draw` call as an indexable gnuplot
/// dataset.  Rows are emitted up to the longest column; shorter columns
/// simply stop contributing values, so ragged input degrades to ragged
/// rows instead of a panic.  The double blank line at the end is what
/// makes gnuplot treat the next block as a distinct `index`.
pub(crate) fn write_dataset(out: &mut String, index: usize, columns: &[&[f64]]) {
    banner(out, &format!("DATASET #{}", index));
    let rows = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    for r in 0..rows {
        let mut first = true;
        for col in columns {
            if let Some(v) = col.get(r) {
                if !first {
                    out.push(' ');
                }
                out.push_str(&num(*v));
                first = false;
            }
        }
        out.push('\n');
    }
    out.push('\n');
    out.push('\n');
}

/// Append the palette selection block for the named palette (falling
/// back to the default table for unknown names).
pub(crate) fn palette_cmd(out: &mut String, name: &str) {
    banner(out, &format!("GNUPLOT-palette ({})", name));
    out.push_str(crate::palettes::lookup(name));
    out.push('\n');
}

/// Format a terminal size, either in pixels or (for pdf) in inches at
/// 72 points per inch.
pub(crate) fn size_str(width: usize, height: usize, as_inches: bool) -> String {
    if as_inches {
        format!(
            "{}in,{}in",
            num(width as f64 / 72.0),
            num(height as f64 / 72.0)
        )
    } else {
        format!("{},{}", width, height)
    }
}

/// Append the interactive terminal directive used by `show`.
pub(crate) fn show_terminal_cmd(out: &mut String, size: &str) {
    banner(out, "TERMINAL COMMANDS");
    let _ = writeln!(out, "set terminal qt size {} enhanced font 'Georgia,10'", size);
}

/// Map a file extension to the gnuplot terminal that writes it.
/// Unrecognized extensions are handed to gnuplot verbatim.
fn terminal_name(extension: &str) -> &str {
    match extension {
        "pdf" => "pdfcairo",
        "png" => "pngcairo",
        "jpg" | "jpeg" => "jpeg",
        "svg" => "svg",
        "eps" => "epscairo",
        other => other,
    }
}

/// Append the batch terminal directive used by `save`.
pub(crate) fn save_terminal_cmd(out: &mut String, extension: &str, size: &str) {
    banner(out, "TERMINAL COMMANDS");
    let _ = writeln!(
        out,
        "set terminal {} size {} enhanced font 'Georgia,12'",
        terminal_name(extension),
        size
    );
}

/// Append the output redirection for `save`.
pub(crate) fn output_cmd(out: &mut String, filename: &str) {
    let _ = writeln!(out, "set output '{}'", filename);
}

/// Extension of a save path, used to select the terminal.  A name
/// without a dot is returned whole, so gnuplot sees it verbatim as a
/// terminal selector and reports the error itself.
pub(crate) fn extension_of(path: &str) -> &str {
    match path.rfind('.') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Strip characters that cannot appear inside a gnuplot single-quoted
/// string (or that shells mangle when gnuplot hands the name on):
/// quotes, backticks, `<`, `>`, `|`, `*`, `?` and control characters.
pub(crate) fn clean_path(path: &str) -> String {
    path.chars()
        .filter(|c| !matches!(c, '\'' | '"' | '`' | '<' | '>' | '|' | '*' | '?') && !c.is_control())
        .collect()
}

/// Run gnuplot on the given script, blocking until it exits.  With
/// `persist` the plot window outlives the process.  A missing binary is
/// reported as [`Error::NoGnuplot`]; a non-zero exit status is ignored
/// since gnuplot prints its diagnostics on stderr itself.
pub(crate) fn run_script(scriptfilename: &str, persist: bool) -> Result<(), Error> {
    let mut cmd = Command::new("gnuplot");
    if persist {
        cmd.arg("-persist");
    }
    cmd.arg(scriptfilename);
    match cmd.status() {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::NoGnuplot),
        Err(e) => Err(Error::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_is_shortest_roundtrip() {
        assert_eq!(num(1.0), "1");
        assert_eq!(num(0.9), "0.9");
        assert_eq!(num(-2.5), "-2.5");
    }

    #[test]
    fn command_value_skips_empty() {
        assert_eq!(command_value_str("set xrange", ""), "");
        assert_eq!(command_value_str("set xrange", "[0:1]"), "set xrange [0:1]\n");
    }

    #[test]
    fn dataset_blocks_are_indexed_and_separated() {
        let mut out = String::new();
        write_dataset(&mut out, 3, &[&[1.0, 2.0], &[10.0, 20.0]]);
        assert!(out.contains("# DATASET #3"));
        assert!(out.contains("1 10\n2 20\n"));
        assert!(out.ends_with("\n\n\n"));
    }

    #[test]
    fn ragged_columns_do_not_panic() {
        let mut out = String::new();
        write_dataset(&mut out, 0, &[&[1.0, 2.0, 3.0], &[10.0]]);
        assert!(out.contains("1 10\n2\n3\n"));
    }

    #[test]
    fn sizes_in_pixels_and_inches() {
        assert_eq!(size_str(640, 480, false), "640,480");
        assert_eq!(size_str(72, 144, true), "1in,2in");
    }

    #[test]
    fn terminal_mapping() {
        assert_eq!(terminal_name("pdf"), "pdfcairo");
        assert_eq!(terminal_name("png"), "pngcairo");
        assert_eq!(terminal_name("jpeg"), "jpeg");
        assert_eq!(terminal_name("tikz"), "tikz");
    }

    #[test]
    fn extension_selects_the_terminal() {
        assert_eq!(extension_of("out.png"), "png");
        assert_eq!(extension_of("dir/archive.tar.gz"), "gz");
        // A dot-less name reaches gnuplot whole as the terminal
        // selector.
        assert_eq!(extension_of("noext"), "noext");
    }

    #[test]
    fn launch_failure_is_the_only_runner_error() {
        // The script does not exist; an installed gnuplot complains on
        // stderr and exits non-zero, which is not an error here.  Only
        // a missing binary is.
        match run_script("no_such_script.plt", false) {
            Ok(()) => {}
            Err(Error::NoGnuplot) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn clean_path_strips_unsafe_characters() {
        assert_eq!(clean_path("out.png"), "out.png");
        assert_eq!(clean_path("a'b\"c`d<e>f|g*h?i.png"), "abcdefghi.png");
        assert_eq!(clean_path("dir/sub dir/plot.pdf"), "dir/sub dir/plot.pdf");
        assert_eq!(clean_path("bad\nname.svg"), "badname.svg");
    }
}

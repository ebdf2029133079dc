use std::io::{self, BufRead, Write};

use crate::{evaluate_line, format_result};

/// Counts of how a run over an input went.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Lines that produced a result.
    pub evaluated: usize,
    /// Lines that failed and were skipped.
    pub skipped:   usize,
}

/// Evaluates every line of `input`, writing one formatted result per
/// successful line to `output`.
///
/// Lines are independent: a line that is not valid UTF-8, or that fails to
/// tokenize, convert or evaluate, is logged as a warning with its 1-based
/// line number and produces no output line. Results keep the order of their
/// input lines.
///
/// # Errors
/// Returns an error only if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// use shunt::driver::run;
///
/// let input = "3 + 4 * 2\n1 / 0\n(2 + 3) * 4\n";
/// let mut output = Vec::new();
///
/// let summary = run(input.as_bytes(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(), "11.00\n20.00\n");
/// assert_eq!(summary.evaluated, 2);
/// assert_eq!(summary.skipped, 1);
/// ```
pub fn run<R, W>(input: R, output: &mut W) -> io::Result<Summary>
    where R: BufRead,
          W: Write
{
    let mut summary = Summary::default();

    for (index, raw) in input.split(b'\n').enumerate() {
        let mut raw = raw?;
        let number = index + 1;
        let _span = tracing::debug_span!("line", number).entered();

        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let Ok(line) = String::from_utf8(raw) else {
            tracing::warn!(line = number, "Line is not valid UTF-8. Skipping.");
            summary.skipped += 1;
            continue;
        };

        match evaluate_line(&line) {
            Ok(value) => {
                writeln!(output, "{}", format_result(value))?;
                summary.evaluated += 1;
            },
            Err(e) => {
                tracing::warn!(line = number, expression = %line.trim(), "{e} Skipping.");
                summary.skipped += 1;
            },
        }
    }

    output.flush()?;
    tracing::info!(evaluated = summary.evaluated, skipped = summary.skipped, "finished");

    Ok(summary)
}

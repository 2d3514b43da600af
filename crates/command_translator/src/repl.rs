//! Interactive read-translate-print loop

use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::Result;
use crate::model::CompletionBackend;
use crate::translator::CommandTranslator;

/// Word that ends the loop, compared case-insensitively
pub const EXIT_SENTINEL: &str = "exit";

/// Prompt shown before each line of input
pub const INPUT_PROMPT: &str = "\nYou > ";

/// How the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The exit sentinel was entered
    Sentinel,
    /// Input was exhausted
    EndOfInput,
}

/// Summary of one interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    /// Number of requests sent to the translator
    pub requests: usize,
    pub exit: LoopExit,
}

/// Whether `line` is the exit sentinel
///
/// The whole line is lower-cased and compared; surrounding whitespace is not trimmed.
pub fn is_exit_sentinel(line: &str) -> bool {
    line.to_lowercase() == EXIT_SENTINEL
}

/// Strip the line terminator left by `read_line`
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Print the welcome banner
pub fn print_banner<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "  Natural Language to Command Interface")?;
    writeln!(
        output,
        "   Enter a command like 'turn off the kitchen lights' or 'exit' to quit."
    )?;
    Ok(())
}

/// Run the interactive loop until the exit sentinel or end of input
///
/// Every other line, including an empty one, is translated and the result
/// printed under a `JSON Command:` label. Each request completes before the
/// next prompt is shown.
pub async fn run_interactive<B, R, W>(
    translator: &CommandTranslator<B>,
    mut input: R,
    output: &mut W,
) -> Result<LoopSummary>
where
    B: CompletionBackend,
    R: BufRead,
    W: Write,
{
    print_banner(output)?;

    let mut requests = 0;

    loop {
        write!(output, "{}", INPUT_PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, " Goodbye!")?;
            debug!("Input closed after {} request(s)", requests);
            return Ok(LoopSummary {
                requests,
                exit: LoopExit::EndOfInput,
            });
        }

        let user_query = strip_line_ending(&line);

        if is_exit_sentinel(user_query) {
            writeln!(output, " Goodbye!")?;
            return Ok(LoopSummary {
                requests,
                exit: LoopExit::Sentinel,
            });
        }

        let structured_command = translator.translate(user_query).await;
        requests += 1;

        writeln!(output, "  JSON Command:\n{}", structured_command)?;
    }
}

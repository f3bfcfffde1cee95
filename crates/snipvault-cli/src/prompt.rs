use std::io::{BufRead, Write};

/// Ask a yes/no question on stdout and read the answer from stdin.
/// Anything other than `y`/`yes` is a no.
pub fn confirm(question: &str) -> std::io::Result<bool> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    confirm_with(question, &mut stdin.lock(), &mut stdout)
}

pub fn confirm_with(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

//! Math typesetting: the renderer trait and the literal fallback on failure.

mod symbols;
mod unicode;

pub use unicode::UnicodeMath;

/// Inline (`$...$`) or display (`$$...$$`) math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathMode {
    Inline,
    Display,
}

/// Why an expression could not be typeset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    #[error("empty expression")]
    Empty,
    #[error("unbalanced braces")]
    UnbalancedBraces,
    #[error("unknown command \\{0}")]
    UnknownCommand(String),
    #[error("missing argument for \\{0}")]
    MissingArgument(String),
    #[error("'{0}' without an argument")]
    DanglingScript(char),
    #[error("nested deeper than {0} levels")]
    TooDeep(usize),
}

/// Turns one math expression into display text, or fails.
pub trait MathRenderer {
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, MathError>;
}

/// Shows the expression as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawMath;

impl MathRenderer for RawMath {
    fn render(&self, expression: &str, _mode: MathMode) -> Result<String, MathError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(MathError::Empty);
        }
        Ok(expression.to_string())
    }
}

/// Result of a typesetting attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Typeset {
    Rendered(String),
    /// The delimited source as written (`$ x $` / `$$x$$`), to be shown as code.
    Fallback(String),
}

/// Always attempt rendering; on failure return `source`, the delimited text
/// the expression was parsed from, instead of dropping content or surfacing
/// the error.
pub fn typeset<R>(renderer: &R, expression: &str, source: &str, mode: MathMode) -> Typeset
where
    R: MathRenderer + ?Sized,
{
    match renderer.render(expression, mode) {
        Ok(out) => Typeset::Rendered(out),
        Err(e) => {
            log::debug!("math fallback for {:?}: {}", source, e);
            Typeset::Fallback(source.to_string())
        }
    }
}

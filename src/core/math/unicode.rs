//! LaTeX subset to Unicode text: symbols, scripts, fractions, roots.

use super::{MathError, MathMode, MathRenderer, symbols};

/// Typesets common LaTeX math as plain Unicode, suitable for a terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeMath;

impl MathRenderer for UnicodeMath {
    fn render(&self, expression: &str, _mode: MathMode) -> Result<String, MathError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(MathError::Empty);
        }
        check_braces(expression)?;
        let out = Parser::new(expression).sequence(false)?;
        Ok(out.trim().to_string())
    }
}

/// Unescaped `{` and `}` must pair up.
fn check_braces(expr: &str) -> Result<(), MathError> {
    let mut depth: usize = 0;
    let mut chars = expr.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => depth = depth.checked_sub(1).ok_or(MathError::UnbalancedBraces)?,
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(MathError::UnbalancedBraces)
    }
}

/// Deepest allowed nesting of groups and command arguments.
const MAX_DEPTH: usize = 64;

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn new(expr: &str) -> Self {
        Self {
            chars: expr.chars().collect(),
            pos: 0,
            depth: 0,
        }
    }

    /// Run `f` one nesting level deeper, failing past `MAX_DEPTH`.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, MathError>,
    ) -> Result<T, MathError> {
        if self.depth >= MAX_DEPTH {
            return Err(MathError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Typeset until the end of input, or until the `}` closing the current group.
    fn sequence(&mut self, in_group: bool) -> Result<String, MathError> {
        let mut out = String::new();
        while let Some(c) = self.bump() {
            match c {
                '}' if in_group => return Ok(out),
                '}' => return Err(MathError::UnbalancedBraces),
                '{' => out.push_str(&self.nested(|p| p.sequence(true))?),
                '\\' => out.push_str(&self.nested(Self::command)?),
                '^' | '_' => {
                    let arg = self.argument()?.ok_or(MathError::DanglingScript(c))?;
                    out.push_str(&script(&arg, c == '^'));
                }
                '\'' => out.push('′'),
                _ => out.push(c),
            }
        }
        if in_group {
            Err(MathError::UnbalancedBraces)
        } else {
            Ok(out)
        }
    }

    /// One argument: a `{group}`, a command, or a single character.
    fn argument(&mut self) -> Result<Option<String>, MathError> {
        self.skip_spaces();
        match self.peek() {
            None | Some('}') => Ok(None),
            Some('{') => {
                self.pos += 1;
                self.nested(|p| p.sequence(true)).map(Some)
            }
            Some('\\') => {
                self.pos += 1;
                self.nested(Self::command).map(Some)
            }
            Some(_) => Ok(self.bump().map(String::from)),
        }
    }

    fn required(&mut self, command: &str) -> Result<String, MathError> {
        self.argument()?
            .ok_or_else(|| MathError::MissingArgument(command.to_string()))
    }

    /// Verbatim contents of a `{...}` group (for `\text` and friends).
    fn raw_group(&mut self, command: &str) -> Result<String, MathError> {
        self.skip_spaces();
        if self.peek() != Some('{') {
            return Err(MathError::MissingArgument(command.to_string()));
        }
        self.pos += 1;
        let mut depth = 0usize;
        let mut out = String::new();
        while let Some(c) = self.bump() {
            match c {
                '}' if depth == 0 => return Ok(out),
                '}' => depth -= 1,
                '{' => depth += 1,
                _ => {}
            }
            out.push(c);
        }
        Err(MathError::UnbalancedBraces)
    }

    /// Optional `[...]` argument, typeset (the index of `\sqrt[3]{x}`).
    fn optional(&mut self, command: &str) -> Result<Option<String>, MathError> {
        self.skip_spaces();
        if self.peek() != Some('[') {
            return Ok(None);
        }
        self.pos += 1;
        let mut raw = String::new();
        loop {
            match self.bump() {
                Some(']') => break,
                Some(c) => raw.push(c),
                None => return Err(MathError::MissingArgument(command.to_string())),
            }
        }
        let mut index = Parser::new(&raw);
        index.depth = self.depth;
        index.nested(|p| p.sequence(false)).map(Some)
    }

    /// A letter run (`\alpha`) or a single non-letter (`\,`, `\{`).
    fn command_name(&mut self) -> String {
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() => {
                let start = self.pos;
                while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                    self.pos += 1;
                }
                self.chars[start..self.pos].iter().collect()
            }
            Some(c) => {
                self.pos += 1;
                c.to_string()
            }
            None => String::new(),
        }
    }

    /// Typeset the command following a backslash.
    fn command(&mut self) -> Result<String, MathError> {
        let name = self.command_name();
        match name.as_str() {
            "," | ":" | ";" | " " | "\\" => Ok(" ".to_string()),
            "!" | "displaystyle" | "textstyle" | "limits" | "nolimits" => Ok(String::new()),
            "quad" => Ok("  ".to_string()),
            "qquad" => Ok("    ".to_string()),
            "{" | "}" | "$" | "%" | "&" | "#" | "_" | "|" => Ok(name.clone()),
            "frac" | "dfrac" | "tfrac" => {
                let num = self.required(&name)?;
                let den = self.required(&name)?;
                Ok(fraction(&num, &den))
            }
            "sqrt" => {
                let index = self.optional(&name)?;
                let radicand = self.required(&name)?;
                Ok(root(index.as_deref(), &radicand))
            }
            "text" | "textrm" | "textit" | "textbf" | "mathrm" | "operatorname" => {
                self.raw_group(&name)
            }
            "mathbf" | "mathit" | "mathsf" | "mathtt" | "mathcal" | "boldsymbol" => {
                self.required(&name)
            }
            "mathbb" => Ok(self.required(&name)?.chars().map(double_struck).collect()),
            "left" | "right" | "big" | "Big" | "bigg" | "Bigg" | "bigl" | "bigr" | "Bigl"
            | "Bigr" => {
                self.skip_spaces();
                if self.peek() == Some('.') {
                    self.pos += 1;
                }
                Ok(String::new())
            }
            "vec" | "hat" | "bar" | "overline" | "dot" | "ddot" | "tilde" => {
                let arg = self.required(&name)?;
                Ok(format!("{}{}", arg, accent_mark(&name)))
            }
            "" => Err(MathError::UnknownCommand(name.clone())),
            _ => symbols::lookup(&name)
                .map(str::to_string)
                .ok_or_else(|| MathError::UnknownCommand(name.clone())),
        }
    }
}

/// Unicode scripts when every character has one, else `^x` / `^(...)`.
fn script(arg: &str, superscript: bool) -> String {
    let map = if superscript {
        superscript_char
    } else {
        subscript_char
    };
    if let Some(mapped) = arg.chars().map(map).collect::<Option<String>>() {
        return mapped;
    }
    let mark = if superscript { '^' } else { '_' };
    if arg.chars().count() == 1 {
        format!("{mark}{arg}")
    } else {
        format!("{mark}({arg})")
    }
}

fn fraction(num: &str, den: &str) -> String {
    let vulgar = match (num, den) {
        ("1", "2") => Some("½"),
        ("1", "3") => Some("⅓"),
        ("2", "3") => Some("⅔"),
        ("1", "4") => Some("¼"),
        ("3", "4") => Some("¾"),
        _ => None,
    };
    match vulgar {
        Some(v) => v.to_string(),
        None => format!("{}/{}", operand(num), operand(den)),
    }
}

fn root(index: Option<&str>, radicand: &str) -> String {
    let sign = match index {
        None | Some("2") => "√".to_string(),
        Some("3") => "∛".to_string(),
        Some("4") => "∜".to_string(),
        Some(n) => format!("{}√", script(n, true)),
    };
    format!("{}{}", sign, operand(radicand))
}

/// Parenthesize compound operands: `x+1` -> `(x+1)`, but not `12` or `ab`.
fn operand(s: &str) -> String {
    if s.chars().count() > 1 && !s.chars().all(char::is_alphanumeric) {
        format!("({s})")
    } else {
        s.to_string()
    }
}

fn accent_mark(command: &str) -> char {
    match command {
        "vec" => '\u{20D7}',
        "hat" => '\u{0302}',
        "dot" => '\u{0307}',
        "ddot" => '\u{0308}',
        "tilde" => '\u{0303}',
        _ => '\u{0305}',
    }
}

fn double_struck(c: char) -> char {
    match c {
        'C' => 'ℂ',
        'H' => 'ℍ',
        'N' => 'ℕ',
        'P' => 'ℙ',
        'Q' => 'ℚ',
        'R' => 'ℝ',
        'Z' => 'ℤ',
        other => other,
    }
}

fn superscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' | '−' => '⁻',
        '=' => '⁼',
        '(' => '⁽',
        ')' => '⁾',
        'a' => 'ᵃ',
        'b' => 'ᵇ',
        'c' => 'ᶜ',
        'd' => 'ᵈ',
        'e' => 'ᵉ',
        'f' => 'ᶠ',
        'g' => 'ᵍ',
        'h' => 'ʰ',
        'i' => 'ⁱ',
        'j' => 'ʲ',
        'k' => 'ᵏ',
        'l' => 'ˡ',
        'm' => 'ᵐ',
        'n' => 'ⁿ',
        'o' => 'ᵒ',
        'p' => 'ᵖ',
        'r' => 'ʳ',
        's' => 'ˢ',
        't' => 'ᵗ',
        'u' => 'ᵘ',
        'v' => 'ᵛ',
        'w' => 'ʷ',
        'x' => 'ˣ',
        'y' => 'ʸ',
        'z' => 'ᶻ',
        'T' => 'ᵀ',
        '′' => '′',
        _ => return None,
    })
}

fn subscript_char(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' | '−' => '₋',
        '=' => '₌',
        '(' => '₍',
        ')' => '₎',
        'a' => 'ₐ',
        'e' => 'ₑ',
        'h' => 'ₕ',
        'i' => 'ᵢ',
        'j' => 'ⱼ',
        'k' => 'ₖ',
        'l' => 'ₗ',
        'm' => 'ₘ',
        'n' => 'ₙ',
        'o' => 'ₒ',
        'p' => 'ₚ',
        'r' => 'ᵣ',
        's' => 'ₛ',
        't' => 'ₜ',
        'u' => 'ᵤ',
        'v' => 'ᵥ',
        'x' => 'ₓ',
        _ => return None,
    })
}

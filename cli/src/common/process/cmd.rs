//! The `Cmd` value handed to the launcher.

use std::fmt;

/// An external program and its ordered arguments.
///
/// Launch functions take a `Cmd` by value. Build a new one (or `clone()`
/// explicitly) to run the same command again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cmd {
    program: String,
    args: Vec<String>,
}

impl Cmd {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several arguments in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub(crate) fn into_parts(self) -> (String, Vec<String>) {
        (self.program, self.args)
    }
}

impl fmt::Display for Cmd {
    /// Renders the command line for log and error messages. Words containing
    /// whitespace (or empty words) are single-quoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in std::iter::once(&self.program).chain(&self.args) {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                write!(f, "'{}'", word)?;
            } else {
                f.write_str(word)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let cmd = Cmd::new("curl")
            .args(["--silent", "--fail"])
            .arg("https://xkcd.com/353/info.0.json");
        assert_eq!(cmd.program(), "curl");
        assert_eq!(
            cmd.get_args(),
            ["--silent", "--fail", "https://xkcd.com/353/info.0.json"]
        );
    }

    #[test]
    fn test_display_quotes_whitespace() {
        let cmd = Cmd::new("sh").args(["-c", "echo hi", ""]);
        assert_eq!(cmd.to_string(), "sh -c 'echo hi' ''");
        assert_eq!(Cmd::new("true").to_string(), "true");
    }
}

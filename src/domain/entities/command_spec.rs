//! External command description
//!
//! A program, its arguments, extra environment and working directory.
//! Nothing here spawns anything; see `ports::ProcessRunner`.

use std::fmt;
use std::path::PathBuf;

/// A fully resolved external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Variables added on top of the inherited environment
    pub env: Vec<(String, String)>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
            cwd: PathBuf::from("."),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Render as a copy-pasteable shell line (`KEY='v' program args...`)
    pub fn render(&self) -> String {
        let env = self
            .env
            .iter()
            .map(|(key, value)| format!("{}={}", key, shell_quote(value)));
        let argv = std::iter::once(shell_quote(&self.program))
            .chain(self.args.iter().map(|arg| shell_quote(arg)));
        env.chain(argv).collect::<Vec<_>>().join(" ")
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "_-./:=@%+,".contains(c)
}

fn shell_quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(is_shell_safe) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_quotes_only_when_needed() {
        let cmd = CommandSpec::new("cargo")
            .args(["build", "--target", "wasm32-unknown-unknown", "--release"])
            .env("RUSTFLAGS", "-C link-arg=-s");

        insta::assert_snapshot!(
            cmd.render(),
            @"RUSTFLAGS='-C link-arg=-s' cargo build --target wasm32-unknown-unknown --release"
        );
    }

    #[test]
    fn render_escapes_single_quotes_and_empty_args() {
        let cmd = CommandSpec::new("near").arg("it's").arg("");
        assert_eq!(cmd.render(), r"near 'it'\''s' ''");
    }

    #[test]
    fn json_args_are_quoted() {
        let cmd = CommandSpec::new("near").arg(r#"{"owner_id":"a.testnet"}"#);
        assert_eq!(cmd.to_string(), r#"near '{"owner_id":"a.testnet"}'"#);
    }

    #[test]
    fn default_cwd_is_current_dir() {
        assert_eq!(CommandSpec::new("cargo").cwd, PathBuf::from("."));
    }
}

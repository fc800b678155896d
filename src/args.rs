//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;

use crate::set::Policy;

/// Returns the parsed command line: the `Args` return value's `op` field is the set operation
/// desired, and the `files` field holds the files to take as operands.
#[must_use]
pub fn parsed() -> Args {
    let cli = CliArgs::parse().checked().unwrap_or_else(|e| e.exit());
    Args::from(cli)
}

/// Like `parsed`, but parses `args` (whose first item is the program name)
/// rather than the process's own arguments.
pub fn parsed_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(args).and_then(CliArgs::checked).map(Args::from)
}

/// The parsed command line
#[derive(Debug)]
pub struct Args {
    /// `op` is the set operation requested
    pub op: OpName,
    /// `files` is the list of files from the command line
    pub files: Vec<PathBuf>,
    /// Which lines `OpName::Filter` keeps
    pub selection: Selection,
    /// Where to save the result, instead of printing it
    pub output: Option<PathBuf>,
    /// Print the result's textual rendering rather than one element per line
    pub render: bool,
    /// How to treat a line repeated within one file
    pub policy: Policy,
}

/// The set operation to perform on the operands
#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
pub enum OpName {
    /// Print the lines present in any file
    Union,
    /// Print the lines of the first file present in every other file
    Intersect,
    /// Print the lines present in any file that pass the --keep and --containing tests
    Filter,
}

/// The tests a line must pass to be kept by `OpName::Filter`. A line must pass
/// both; an absent test passes every line.
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Selection {
    /// The kind of line to keep
    pub keep: Option<Keep>,
    /// Text the line must contain
    pub containing: Option<String>,
}

/// Kinds of line `OpName::Filter` can keep
#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
pub enum Keep {
    /// Lines that are even integers
    Even,
    /// Lines that are odd integers
    Odd,
    /// Lines that are integers
    Numeric,
    /// Lines with something other than whitespace
    Nonblank,
}

#[derive(Debug, Parser)]
#[command(name = "vset", version)]
/// Treat each file as a set of lines, combine the sets, and print the result
struct CliArgs {
    #[arg(value_enum)]
    /// The set operation to perform
    op: OpName,
    #[arg(value_name = "FILE")]
    /// The files to take as operands
    files: Vec<PathBuf>,
    #[arg(long, value_enum, value_name = "KIND")]
    /// For `filter`: keep only lines of this kind
    keep: Option<Keep>,
    #[arg(long, value_name = "TEXT")]
    /// For `filter`: keep only lines containing TEXT
    containing: Option<String>,
    #[arg(short, long, value_name = "PATH")]
    /// Save the result to PATH instead of printing it
    output: Option<PathBuf>,
    #[arg(long, conflicts_with = "output")]
    /// Print the number of lines, then each line in parentheses
    render: bool,
    #[arg(long)]
    /// Fail if a line occurs twice in the same file
    strict: bool,
}

impl CliArgs {
    // The line selection options mean nothing to the other operations
    fn checked(self) -> Result<Self, clap::Error> {
        if self.op != OpName::Filter && (self.keep.is_some() || self.containing.is_some()) {
            return Err(CliArgs::command().error(
                ErrorKind::ArgumentConflict,
                "--keep and --containing can only be used with `filter`",
            ));
        }
        Ok(self)
    }
}

impl From<CliArgs> for Args {
    fn from(cli: CliArgs) -> Self {
        Args {
            op: cli.op,
            files: cli.files,
            selection: Selection { keep: cli.keep, containing: cli.containing },
            output: cli.output,
            render: cli.render,
            policy: if cli.strict { Policy::Strict } else { Policy::Lenient },
        }
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn operation_and_files_are_positional() {
        let args = parsed_from(["vset", "intersect", "a.txt", "b.txt"]).unwrap();
        assert_eq!(args.op, OpName::Intersect);
        assert_eq!(args.files, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.selection, Selection::default());
        assert_eq!(args.policy, Policy::Lenient);
        assert_eq!(args.output, None);
        assert!(!args.render);
    }

    #[test]
    fn filter_options_become_a_selection() {
        let args =
            parsed_from(["vset", "filter", "--keep", "odd", "--containing", "7", "x"]).unwrap();
        assert_eq!(args.op, OpName::Filter);
        assert_eq!(
            args.selection,
            Selection { keep: Some(Keep::Odd), containing: Some("7".to_string()) }
        );
    }

    #[test]
    fn strict_and_output_flags() {
        let args = parsed_from(["vset", "union", "--strict", "-o", "out.txt", "x"]).unwrap();
        assert_eq!(args.policy, Policy::Strict);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn render_conflicts_with_output() {
        assert!(parsed_from(["vset", "union", "--render", "--output", "out.txt"]).is_err());
    }

    #[test]
    fn selection_options_need_the_filter_operation() {
        for op in ["union", "intersect"] {
            let e = parsed_from(["vset", op, "--keep", "even", "x"]).unwrap_err();
            assert_eq!(e.kind(), ErrorKind::ArgumentConflict, "for {op}");
            assert!(parsed_from(["vset", op, "--containing", "7", "x"]).is_err(), "for {op}");
        }
        assert!(parsed_from(["vset", "filter", "--keep", "even", "x"]).is_ok());
    }

    #[test]
    fn an_operation_is_required() {
        assert!(parsed_from(["vset"]).is_err());
        assert!(parsed_from(["vset", "difference", "x"]).is_err());
    }
}

//! Houses the `calculate` function, the kernel of the `vset` command
//!
use anyhow::Result;
use tracing::debug;

use crate::args::{Keep, OpName, Selection};
use crate::operations::{filter_out, intersection, is_even, is_odd, union};
use crate::set::Set;

/// Calculates the set operation named by `operation`. Each operand is a set of
/// lines:
///
/// * `OpName::Union` returns the lines that occur in any operand,
/// * `OpName::Intersect` returns the lines of the first operand that occur in
///   every operand, and
/// * `OpName::Filter` returns the lines that occur in any operand and are
///   chosen by `selection`.
///
/// Lines come out in the order of first occurrence. No operands at all gives
/// an empty set.
pub fn calculate(
    operation: OpName,
    operands: impl IntoIterator<Item = Result<Set<String>>>,
    selection: &Selection,
) -> Result<Set<String>> {
    let mut operands = operands.into_iter();
    let Some(first) = operands.next() else { return Ok(Set::new()) };
    let mut result = first?;
    let mut count = 1;
    for operand in operands {
        let operand = operand?;
        count += 1;
        result = match operation {
            OpName::Union | OpName::Filter => union(&result, &operand),
            OpName::Intersect => intersection(&result, &operand),
        };
    }
    if operation == OpName::Filter {
        result = filter_out(&result, |line| selection.matches(line));
    }
    debug!(?operation, operands = count, lines = result.len(), "calculated");
    Ok(result)
}

impl Selection {
    /// Does `line` pass both of the selection's tests?
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        let kind_ok = match self.keep {
            None => true,
            Some(Keep::Even) => integer(line).is_some_and(|n| is_even(&n)),
            Some(Keep::Odd) => integer(line).is_some_and(|n| is_odd(&n)),
            Some(Keep::Numeric) => integer(line).is_some(),
            Some(Keep::Nonblank) => !line.trim().is_empty(),
        };
        kind_ok && self.containing.as_deref().map_or(true, |text| line.contains(text))
    }
}

fn integer(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn lines(text: &str) -> Result<Set<String>> {
        Ok(text.lines().map(str::to_string).collect())
    }

    fn calc(operation: OpName, operands: &[&str], selection: &Selection) -> String {
        let result = calculate(operation, operands.iter().map(|o| lines(o)), selection).unwrap();
        result.iter().map(|line| format!("{line}\n")).collect()
    }

    fn keep(kind: Keep) -> Selection {
        Selection { keep: Some(kind), containing: None }
    }

    use self::OpName::*;

    #[test]
    fn given_a_single_argument_all_ops_return_its_lines_in_order_without_dups() {
        let arg = ["xxx\nabc\nxxx\nyyy\nxxx\nabc\n"];
        for op in [Union, Intersect, Filter] {
            assert_eq!(calc(op, &arg, &Selection::default()), "xxx\nabc\nyyy\n", "for {op:?}");
        }
    }

    #[test]
    fn results_for_each_operation() {
        let args = [
            "xyz\nabc\nxy\nxz\nx\n", // Strings containing "x" (and "abc")
            "xyz\nabc\nxy\nyz\ny\n", // Strings containing "y" (and "abc")
            "xyz\nabc\nxz\nyz\nz\n", // Strings containing "z" (and "abc")
        ];
        let none = Selection::default();
        assert_eq!(calc(Union, &args, &none), "xyz\nabc\nxy\nxz\nx\nyz\ny\nz\n");
        assert_eq!(calc(Intersect, &args, &none), "xyz\nabc\n");
        let with_z = Selection { keep: None, containing: Some("z".to_string()) };
        assert_eq!(calc(Filter, &args, &with_z), "xyz\nxz\nyz\nz\n");
    }

    #[test]
    fn filter_by_parity() {
        let args = ["1\n6\n4\n7\n10\n12\n9\n", "5\n7\n8\n"];
        assert_eq!(calc(Filter, &args, &keep(Keep::Even)), "6\n4\n10\n12\n8\n");
        assert_eq!(calc(Filter, &args, &keep(Keep::Odd)), "1\n7\n9\n5\n");
    }

    #[test]
    fn selections_combine_kind_and_text() {
        let selection = Selection { keep: Some(Keep::Numeric), containing: Some("1".to_string()) };
        assert!(selection.matches("10"));
        assert!(selection.matches(" -1 "));
        assert!(!selection.matches("2"));
        assert!(!selection.matches("1a"));
        assert!(keep(Keep::Nonblank).matches(" x "));
        assert!(!keep(Keep::Nonblank).matches(" \t "));
        assert!(!keep(Keep::Even).matches("four"));
        assert!(keep(Keep::Odd).matches("-3"));
    }

    #[test]
    fn no_operands_give_an_empty_set() {
        let result = calculate(Union, std::iter::empty(), &Selection::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn an_operand_error_is_passed_along() {
        let operands = vec![lines("a\n"), Err(anyhow::anyhow!("Can't read file: b"))];
        let e = calculate(Union, operands, &Selection::default()).unwrap_err();
        assert_eq!(e.to_string(), "Can't read file: b");
    }
}

//! Functions as values: rebinding, passing, returning and looking them up
//! by name.

use std::collections::BTreeMap;

use crate::error::{LabError, Result};

pub type MathFunction = fn(i64, i64) -> i64;
pub type StepFunction = fn(i64) -> i64;

pub fn add_two_ints(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

pub fn multiply_two_ints(a: i64, b: i64) -> i64 {
    a.saturating_mul(b)
}

/// Takes the operation as an argument.
pub fn math_result(math_function: MathFunction, a: i64, b: i64) -> String {
    format!("Result: {}", math_function(a, b))
}

/// Saturates at `i64::MAX`.
pub fn step_forward(input: i64) -> i64 {
    input.saturating_add(1)
}

/// Saturates at `i64::MIN`.
pub fn step_backward(input: i64) -> i64 {
    input.saturating_sub(1)
}

/// Returns the step function itself; nothing is applied yet.
pub fn choose_step_function(backwards: bool) -> StepFunction {
    if backwards { step_backward } else { step_forward }
}

/// Same contract as [`choose_step_function`], with the candidates nested
/// inside the chooser.
pub fn choose_nested_step_function(backwards: bool) -> StepFunction {
    fn step_forward(input: i64) -> i64 {
        input.saturating_add(1)
    }

    fn step_backward(input: i64) -> i64 {
        input.saturating_sub(1)
    }

    if backwards { step_backward } else { step_forward }
}

/// Largest distance from zero `count_to_zero` accepts.
pub const COUNTDOWN_LIMIT: u64 = 10_000;

/// Moves `start` to zero one step at a time, recording each value before
/// it is stepped. `|start|` must not exceed [`COUNTDOWN_LIMIT`].
pub fn count_to_zero(start: i64) -> Result<Vec<String>> {
    if start.unsigned_abs() > COUNTDOWN_LIMIT {
        return Err(LabError::InvalidArgument(format!(
            "countdown start {start} is more than {COUNTDOWN_LIMIT} steps from zero"
        )));
    }
    let mut current = start;
    let move_nearer_to_zero = choose_step_function(current > 0);
    let mut lines = Vec::new();
    while current != 0 {
        lines.push(format!("{current}..."));
        current = move_nearer_to_zero(current);
    }
    lines.push("Zero!".to_string());
    Ok(lines)
}

/// Named registry of binary operations.
#[derive(Debug, Clone, Default)]
pub struct OperationTable {
    operations: BTreeMap<String, MathFunction>,
}

impl OperationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `add` and `multiply`
    pub fn with_builtins() -> Self {
        let mut operations = BTreeMap::new();
        operations.insert("add".to_string(), add_two_ints as MathFunction);
        operations.insert("multiply".to_string(), multiply_two_ints as MathFunction);
        Self { operations }
    }

    /// Binds `name` to `function`, returning whatever was bound before.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        function: MathFunction,
    ) -> Result<Option<MathFunction>> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LabError::InvalidArgument(
                "operation name must not be blank".to_string(),
            ));
        }
        Ok(self.operations.insert(name, function))
    }

    pub fn get(&self, name: &str) -> Result<MathFunction> {
        self.operations
            .get(name)
            .copied()
            .ok_or_else(|| LabError::UnknownOperation(name.to_string()))
    }

    pub fn apply(&self, name: &str, a: i64, b: i64) -> Result<i64> {
        Ok(self.get(name)?(a, b))
    }

    /// `x -> outer(inner(x, a), b)`
    ///
    /// Both names are resolved now, so later rebinding does not affect the
    /// returned closure.
    pub fn compose(&self, inner: &str, a: i64, outer: &str, b: i64) -> Result<impl Fn(i64) -> i64 + use<>> {
        let inner = self.get(inner)?;
        let outer = self.get(outer)?;
        Ok(move |x| outer(inner(x, a), b))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebinding_math_function() {
        let mut math_function: MathFunction = add_two_ints;
        assert_eq!(math_function(2, 3), 5);
        math_function = multiply_two_ints;
        assert_eq!(math_function(2, 3), 6);
    }

    #[test]
    fn test_math_result() {
        assert_eq!(math_result(add_two_ints, 3, 5), "Result: 8");
    }

    #[test]
    fn test_choose_step_function() {
        assert_eq!(choose_step_function(true)(5), 4);
        assert_eq!(choose_step_function(false)(5), 6);
        assert_eq!(choose_nested_step_function(true)(-1), -2);
        assert_eq!(choose_nested_step_function(false)(-1), 0);
    }

    #[test]
    fn test_count_to_zero() {
        assert_eq!(count_to_zero(3).unwrap(), vec!["3...", "2...", "1...", "Zero!"]);
        assert_eq!(count_to_zero(-2).unwrap(), vec!["-2...", "-1...", "Zero!"]);
        assert_eq!(count_to_zero(0).unwrap(), vec!["Zero!"]);
    }

    #[test]
    fn test_count_to_zero_rejects_far_starts() {
        let limit = COUNTDOWN_LIMIT as i64;
        assert_eq!(count_to_zero(limit).unwrap().len(), COUNTDOWN_LIMIT as usize + 1);
        assert_eq!(count_to_zero(-limit).unwrap().len(), COUNTDOWN_LIMIT as usize + 1);

        for start in [limit + 1, -limit - 1, 10_000_000_000, i64::MAX, i64::MIN] {
            assert!(
                matches!(count_to_zero(start), Err(LabError::InvalidArgument(_))),
                "start {} should be rejected",
                start
            );
        }
    }

    #[test]
    fn test_steps_saturate_at_bounds() {
        assert_eq!(step_forward(i64::MAX), i64::MAX);
        assert_eq!(step_backward(i64::MIN), i64::MIN);
        assert_eq!(choose_step_function(false)(i64::MAX), i64::MAX);
        assert_eq!(choose_nested_step_function(true)(i64::MIN), i64::MIN);
        assert_eq!(add_two_ints(i64::MAX, 1), i64::MAX);
        assert_eq!(multiply_two_ints(i64::MIN, 2), i64::MIN);
    }

    #[test]
    fn test_operation_table() {
        let mut table = OperationTable::with_builtins();
        assert_eq!(table.apply("add", 2, 3), Ok(5));
        assert_eq!(table.apply("multiply", 2, 3), Ok(6));
        assert_eq!(
            table.apply("divide", 2, 3),
            Err(LabError::UnknownOperation("divide".to_string()))
        );

        let previous = table.register("add", multiply_two_ints).unwrap();
        assert!(previous.is_some());
        assert_eq!(table.apply("add", 2, 3), Ok(6));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["add", "multiply"]);
    }

    #[test]
    fn test_compose_resolves_eagerly() {
        let mut table = OperationTable::with_builtins();
        let add_then_double = table.compose("add", 1, "multiply", 2).unwrap();
        table.register("add", multiply_two_ints).unwrap();
        assert_eq!(add_then_double(4), 10);
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let mut table = OperationTable::new();
        assert!(matches!(
            table.register("  ", add_two_ints),
            Err(LabError::InvalidArgument(_))
        ));
        assert!(table.is_empty());
        assert!(matches!(table.register("sum", add_two_ints), Ok(None)));
        assert_eq!(table.len(), 1);
    }
}

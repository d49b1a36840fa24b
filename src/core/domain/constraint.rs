use std::collections::BTreeMap;

/// A single field rule: which field it guards, how to read it, and what it accepts.
pub struct Constraint<T> {
    pub field: &'static str,
    pub accessor: fn(&T) -> &str,
    pub predicate: fn(&str) -> bool,
    pub reason: fn(&'static str) -> String,
}

impl<T> Constraint<T> {
    pub const fn required(field: &'static str, accessor: fn(&T) -> &str) -> Self {
        Self {
            field,
            accessor,
            predicate: is_present,
            reason: required_reason,
        }
    }

    fn check(&self, value: &T) -> Option<String> {
        if (self.predicate)((self.accessor)(value)) {
            None
        } else {
            Some((self.reason)(self.field))
        }
    }
}

/// Field name to human readable reason, one entry per violated rule.
pub type Violations = BTreeMap<&'static str, String>;

/// Evaluates every rule and returns all violations; never stops at the first one.
pub fn validate_all<T>(value: &T, constraints: &[Constraint<T>]) -> Result<(), Violations> {
    let violations: Violations = constraints
        .iter()
        .filter_map(|constraint| {
            constraint
                .check(value)
                .map(|reason| (constraint.field, reason))
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn required_reason(field: &'static str) -> String {
    format!("field {} is a required field", field)
}

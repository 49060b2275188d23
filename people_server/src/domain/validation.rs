use serde_json::Value;

use crate::domain::entities::{NewPerson, PersonCandidate, Violation};

const NAME_MAX_LEN: usize = 50;
const AGE_MIN: i64 = 1;
const AGE_MAX: i64 = 199;

// One row of the create-person constraint table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: &'static str,
}

impl FieldRule {
    pub fn message(&self) -> String {
        format!("{} {}", self.field, self.constraint)
    }

    fn violation(&self) -> Violation {
        Violation {
            field: self.field,
            message: self.message(),
        }
    }
}

pub const NAME_RULE: FieldRule = FieldRule {
    field: "name",
    constraint: "must match '[a-zA-Z]{1,50}'",
};

pub const AGE_RULE: FieldRule = FieldRule {
    field: "age",
    constraint: "must be between 1 and 199",
};

// Declaration order is the order violations are reported in.
pub const RULES: [FieldRule; 2] = [NAME_RULE, AGE_RULE];

pub fn constraint_description(field: &str) -> Option<&'static str> {
    RULES
        .iter()
        .find(|rule| rule.field == field)
        .map(|rule| rule.constraint)
}

// Checks every rule without short-circuiting so a client sees all problems at once.
pub fn validate(candidate: &PersonCandidate) -> Result<NewPerson, Vec<Violation>> {
    let name = parse_name(candidate.name.as_ref()).ok_or_else(|| NAME_RULE.violation());
    let age = parse_age(candidate.age.as_ref()).ok_or_else(|| AGE_RULE.violation());

    match (name, age) {
        (Ok(name), Ok(age)) => Ok(NewPerson { name, age }),
        (name, age) => Err([name.err(), age.err()].into_iter().flatten().collect()),
    }
}

fn parse_name(value: Option<&Value>) -> Option<String> {
    let Some(Value::String(name)) = value else {
        return None;
    };

    let valid = (1..=NAME_MAX_LEN).contains(&name.len())
        && name.chars().all(|c| c.is_ascii_alphabetic());
    valid.then(|| name.clone())
}

// Integers, integral floats (`1.0`) and integer strings (`"1"`) are accepted;
// anything else fails the range rule.
fn parse_age(value: Option<&Value>) -> Option<u8> {
    let age = match value? {
        Value::Number(number) => match number.as_i64() {
            Some(age) => age,
            None => {
                let age = number.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)?;
                age as i64
            }
        },
        Value::String(text) => text.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    if !(AGE_MIN..=AGE_MAX).contains(&age) {
        return None;
    }
    u8::try_from(age).ok()
}

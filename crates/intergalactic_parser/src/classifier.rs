//! Line classification.
//!
//! A line is tested against a fixed, ordered table of rules. Each rule either
//! declines (`None`) or fully classifies the line, possibly as
//! [`Intent::Invalid`]. The first rule that does not decline wins; a line no
//! rule accepts is an invalid parse.
//!
//! Keywords are matched case-sensitively in lowercase. Callers that accept
//! mixed-case input lowercase the line first.

use intergalactic_foundation::{Error, Result};

use crate::intent::{Intent, Operand, owned};
use crate::tokenizer::{Line, tokenize};

/// A named classification rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short rule name, used in trace output
    pub name: &'static str,
    /// Classifies the line, or declines with `None`
    pub apply: fn(&Line<'_>) -> Option<Intent>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Classification rules in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "symbol-assignment",
        apply: symbol_assignment,
    },
    Rule {
        name: "rate-assignment",
        apply: rate_assignment,
    },
    Rule {
        name: "quantity-query",
        apply: quantity_query,
    },
    Rule {
        name: "credits-query",
        apply: credits_query,
    },
    Rule {
        name: "unit-comparison",
        apply: unit_comparison,
    },
    Rule {
        name: "credits-comparison",
        apply: credits_comparison,
    },
];

/// Classifies one line of input.
#[must_use]
pub fn classify(raw: &str) -> Intent {
    classify_with_rule(raw).1
}

/// Classifies one line of input, also returning the name of the rule that
/// accepted it (`None` when no rule did).
#[must_use]
pub fn classify_with_rule(raw: &str) -> (Option<&'static str>, Intent) {
    let line = Line::new(raw);
    RULES
        .iter()
        .find_map(|rule| (rule.apply)(&line).map(|intent| (Some(rule.name), intent)))
        .unwrap_or_else(|| (None, Intent::Invalid(Error::invalid_parse())))
}

/// `<sym> is <Roman>`: any three-word line.
fn symbol_assignment(line: &Line<'_>) -> Option<Intent> {
    let [symbol, _, roman] = line.tokens.as_slice() else {
        return None;
    };
    Some(Intent::AssignSymbol {
        symbol: (*symbol).to_string(),
        roman: (*roman).to_string(),
    })
}

/// `<sym...> <currency> is <N> credits`
fn rate_assignment(line: &Line<'_>) -> Option<Intent> {
    if line.tokens.len() <= 4 || line.last_token() != Some("credits") {
        return None;
    }

    let intent = split_operands(line.text, Some(" is ")).and_then(|(before, after)| {
        let credits = after
            .len()
            .checked_sub(2)
            .and_then(|idx| after[idx].parse::<i64>().ok())
            .ok_or_else(Error::invalid_credit)?;
        let operand = Operand::from_tokens(&before).ok_or_else(Error::invalid_format)?;
        Ok(Intent::AssignRate { operand, credits })
    });
    Some(intent.unwrap_or_else(Intent::Invalid))
}

/// `how much is <sym...>`
fn quantity_query(line: &Line<'_>) -> Option<Intent> {
    if !line.text.starts_with("how much is") {
        return None;
    }
    let symbols = line.tokens.get(3..).map(owned).unwrap_or_default();
    Some(Intent::QueryQuantity { symbols })
}

/// `how many credits is <sym...> <currency>`
fn credits_query(line: &Line<'_>) -> Option<Intent> {
    if !line.text.starts_with("how many credits is") {
        return None;
    }
    let intent = line
        .tokens
        .get(4..)
        .and_then(Operand::from_tokens)
        .map_or_else(
            || Intent::Invalid(Error::invalid_format()),
            |operand| Intent::QueryCredits { operand },
        );
    Some(intent)
}

/// `is <sym...> smaller than|larger than <sym...>`
fn unit_comparison(line: &Line<'_>) -> Option<Intent> {
    let rest = line.text.strip_prefix("is")?;
    let separator = if line.text.contains("smaller than") {
        Some("smaller than")
    } else if line.text.contains("larger than") {
        Some("larger than")
    } else {
        None
    };

    let intent = split_operands(rest, separator).map_or_else(Intent::Invalid, |(first, second)| {
        Intent::CompareQuantities {
            first: owned(&first),
            second: owned(&second),
        }
    });
    Some(intent)
}

/// `does <sym...> <currency> has less|more credits than <sym...> <currency>`
fn credits_comparison(line: &Line<'_>) -> Option<Intent> {
    let rest = line.text.strip_prefix("does")?;
    let separator = if line.text.contains("less") {
        Some("has less credits than")
    } else if line.text.contains("more") {
        Some("has more credits than")
    } else {
        None
    };

    let intent = split_operands(rest, separator).and_then(|(first, second)| {
        match (Operand::from_tokens(&first), Operand::from_tokens(&second)) {
            (Some(first), Some(second)) => Ok(Intent::CompareCredits { first, second }),
            _ => Err(Error::invalid_format()),
        }
    });
    Some(intent.unwrap_or_else(Intent::Invalid))
}

/// Splits `text` around the first occurrence of `separator` into two word
/// lists.
///
/// A missing separator keyword is an invalid parse. A separator that leaves
/// either side empty is an invalid format.
fn split_operands<'a>(
    text: &'a str,
    separator: Option<&str>,
) -> Result<(Vec<&'a str>, Vec<&'a str>)> {
    let separator = separator.ok_or_else(Error::invalid_parse)?;
    let (before, after) = text.split_once(separator).unwrap_or((text, ""));
    let (before, after) = (before.trim(), after.trim());

    if before.is_empty() || after.is_empty() {
        return Err(Error::invalid_format());
    }
    Ok((tokenize(before), tokenize(after)))
}

//! Field and expression parsing.
//!
//! A field's raw text is split on commas; each piece is classified into a
//! `Token` by shape before anything is evaluated, then expanded against
//! the field's domain. The per-piece results are unioned, sorted, and
//! deduplicated.

use std::ops::RangeInclusive;

use crate::entry::{CronEntry, Field};
use crate::error::InvalidExpression;

/// A single comma-separated piece of one field, classified by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Wildcard,
    Value(u8),
    Range(u8, u8),
    Step(StepBase, u8),
}

/// The part before the `/` in a step token.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StepBase {
    Wildcard,
    Range(u8, u8),
}

/// Parse a full cron line: five schedule fields plus a command.
pub fn parse(line: &str) -> Result<CronEntry, InvalidExpression> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(InvalidExpression);
    }

    Ok(CronEntry {
        minutes: parse_field(fields[0], Field::Minute.domain())?,
        hours: parse_field(fields[1], Field::Hour.domain())?,
        days_of_month: parse_field(fields[2], Field::DayOfMonth.domain())?,
        months: parse_field(fields[3], Field::Month.domain())?,
        days_of_week: parse_field(fields[4], Field::DayOfWeek.domain())?,
        command: fields[5].to_string(),
    })
}

/// Expand one field's text into the sorted set of values it matches.
pub fn parse_field(
    text: &str,
    domain: RangeInclusive<u8>,
) -> Result<Vec<u8>, InvalidExpression> {
    let mut values = Vec::new();
    for piece in text.split(',') {
        expand(classify(piece)?, &domain, &mut values)?;
    }
    values.sort_unstable();
    values.dedup();
    Ok(values)
}

/// Decide a piece's token shape. Evaluation happens separately in
/// `expand`; only the step value and range bounds are read here.
fn classify(piece: &str) -> Result<Token, InvalidExpression> {
    if piece == "*" {
        return Ok(Token::Wildcard);
    }
    if let Some(value) = number(piece) {
        return Ok(Token::Value(value));
    }
    if let Some((lo, hi)) = range(piece) {
        return Ok(Token::Range(lo, hi));
    }
    if let Some((base, step)) = piece.split_once('/') {
        let step = number(step).ok_or(InvalidExpression)?;
        let base = if base == "*" {
            StepBase::Wildcard
        } else {
            let (lo, hi) = range(base).ok_or(InvalidExpression)?;
            StepBase::Range(lo, hi)
        };
        return Ok(Token::Step(base, step));
    }
    Err(InvalidExpression)
}

/// Append a token's expansion over `domain` to `out`.
fn expand(
    token: Token,
    domain: &RangeInclusive<u8>,
    out: &mut Vec<u8>,
) -> Result<(), InvalidExpression> {
    match token {
        Token::Wildcard => out.extend(domain.clone()),
        // Bare values pass through unchecked; only ranges and step bases
        // are held to the domain.
        Token::Value(value) => out.push(value),
        Token::Range(lo, hi) => out.extend(bounded_range(lo, hi, domain)?),
        Token::Step(base, step) => {
            if step == 0 {
                return Err(InvalidExpression);
            }
            let (candidates, anchor) = match base {
                StepBase::Wildcard => (domain.clone(), *domain.start()),
                StepBase::Range(lo, hi) => (bounded_range(lo, hi, domain)?, lo),
            };
            out.extend(candidates.filter(|n| (n - anchor) % step == 0));
        }
    }
    Ok(())
}

/// Validate `lo..=hi` against the domain.
fn bounded_range(
    lo: u8,
    hi: u8,
    domain: &RangeInclusive<u8>,
) -> Result<RangeInclusive<u8>, InvalidExpression> {
    if lo > hi || !domain.contains(&lo) || !domain.contains(&hi) {
        return Err(InvalidExpression);
    }
    Ok(lo..=hi)
}

/// An all-digits piece as a value, `None` for any other shape.
fn number(piece: &str) -> Option<u8> {
    if piece.is_empty() || !piece.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    piece.parse().ok()
}

/// An `a-b` piece with all-digits bounds, `None` for any other shape.
fn range(piece: &str) -> Option<(u8, u8)> {
    let (lo, hi) = piece.split_once('-')?;
    Some((number(lo)?, number(hi)?))
}

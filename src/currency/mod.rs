//! Amount formatting and input parsing for the report layer.

/// Formats an amount with exactly two fractional digits (rounded to nearest)
/// and thousands grouping, e.g. `1000000.0` → `"1,000,000.00"`.
pub fn format_amount(value: f64) -> String {
    let mut body = format!("{:.2}", value);
    if let Some(pos) = body.find('.') {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part);
        body = format!("{}{}", int_part, &body[pos..]);
    }
    body
}

/// Parses a user-supplied amount. Only non-negative decimals are accepted;
/// sign and validity checks happen here so the ledger itself never sees bad
/// input.
pub fn parse_amount(input: &str) -> Result<f64, AmountParseError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountParseError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(AmountParseError::Negative(trimmed.to_string()));
    }
    Ok(value)
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("`{0}` must be a non-negative amount")]
    Negative(String),
}

fn insert_grouping(int_part: &mut String) {
    let mut cleaned = int_part.clone();
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned);
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}

/// Card schemes whose label is `<scheme> <number>`.
const PLAIN_CARD_SCHEMES: [&str; 3] = ["MasterCard", "Maestro", "МИР"];

const VISA: &str = "Visa";
const ACCOUNT: &str = "Счет";

/// Hides the sensitive digits of an account or card label.
///
/// * `Visa <label> <number>` keeps the scheme, the label, the first six and
///   the last four digits.
/// * `MasterCard`, `Maestro` and `МИР` cards keep the scheme, the first six
///   and the last four digits.
/// * `Счет <number>` becomes `**` followed by the last four digits.
///
/// Anything else is returned unchanged. Missing tokens are treated as empty,
/// so the function never fails.
pub fn mask_account_number(account: &str) -> String {
    let tokens: Vec<&str> = account.split(' ').collect();
    let token = |i: usize| tokens.get(i).copied().unwrap_or_default();

    if account.starts_with(VISA) {
        format!("{} {} {}", token(0), token(1), mask_card_number(token(2)))
    } else if PLAIN_CARD_SCHEMES.iter().any(|s| account.starts_with(s)) {
        format!("{} {}", token(0), mask_card_number(token(1)))
    } else if account.starts_with(ACCOUNT) {
        let number = tokens.last().copied().unwrap_or_default();
        format!("**{}", last_chars(number, 4))
    } else {
        account.to_owned()
    }
}

/// `1234567890123456` -> `1234 56** **** 3456`
fn mask_card_number(number: &str) -> String {
    format!(
        "{} {}** **** {}",
        char_slice(number, 0, 4),
        char_slice(number, 4, 6),
        last_chars(number, 4)
    )
}

// Slicing by chars, clamped to the string length.
fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

fn last_chars(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(n)).collect()
}

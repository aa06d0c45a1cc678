//! Swedish amount formatting.

/// Groups thousands with a space: `50000` becomes `"50 000"`.
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Amount with currency suffix, e.g. `"3 375 kr"`.
pub fn format_kronor(amount: i64) -> String {
    format!("{} kr", format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(625), "625");
        assert_eq!(format_amount(3375), "3 375");
        assert_eq!(format_amount(75_000), "75 000");
        assert_eq!(format_amount(1_234_567), "1 234 567");
        assert_eq!(format_amount(-1500), "-1 500");
    }

    #[test]
    fn kronor_suffix() {
        assert_eq!(format_kronor(1687), "1 687 kr");
    }
}

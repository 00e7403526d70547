//! pt-BR display formatting for prices, dates and counts.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

/// Format an amount as Brazilian reais, e.g. `R$ 1.200,00`
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$\u{a0}{},{:02}", sign, grouped, frac)
}

/// Format a timestamp for the "last update" card, e.g. `18 de outubro, 14:30`
pub fn format_updated_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{:02} de {}, {:02}:{:02}",
        at.day(),
        MONTHS[at.month0() as usize],
        at.hour(),
        at.minute()
    )
}

pub fn items_label(count: usize) -> String {
    if count == 1 {
        "1 item registrado".to_string()
    } else {
        format!("{} itens registrados", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
        assert_eq!(format_brl(1200.0), "R$\u{a0}1.200,00");
        assert_eq!(format_brl(35.5), "R$\u{a0}35,50");
        assert_eq!(format_brl(1234567.891), "R$\u{a0}1.234.567,89");
        assert_eq!(format_brl(-12.3), "-R$\u{a0}12,30");
    }

    #[test]
    fn test_format_updated_at() {
        let at = Utc.with_ymd_and_hms(2026, 10, 8, 9, 5, 0).unwrap();
        assert_eq!(format_updated_at(&at), "08 de outubro, 09:05");
    }

    #[test]
    fn test_items_label() {
        assert_eq!(items_label(1), "1 item registrado");
        assert_eq!(items_label(0), "0 itens registrados");
        assert_eq!(items_label(3), "3 itens registrados");
    }
}

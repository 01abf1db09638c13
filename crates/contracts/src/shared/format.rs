//! Text formatters for form inputs and read-only displays.
//!
//! The input formatters are display conveniences, not validators: anything
//! that does not fit the expected pattern is echoed back stripped, never
//! rejected.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

static PLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]{3})([0-9]{4})").expect("valid plate regex"));
static CPF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{3})([0-9]{3})([0-9]{3})([0-9]{2})").expect("valid cpf regex")
});
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2})([0-9]{5})([0-9]{4})").expect("valid phone regex"));

const WEEKDAYS_PT: [&str; 7] = [
    "domingo",
    "segunda-feira",
    "terça-feira",
    "quarta-feira",
    "quinta-feira",
    "sexta-feira",
    "sábado",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format a license plate: `abc1234` -> `ABC-1234`
///
/// Strips everything but ASCII letters and digits, uppercases, and hyphenates
/// the first three-letters-four-digits run.
pub fn format_plate(value: &str) -> String {
    let alphanumeric: String = value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    PLATE_RE.replace(&alphanumeric, "$1-$2").into_owned()
}

/// Format a CPF: `12345678900` -> `123.456.789-00`
pub fn format_cpf(value: &str) -> String {
    let digits = digits_only(value);
    CPF_RE.replace(&digits, "$1.$2.$3-$4").into_owned()
}

/// Format a mobile phone: `11999999999` -> `(11) 99999-9999`
pub fn format_phone(value: &str) -> String {
    let digits = digits_only(value);
    PHONE_RE.replace(&digits, "($1) $2-$3").into_owned()
}

/// Money with two decimals: `R$ 205.00`
pub fn format_money(value: Decimal, currency: &str) -> String {
    format!("{} {:.2}", currency, value.round_dp(2))
}

/// Integer with `.` as thousands separator (pt-BR): `45000` -> `45.000`
pub fn format_thousands(value: u32) -> String {
    let s = value.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

pub fn format_mileage(km: u32) -> String {
    format!("{} km", format_thousands(km))
}

/// `2024-12-15` -> `15/12/2024`
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `2024-12-15` -> `domingo, 15 de dezembro de 2024`
pub fn format_date_long_br(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_PT[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS_PT[date.month0() as usize];
    format!("{}, {} de {} de {}", weekday, date.day(), month, date.year())
}

/// Parse the value of an `<input type="date">`
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plate() {
        assert_eq!(format_plate("abc1234"), "ABC-1234");
        assert_eq!(format_plate("ab c-12.34"), "ABC-1234");
        assert_eq!(format_plate("ABC-1234"), "ABC-1234");
    }

    #[test]
    fn test_format_plate_echoes_partial_input() {
        assert_eq!(format_plate("ab"), "AB");
        assert_eq!(format_plate("abc12"), "ABC12");
        // Mercosul plates do not fit the pattern and pass through stripped
        assert_eq!(format_plate("abc1d23"), "ABC1D23");
        assert_eq!(format_plate(""), "");
    }

    #[test]
    fn test_format_plate_is_idempotent() {
        for input in ["abc1234", "ABC-1234", "x", "abc1d23", "zz-99"] {
            let once = format_plate(input);
            assert_eq!(format_plate(&once), once);
        }
    }

    #[test]
    fn test_format_cpf() {
        assert_eq!(format_cpf("12345678900"), "123.456.789-00");
        assert_eq!(format_cpf("123.456.789-00"), "123.456.789-00");
        assert_eq!(format_cpf("1234"), "1234");
        assert_eq!(format_cpf("abc"), "");
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("11999999999"), "(11) 99999-9999");
        assert_eq!(format_phone("(11) 99999-9999"), "(11) 99999-9999");
        assert_eq!(format_phone("119999"), "119999");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::from(205), "R$"), "R$ 205.00");
        assert_eq!(format_money(Decimal::new(12345, 2), "R$"), "R$ 123.45");
        assert_eq!(format_money(Decimal::ZERO, "R$"), "R$ 0.00");
    }

    #[test]
    fn test_format_mileage() {
        assert_eq!(format_mileage(45000), "45.000 km");
        assert_eq!(format_mileage(1234567), "1.234.567 km");
        assert_eq!(format_mileage(0), "0 km");
    }

    #[test]
    fn test_dates() {
        let date = parse_iso_date("2024-12-15").unwrap();
        assert_eq!(format_date_br(date), "15/12/2024");
        assert_eq!(format_date_long_br(date), "domingo, 15 de dezembro de 2024");
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("15/12/2024"), None);
    }
}

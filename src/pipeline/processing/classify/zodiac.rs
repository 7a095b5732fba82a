use chrono::{Datelike, NaiveDate};

use crate::types::ZodiacSign;

/// First (month, day) of each sign, in calendar order. Dates before the
/// first entry belong to Capricorn, which wraps the year boundary.
const SIGN_STARTS: [((u32, u32), ZodiacSign); 12] = [
    ((1, 20), ZodiacSign::Aquarius),
    ((2, 19), ZodiacSign::Pisces),
    ((3, 21), ZodiacSign::Aries),
    ((4, 20), ZodiacSign::Taurus),
    ((5, 21), ZodiacSign::Gemini),
    ((6, 21), ZodiacSign::Cancer),
    ((7, 23), ZodiacSign::Leo),
    ((8, 23), ZodiacSign::Virgo),
    ((9, 23), ZodiacSign::Libra),
    ((10, 23), ZodiacSign::Scorpio),
    ((11, 22), ZodiacSign::Sagittarius),
    ((12, 22), ZodiacSign::Capricorn),
];

pub fn zodiac_sign(date: NaiveDate) -> ZodiacSign {
    let key = (date.month(), date.day());
    SIGN_STARTS
        .iter()
        .rev()
        .find(|(start, _)| *start <= key)
        .map(|(_, sign)| *sign)
        .unwrap_or(ZodiacSign::Capricorn)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(m: u32, d: u32) -> ZodiacSign {
        zodiac_sign(NaiveDate::from_ymd_opt(2001, m, d).unwrap())
    }

    #[test]
    fn test_sign_boundaries() {
        assert_eq!(sign(1, 1), ZodiacSign::Capricorn);
        assert_eq!(sign(1, 19), ZodiacSign::Capricorn);
        assert_eq!(sign(1, 20), ZodiacSign::Aquarius);
        assert_eq!(sign(2, 18), ZodiacSign::Aquarius);
        assert_eq!(sign(2, 19), ZodiacSign::Pisces);
        assert_eq!(sign(4, 13), ZodiacSign::Aries);
        assert_eq!(sign(7, 22), ZodiacSign::Cancer);
        assert_eq!(sign(7, 23), ZodiacSign::Leo);
        assert_eq!(sign(12, 21), ZodiacSign::Sagittarius);
        assert_eq!(sign(12, 22), ZodiacSign::Capricorn);
        assert_eq!(sign(12, 31), ZodiacSign::Capricorn);
    }

    #[test]
    fn test_leap_day() {
        let leap = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        assert_eq!(zodiac_sign(leap), ZodiacSign::Pisces);
    }
}

use std::fmt;

use super::RatingValue;

pub const STAR_SLOTS: u8 = 5;
pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '⯪';
pub const EMPTY_STAR: char = '☆';

/// A score in [0, 5] split into star slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarRating {
    pub score: f64,
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// `None` when the score is outside [0, 5] or not finite.
    ///
    /// A remainder of 0.5 or more gives a half star and is never rounded up
    /// to a full one, so 4.7 renders as four full stars and a half.
    pub fn from_score(score: f64) -> Option<Self> {
        if !(0.0..=5.0).contains(&score) {
            return None;
        }
        let full = score.floor() as u8;
        let half = score - score.floor() >= 0.5;
        let empty = STAR_SLOTS - full - u8::from(half);
        Some(Self {
            score,
            full,
            half,
            empty,
        })
    }

    pub fn glyphs(&self) -> String {
        let mut out = String::with_capacity(STAR_SLOTS as usize * 3);
        out.extend(std::iter::repeat_n(FULL_STAR, self.full as usize));
        if self.half {
            out.push(HALF_STAR);
        }
        out.extend(std::iter::repeat_n(EMPTY_STAR, self.empty as usize));
        out
    }
}

#[cfg(test)]
impl StarRating {
    pub fn slots(&self) -> u8 {
        self.full + u8::from(self.half) + self.empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StarDisplay {
    Rated(StarRating),
    NotAvailable,
}

impl fmt::Display for StarDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarDisplay::Rated(stars) => write!(f, "{} ({})", stars.glyphs(), format_score(stars.score)),
            StarDisplay::NotAvailable => f.write_str("N/A"),
        }
    }
}

/// Render any rating value as stars, or N/A if it is not a score in [0, 5].
pub fn render_stars(value: &RatingValue) -> StarDisplay {
    value
        .as_number()
        .and_then(StarRating::from_score)
        .map_or(StarDisplay::NotAvailable, StarDisplay::Rated)
}

/// Integral scores keep one decimal (`4.0`), others print as-is (`4.25`).
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(score: f64) -> StarRating {
        match render_stars(&RatingValue::Number(score)) {
            StarDisplay::Rated(stars) => stars,
            StarDisplay::NotAvailable => panic!("{score} should be rated"),
        }
    }

    #[test]
    fn always_five_slots() {
        for tenths in 0..=50 {
            let stars = rated(tenths as f64 / 10.0);
            assert_eq!(stars.slots(), STAR_SLOTS, "score {}", stars.score);
            assert_eq!(stars.glyphs().chars().count(), STAR_SLOTS as usize);
        }
    }

    #[test]
    fn five_is_all_full() {
        let stars = rated(5.0);
        assert_eq!((stars.full, stars.half, stars.empty), (5, false, 0));
    }

    #[test]
    fn four_and_a_half() {
        let stars = rated(4.5);
        assert_eq!((stars.full, stars.half, stars.empty), (4, true, 0));
    }

    #[test]
    fn remainder_above_half_is_not_rounded_up() {
        let stars = rated(4.7);
        assert_eq!((stars.full, stars.half, stars.empty), (4, true, 0));
    }

    #[test]
    fn small_remainder_has_no_half() {
        let stars = rated(3.2);
        assert_eq!((stars.full, stars.half, stars.empty), (3, false, 2));
        let stars = rated(0.0);
        assert_eq!((stars.full, stars.half, stars.empty), (0, false, 5));
    }

    #[test]
    fn out_of_range_and_non_numeric_are_na() {
        assert_eq!(render_stars(&RatingValue::Number(-1.0)), StarDisplay::NotAvailable);
        assert_eq!(render_stars(&RatingValue::Number(5.01)), StarDisplay::NotAvailable);
        assert_eq!(render_stars(&RatingValue::Text("abc".into())), StarDisplay::NotAvailable);
        assert_eq!(render_stars(&RatingValue::Null), StarDisplay::NotAvailable);
        assert_eq!(render_stars(&RatingValue::Number(f64::NAN)), StarDisplay::NotAvailable);
    }

    #[test]
    fn numeric_strings_are_rendered() {
        assert_eq!(render_stars(&RatingValue::Text("4.5".into())), StarDisplay::Rated(rated(4.5)));
    }

    #[test]
    fn display_carries_score() {
        assert_eq!(render_stars(&RatingValue::Number(4.5)).to_string(), "★★★★⯪ (4.5)");
        assert_eq!(render_stars(&RatingValue::Number(3.0)).to_string(), "★★★☆☆ (3.0)");
        assert_eq!(StarDisplay::NotAvailable.to_string(), "N/A");
    }
}

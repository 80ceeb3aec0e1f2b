use std::fmt;

use colored::Colorize;

pub const MAX_STARS: u8 = 5;

/// Average rating of a team as shown on its card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    average: Option<f64>,
    count: u32,
}

impl Rating {
    /// A zero or NaN average counts as "not rated".
    pub fn new(average: Option<f64>, count: Option<u32>) -> Self {
        Self {
            average: average.filter(|avg| *avg != 0.0 && !avg.is_nan()),
            count: count.unwrap_or(0),
        }
    }

    pub fn average(self) -> Option<f64> {
        self.average
    }

    /// Whole stars to fill, clamped to `0..=MAX_STARS`.
    pub fn filled_stars(self) -> u8 {
        let value = self.average.unwrap_or(0.0).round();
        value.clamp(0.0, f64::from(MAX_STARS)) as u8
    }

    pub fn stars(self) -> String {
        let filled = usize::from(self.filled_stars());
        let empty = usize::from(MAX_STARS) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }

    /// Get the label for this rating. Halves round away from zero, so 4.25 shows as 4.3.
    pub fn label(self) -> String {
        match self.average {
            Some(avg) => {
                let shown = (avg * 10.0).round() / 10.0;
                format!("{shown:.1}/5 ({})", self.count)
            }
            None => "No Rating".to_string(),
        }
    }

    /// Get the colored stars and label for terminal output.
    pub fn colored(self) -> String {
        let label = self.label();
        let label = match self.average {
            Some(_) => label.normal(),
            None => label.bright_black().italic(),
        };
        format!("{} {label}", self.stars().yellow())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stars(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_average() {
        assert_eq!(Rating::new(Some(4.5), Some(10)).label(), "4.5/5 (10)");
        assert_eq!(Rating::new(Some(3.0), Some(1)).label(), "3.0/5 (1)");
        assert_eq!(Rating::new(Some(4.26), Some(7)).label(), "4.3/5 (7)");
    }

    #[test]
    fn test_label_rounds_halves_up() {
        assert_eq!(Rating::new(Some(4.25), Some(4)).label(), "4.3/5 (4)");
        assert_eq!(Rating::new(Some(0.25), Some(4)).label(), "0.3/5 (4)");
        assert_eq!(Rating::new(Some(3.75), Some(8)).label(), "3.8/5 (8)");
    }

    #[test]
    fn test_missing_count_defaults_to_zero() {
        assert_eq!(Rating::new(Some(2.0), None).label(), "2.0/5 (0)");
    }

    #[test]
    fn test_absent_zero_and_nan_are_unrated() {
        assert_eq!(Rating::new(None, Some(3)).label(), "No Rating");
        assert_eq!(Rating::new(Some(0.0), Some(3)).label(), "No Rating");
        assert_eq!(Rating::new(Some(f64::NAN), None).label(), "No Rating");
    }

    #[test]
    fn test_stars_always_render() {
        assert_eq!(Rating::new(None, None).stars(), "☆☆☆☆☆");
        assert_eq!(Rating::new(Some(4.5), None).stars(), "★★★★★");
        assert_eq!(Rating::new(Some(3.4), None).stars(), "★★★☆☆");
        assert_eq!(Rating::new(Some(9.0), None).filled_stars(), MAX_STARS);
        assert_eq!(Rating::new(Some(-2.0), None).filled_stars(), 0);
    }

    #[test]
    fn test_display_is_stars_then_label() {
        assert_eq!(Rating::new(Some(4.25), Some(4)).to_string(), "★★★★☆ 4.3/5 (4)");
        assert_eq!(Rating::new(None, None).to_string(), "☆☆☆☆☆ No Rating");
    }
}

use std::fmt::{Display, Formatter};

/// Percentage already scaled to `0..=100`.
pub struct FormattedPercentage(pub f64);

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

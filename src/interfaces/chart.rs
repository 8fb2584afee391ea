use super::currency::format_usd;
use crate::domain::calculation::CalculationResult;

const FILLED: [char; 2] = ['█', '░'];
const MARKERS: [char; 2] = ['●', '○'];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub name: &'static str,
    pub value: f64,
    pub share: f64,
}

/// Two-slice split of the future value into principal and interest.
#[derive(Debug, Clone, PartialEq)]
pub struct ProportionChart {
    slices: [Slice; 2],
}

impl ProportionChart {
    pub fn new(result: &CalculationResult) -> Self {
        let principal_share = if result.total_amount.is_finite() && result.total_amount > 0.0 {
            (result.principal / result.total_amount).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            slices: [
                Slice {
                    name: "Principal",
                    value: result.principal,
                    share: principal_share,
                },
                Slice {
                    name: "Total Interest",
                    value: result.total_interest,
                    share: 1.0 - principal_share,
                },
            ],
        }
    }

    pub fn slices(&self) -> &[Slice; 2] {
        &self.slices
    }

    /// Draws the split as a bar `width` cells wide.
    pub fn bar(&self, width: usize) -> String {
        let principal_cells = ((self.slices[0].share * width as f64).round() as usize).min(width);
        let mut bar = String::with_capacity(width * 3 + 2);
        bar.push('[');
        bar.extend(std::iter::repeat_n(FILLED[0], principal_cells));
        bar.extend(std::iter::repeat_n(FILLED[1], width - principal_cells));
        bar.push(']');
        bar
    }

    /// One legend line per slice: marker, name, share and amount.
    pub fn legend(&self) -> Vec<String> {
        self.slices
            .iter()
            .zip(MARKERS)
            .map(|(slice, marker)| {
                format!(
                    "{marker} {:<16}{:>6.1}%  {}",
                    slice.name,
                    slice.share * 100.0,
                    format_usd(slice.value)
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(principal: f64, total_interest: f64) -> CalculationResult {
        CalculationResult {
            principal,
            total_interest,
            total_amount: principal + total_interest,
        }
    }

    #[test]
    fn test_shares_sum_to_one() {
        let chart = ProportionChart::new(&result(1000.0, 100.0));
        let [principal, interest] = chart.slices();
        assert_eq!(principal.name, "Principal");
        assert_eq!(interest.name, "Total Interest");
        assert!((principal.share - 1000.0 / 1100.0).abs() < 1e-12);
        assert!((principal.share + interest.share - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bar_width() {
        let chart = ProportionChart::new(&result(1000.0, 1000.0));
        assert_eq!(chart.bar(10), "[█████░░░░░]");
    }

    #[test]
    fn test_legend_lines() {
        let legend = ProportionChart::new(&result(1000.0, 100.0)).legend();
        assert_eq!(legend.len(), 2);
        assert!(legend[0].starts_with("● Principal"));
        assert!(legend[0].contains("90.9%"));
        assert!(legend[0].ends_with("$1,000.00"));
        assert!(legend[1].contains("9.1%"));
        assert!(legend[1].ends_with("$100.00"));
    }

    #[test]
    fn test_overflowed_total_is_all_interest() {
        let chart = ProportionChart::new(&result(1000.0, f64::INFINITY));
        assert_eq!(chart.slices()[0].share, 0.0);
        assert_eq!(chart.bar(4), "[░░░░]");
    }
}

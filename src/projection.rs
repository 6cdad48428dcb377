//! The two projection engines: simple monthly accumulation and
//! monthly-compounded growth with contributions. Both are pure functions of
//! their plan; validation happens before a plan is ever built.

/// One projected month: 1-based index and the balance at the end of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub month: u32,
    pub balance: f64,
}

/// An ordered projection, one point per month, immutable once produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn min_balance(&self) -> f64 {
        self.points.iter().map(|p| p.balance).fold(f64::INFINITY, f64::min)
    }

    pub fn max_balance(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.balance)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Inputs for the savings projection: a fixed amount saved every month on
/// top of an opening balance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SavingsPlan {
    pub initial: f64,
    pub monthly: f64,
    pub months: u32,
}

impl SavingsPlan {
    /// `value_m = value_{m-1} + monthly`, starting from `initial`.
    pub fn project(&self) -> Series {
        let mut points = Vec::with_capacity(self.months as usize);
        let mut balance = self.initial;
        for month in 1..=self.months {
            balance += self.monthly;
            points.push(Point { month, balance });
        }
        Series { points }
    }

    /// Everything paid in over the plan, excluding the opening balance.
    pub fn total_saved(&self) -> f64 {
        self.monthly * f64::from(self.months)
    }
}

/// Inputs for the investment projection. `annual_rate` is a percentage
/// (9.5 means 9.5 % per year).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvestmentPlan {
    pub initial: f64,
    pub monthly: f64,
    pub months: u32,
    pub annual_rate: f64,
}

impl InvestmentPlan {
    /// Effective per-month rate: the twelfth root of the annual growth
    /// factor, so twelve compounded months equal one year at `annual_rate`.
    pub fn monthly_rate(&self) -> f64 {
        (1.0 + self.annual_rate / 100.0).powf(1.0 / 12.0) - 1.0
    }

    /// `value_m = value_{m-1} * (1 + monthly_rate) + monthly`. Interest
    /// accrues first, the month's contribution lands after it.
    pub fn project(&self) -> Series {
        let rate = self.monthly_rate();
        let mut points = Vec::with_capacity(self.months as usize);
        let mut balance = self.initial;
        for month in 1..=self.months {
            balance = balance * (1.0 + rate) + self.monthly;
            points.push(Point { month, balance });
        }
        Series { points }
    }

    /// Summary of a finished projection. `gain` is negative for a loss.
    pub fn outcome(&self, series: &Series) -> Outcome {
        let final_balance = series.last().map_or(self.initial, |p| p.balance);
        let total_contributed = self.initial + self.monthly * f64::from(self.months);
        Outcome {
            final_balance,
            total_contributed,
            gain: final_balance - total_contributed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    pub final_balance: f64,
    pub total_contributed: f64,
    pub gain: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tol = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tol,
            "{actual} differs from {expected}"
        );
    }

    #[test]
    fn additive_series_matches_closed_form() {
        let plan = SavingsPlan {
            initial: 1000.0,
            monthly: 100.0,
            months: 12,
        };
        let series = plan.project();
        assert_eq!(series.len(), 12);
        for (i, point) in series.points().iter().enumerate() {
            assert_eq!(point.month, i as u32 + 1);
            assert_close(point.balance, 1000.0 + 100.0 * f64::from(point.month));
        }
    }

    #[test]
    fn savings_defaults_reach_2200() {
        let plan = SavingsPlan {
            initial: 1000.0,
            monthly: 100.0,
            months: 12,
        };
        let series = plan.project();
        assert_eq!(series.last().unwrap().balance, 2200.0);
        assert_eq!(plan.total_saved(), 1200.0);
    }

    #[test]
    fn zero_annual_rate_gives_zero_monthly_rate() {
        let plan = InvestmentPlan {
            initial: 1000.0,
            monthly: 0.0,
            months: 12,
            annual_rate: 0.0,
        };
        assert_eq!(plan.monthly_rate(), 0.0);
    }

    #[test]
    fn monthly_rate_is_twelfth_root_of_annual_factor() {
        let plan = InvestmentPlan {
            initial: 0.0,
            monthly: 0.0,
            months: 1,
            annual_rate: 9.5,
        };
        let rate = plan.monthly_rate();
        // (1.095)^(1/12) - 1
        assert!((rate - 0.007_591_5).abs() < 1e-6);
        assert_close((1.0 + rate).powi(12), 1.095);
    }

    #[test]
    fn compounding_matches_annuity_closed_form() {
        let plan = InvestmentPlan {
            initial: 1000.0,
            monthly: 100.0,
            months: 60,
            annual_rate: 9.5,
        };
        let rate = plan.monthly_rate();
        let series = plan.project();
        assert_eq!(series.len(), 60);
        for point in series.points() {
            let growth = (1.0 + rate).powi(point.month as i32);
            let expected = 1000.0 * growth + 100.0 * (growth - 1.0) / rate;
            assert_close(point.balance, expected);
        }
    }

    #[test]
    fn investment_defaults_outcome() {
        let plan = InvestmentPlan {
            initial: 1000.0,
            monthly: 100.0,
            months: 60,
            annual_rate: 9.5,
        };
        let series = plan.project();
        let outcome = plan.outcome(&series);
        assert_eq!(outcome.total_contributed, 7000.0);
        assert!(outcome.gain > 0.0);
        assert_close(outcome.final_balance, outcome.total_contributed + outcome.gain);
        assert_eq!(outcome.final_balance, series.last().unwrap().balance);
    }

    #[test]
    fn single_month_boundary() {
        let savings = SavingsPlan {
            initial: 1000.0,
            monthly: 100.0,
            months: 1,
        };
        assert_eq!(savings.project().points(), &[Point { month: 1, balance: 1100.0 }]);

        let investment = InvestmentPlan {
            initial: 1000.0,
            monthly: 100.0,
            months: 1,
            annual_rate: 9.5,
        };
        let series = investment.project();
        assert_eq!(series.len(), 1);
        assert_close(
            series.last().unwrap().balance,
            1000.0 * (1.0 + investment.monthly_rate()) + 100.0,
        );
    }

    #[test]
    fn projection_is_deterministic() {
        let plan = InvestmentPlan {
            initial: 250.5,
            monthly: 33.3,
            months: 24,
            annual_rate: 4.2,
        };
        assert_eq!(plan.project(), plan.project());
    }

    #[test]
    fn balances_never_decrease_for_non_negative_inputs() {
        let series = InvestmentPlan {
            initial: 1000.0,
            monthly: 0.0,
            months: 48,
            annual_rate: 9.5,
        }
        .project();
        for pair in series.points().windows(2) {
            assert!(pair[1].balance >= pair[0].balance);
        }

        let series = SavingsPlan {
            initial: 0.0,
            monthly: 1.0,
            months: 10,
        }
        .project();
        for pair in series.points().windows(2) {
            assert!(pair[1].balance >= pair[0].balance);
        }
    }

    #[test]
    fn extremes_cover_the_whole_series() {
        let series = SavingsPlan {
            initial: 1000.0,
            monthly: 100.0,
            months: 12,
        }
        .project();
        assert_eq!(series.min_balance(), 1100.0);
        assert_eq!(series.max_balance(), 2200.0);
    }
}

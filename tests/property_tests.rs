use compound_interest::application::engine::calculate;
use compound_interest::domain::calculation::CalculationInput;
use compound_interest::domain::frequency::CompoundingFrequency;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 2_000;

fn random_input(rng: &mut StdRng) -> (f64, f64, f64) {
    (
        rng.gen_range(1.0..1_000_000.0),
        rng.gen_range(0.1..50.0),
        rng.gen_range(0.5..50.0),
    )
}

#[test]
fn test_total_is_principal_plus_interest() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let (principal, rate, years) = random_input(&mut rng);
        for frequency in CompoundingFrequency::ALL {
            let result = CalculationInput::new(principal, rate, years, frequency)
                .unwrap()
                .compound();
            assert_eq!(result.principal + result.total_interest, result.total_amount);
            assert_eq!(result.principal, principal);
            assert!(result.total_amount >= principal);
        }
    }
}

#[test]
fn test_more_years_never_decreases_total() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let (principal, rate, years) = random_input(&mut rng);
        let longer = years + rng.gen_range(0.5..10.0);
        for frequency in CompoundingFrequency::ALL {
            let short = CalculationInput::new(principal, rate, years, frequency).unwrap();
            let long = CalculationInput::new(principal, rate, longer, frequency).unwrap();
            assert!(long.compound().total_amount >= short.compound().total_amount);
        }
    }
}

#[test]
fn test_more_frequent_compounding_never_decreases_total() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..SAMPLES {
        let (principal, rate, years) = random_input(&mut rng);
        let totals: Vec<f64> = CompoundingFrequency::ALL
            .into_iter()
            .map(|frequency| {
                CalculationInput::new(principal, rate, years, frequency)
                    .unwrap()
                    .compound()
                    .total_amount
            })
            .collect();
        for pair in totals.windows(2) {
            assert!(pair[1] >= pair[0], "{totals:?}");
        }

        // Continuous compounding bounds every discrete frequency
        let continuous = principal * (rate / 100.0 * years).exp();
        assert!(totals.iter().all(|total| *total <= continuous * (1.0 + 1e-12)));
    }
}

#[test]
fn test_raw_text_matches_typed_input() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..200 {
        let (principal, rate, years) = random_input(&mut rng);
        let from_text = calculate(
            &principal.to_string(),
            &rate.to_string(),
            &years.to_string(),
            CompoundingFrequency::Daily,
        )
        .unwrap();
        let typed = CalculationInput::new(principal, rate, years, CompoundingFrequency::Daily)
            .unwrap()
            .compound();
        assert_eq!(from_text, typed);
    }
}

#[test]
fn test_rejects_bad_text_for_each_field() {
    let frequency = CompoundingFrequency::Monthly;
    for bad in ["", "abc", "0", "-1", "-0.01"] {
        assert!(calculate(bad, "5", "10", frequency).is_err(), "principal {bad:?}");
        assert!(calculate("10000", bad, "10", frequency).is_err(), "rate {bad:?}");
        assert!(calculate("10000", "5", bad, frequency).is_err(), "years {bad:?}");
    }
}

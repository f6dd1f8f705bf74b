//! Survival economy tests.

use countess::{ConfigError, EconomyConfig, ExperimentOver, SurvivalEconomy};

fn close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn refill_triggers_at_threshold() {
    let config = EconomyConfig::default()
        .with_initial_credits(5.0)
        .with_burn_per_hand(0.0005)
        .with_refill(5.0, 20.0);
    let mut economy = SurvivalEconomy::new(config).unwrap();

    let step = economy.step(0.0).unwrap();
    assert!(step.refill);
    assert!(close(step.credits, 24.9995), "{}", step.credits);
    assert!(close(economy.credits(), 24.9995));
}

#[test]
fn positive_profit_is_taxed_into_credits() {
    let mut economy = SurvivalEconomy::new(EconomyConfig::default()).unwrap();
    let step = economy.step(10.0).unwrap();
    assert!(!step.refill);
    assert!(close(step.credits, 51.9995), "{}", step.credits);
}

#[test]
fn losses_and_pushes_only_burn() {
    let mut economy = SurvivalEconomy::new(EconomyConfig::default()).unwrap();
    let before = economy.credits();
    let step = economy.step(-25.0).unwrap();
    assert!(close(step.credits, before - 0.0005));

    let step = economy.step(0.0).unwrap();
    assert!(close(step.credits, before - 0.001));
}

#[test]
fn burn_is_the_only_drain() {
    let config = EconomyConfig::default()
        .with_initial_credits(6.0)
        .with_burn_per_hand(0.25)
        .with_refill(5.0, 1.0);
    let mut economy = SurvivalEconomy::new(config).unwrap();

    let mut previous = economy.credits();
    for _ in 0..200 {
        let step = economy.step(-3.0).unwrap();
        if step.refill {
            assert!(close(step.credits, previous - 0.25 + 1.0));
        } else {
            assert!(close(step.credits, previous - 0.25));
        }
        assert!(step.credits > 0.0);
        previous = step.credits;
    }
}

#[test]
fn depletion_is_sticky_until_reset() {
    let config = EconomyConfig::default()
        .with_initial_credits(1.0)
        .with_burn_per_hand(0.6)
        .with_refill(-10.0, 0.0);
    let mut economy = SurvivalEconomy::new(config).unwrap();

    let first = economy.step(0.0).unwrap();
    assert!(close(first.credits, 0.4));
    assert!(!economy.is_depleted());

    let err = economy.step(0.0).unwrap_err();
    assert!(economy.is_depleted());
    assert!(close(err.credits, -0.2));
    // A second call neither burns nor credits.
    let again: ExperimentOver = economy.step(100.0).unwrap_err();
    assert_eq!(again, err);

    economy.reset();
    assert!(!economy.is_depleted());
    assert!(close(economy.credits(), 1.0));
    assert!(economy.step(0.0).is_ok());
}

#[test]
fn death_is_checked_after_refill() {
    let config = EconomyConfig::default()
        .with_initial_credits(0.0001)
        .with_burn_per_hand(0.0005);
    let mut economy = SurvivalEconomy::new(config).unwrap();

    let step = economy.step(0.0).unwrap();
    assert!(step.refill);
    assert!(close(step.credits, 19.9996));
}

#[test]
fn invalid_economy_is_rejected() {
    let bad = [
        EconomyConfig::default().with_burn_per_hand(-1.0),
        EconomyConfig::default().with_tax_rate(-0.1),
        EconomyConfig::default().with_refill(5.0, -20.0),
        EconomyConfig::default().with_initial_credits(f64::NAN),
        EconomyConfig::default().with_death_threshold(f64::INFINITY),
    ];
    for config in bad {
        assert_eq!(
            SurvivalEconomy::new(config).unwrap_err(),
            ConfigError::InvalidEconomy
        );
    }
}

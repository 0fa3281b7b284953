//! Synthetic climate series generation.
//!
//! The dashboard does not ingest real observations; instead it draws three
//! plausible-looking series from simple closed-form shapes plus uniform noise.
//! Generation is driven by a seeded `StdRng`, so the same seed always yields
//! the same bundle.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand_distr::Uniform;
use tracing::info;

use crate::domain::{ClimateBundle, Observation, Series};

/// First year of the temperature anomaly record.
pub const TEMPERATURE_START: i32 = 1880;
/// First year of the CO₂ record.
pub const CO2_START: i32 = 1958;
/// First year of the precipitation record.
pub const PRECIPITATION_START: i32 = 2000;
/// Last generated year for every series.
pub const LAST_YEAR: i32 = 2024;

/// Baseline CO₂ concentration (ppm) before the first generated year.
const CO2_BASE_PPM: f64 = 315.0;

/// Baseline annual precipitation (mm).
const PRECIPITATION_BASE_MM: f64 = 1000.0;

/// Generate the full bundle for `seed`.
pub fn generate_bundle(seed: u64) -> ClimateBundle {
    let mut rng = StdRng::seed_from_u64(seed);

    let bundle = ClimateBundle {
        temperature: temperature_series(&mut rng),
        co2: co2_series(&mut rng),
        precipitation: precipitation_series(&mut rng),
    };

    info!(
        seed,
        temperature = bundle.temperature.len(),
        co2 = bundle.co2.len(),
        precipitation = bundle.precipitation.len(),
        "generated synthetic climate series"
    );

    bundle
}

/// Temperature anomaly (°C): linear warming plus a quadratic acceleration term.
fn temperature_series(rng: &mut StdRng) -> Series {
    let noise = Uniform::new(-0.125, 0.125);
    let span = f64::from(LAST_YEAR - TEMPERATURE_START);

    (TEMPERATURE_START..=LAST_YEAR)
        .map(|year| {
            let t = f64::from(year - TEMPERATURE_START);
            let trend = t * 0.009;
            let acceleration = (t / span).powi(2) * 0.3;
            Observation::new(year, -0.2 + trend + acceleration + rng.sample(noise))
        })
        .collect()
}

/// CO₂ concentration (ppm): a running level whose yearly increase itself grows.
fn co2_series(rng: &mut StdRng) -> Series {
    let noise = Uniform::new(-1.0, 1.0);
    let mut level = CO2_BASE_PPM;

    (CO2_START..=LAST_YEAR)
        .map(|year| {
            level += 1.5 + f64::from(year - CO2_START) * 0.025;
            Observation::new(year, level + rng.sample(noise))
        })
        .collect()
}

/// Annual precipitation (mm): a slow oscillation over a mild upward drift.
fn precipitation_series(rng: &mut StdRng) -> Series {
    let noise = Uniform::new(-40.0, 40.0);

    (PRECIPITATION_START..=LAST_YEAR)
        .map(|year| {
            let t = f64::from(year - PRECIPITATION_START);
            let variation = (t * 0.3).sin() * 50.0;
            let trend = t * 0.5;
            Observation::new(
                year,
                PRECIPITATION_BASE_MM + variation + trend + rng.sample(noise),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_cover_expected_years() {
        let b = generate_bundle(7);
        assert_eq!(b.temperature.len(), 145);
        assert_eq!(b.co2.len(), 67);
        assert_eq!(b.precipitation.len(), 25);

        assert_eq!(b.temperature.first().map(|o| o.year), Some(TEMPERATURE_START));
        assert_eq!(b.co2.first().map(|o| o.year), Some(CO2_START));
        assert_eq!(b.precipitation.last().map(|o| o.year), Some(LAST_YEAR));

        for s in [&b.temperature, &b.co2, &b.precipitation] {
            assert!(s.windows(2).all(|w| w[1].year == w[0].year + 1));
            assert!(s.iter().all(|o| o.value.is_finite()));
        }
    }

    #[test]
    fn same_seed_same_bundle() {
        assert_eq!(generate_bundle(42), generate_bundle(42));
        assert_ne!(generate_bundle(42), generate_bundle(43));
    }

    #[test]
    fn values_stay_near_their_shapes() {
        let b = generate_bundle(1);
        let first_temp = b.temperature[0].value;
        assert!((-0.325..=-0.075).contains(&first_temp), "temp {first_temp}");

        // Level after the first increment is 316.5, observed with ±1 ppm noise.
        let first_co2 = b.co2[0].value;
        assert!((315.5..=317.5).contains(&first_co2), "co2 {first_co2}");

        for o in &b.precipitation {
            assert!((900.0..=1110.0).contains(&o.value), "precip {o:?}");
        }
    }
}

//! Seeded synthetic listings for demos and tests.

use chrono::{NaiveDateTime, TimeDelta};
use polars::prelude::{DataFrame, NamedFrom, PolarsError, Series};
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_distr::{Normal, NormalError};
use thiserror::Error;

const PROPERTY_TYPES: &[&str] = &["Departamento", "Casa", "Oficina", "Local Comercial", "Terreno"];
const COMMUNES: &[&str] = &[
    "Las Condes",
    "Providencia",
    "Ñuñoa",
    "Vitacura",
    "La Reina",
    "Santiago Centro",
    "Maipú",
    "Puente Alto",
    "San Miguel",
    "La Florida",
];
const STATES: &[&str] = &["Disponible", "Reservado", "Vendido", "En Remodelación"];
const STATE_WEIGHTS: &[f64] = &[0.6, 0.15, 0.2, 0.05];
const BEDROOMS: &[i64] = &[1, 2, 3, 4, 5];
const BEDROOM_WEIGHTS: &[f64] = &[0.1, 0.3, 0.3, 0.2, 0.1];
const BATHROOMS: &[i64] = &[1, 2, 3, 4];
const BATHROOM_WEIGHTS: &[f64] = &[0.2, 0.4, 0.3, 0.1];

/// Share of descriptions left empty, in percent.
const MISSING_DESCRIPTION_PERCENT: usize = 5;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("invalid normal distribution: {0}")]
    Normal(#[from] NormalError),
    #[error("invalid choice weights: {0}")]
    Weights(#[from] WeightedError),
    #[error("failed to build sample frame: {0}")]
    Frame(#[from] PolarsError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    pub records: usize,
    pub seed: u64,
    /// Publication dates fall between 1 and 365 days before this.
    pub reference_time: NaiveDateTime,
}

impl SampleOptions {
    pub fn new(reference_time: NaiveDateTime) -> Self {
        Self {
            records: 150,
            seed: 42,
            reference_time,
        }
    }
}

/// Build a listings frame with the raw-input column layout.
///
/// Prices and areas are drawn from normal distributions, truncated to whole
/// numbers and made non-negative. The same options always produce the same
/// frame.
pub fn generate_listings(options: &SampleOptions) -> Result<DataFrame, SampleError> {
    let n = options.records;
    let mut rng = StdRng::seed_from_u64(options.seed);

    let ids: Vec<String> = (1..=n).map(|i| format!("PROP-{i:04}")).collect();
    let types = uniform_choices(&mut rng, PROPERTY_TYPES, n);
    let communes = uniform_choices(&mut rng, COMMUNES, n);
    let prices = whole_normal(&mut rng, 250_000.0, 100_000.0, n)?;
    let areas = whole_normal(&mut rng, 80.0, 30.0, n)?;
    let bedrooms = weighted_choices(&mut rng, BEDROOMS, BEDROOM_WEIGHTS, n)?;
    let bathrooms = weighted_choices(&mut rng, BATHROOMS, BATHROOM_WEIGHTS, n)?;
    let states = weighted_choices(&mut rng, STATES, STATE_WEIGHTS, n)?;
    let dates: Vec<String> = (0..n)
        .map(|_| {
            let age = TimeDelta::days(rng.gen_range(1..=365));
            (options.reference_time - age)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .collect();

    let mut descriptions: Vec<Option<String>> = (1..=n)
        .map(|i| Some(format!("Propiedad {i} en excelente ubicación")))
        .collect();
    let missing = n * MISSING_DESCRIPTION_PERCENT / 100;
    for idx in index::sample(&mut rng, n, missing) {
        descriptions[idx] = None;
    }

    let df = DataFrame::new(vec![
        Series::new("id_propiedad".into(), ids).into(),
        Series::new("tipo_propiedad".into(), types).into(),
        Series::new("comuna".into(), communes).into(),
        Series::new("precio".into(), prices).into(),
        Series::new("superficie_m2".into(), areas).into(),
        Series::new("habitaciones".into(), bedrooms).into(),
        Series::new("banos".into(), bathrooms).into(),
        Series::new("estado".into(), states).into(),
        Series::new("fecha_publicacion".into(), dates).into(),
        Series::new("descripcion".into(), descriptions).into(),
    ])?;
    Ok(df)
}

fn uniform_choices<T: Copy>(rng: &mut StdRng, values: &[T], n: usize) -> Vec<T> {
    (0..n)
        .map(|_| values[rng.gen_range(0..values.len())])
        .collect()
}

fn weighted_choices<T: Copy>(
    rng: &mut StdRng,
    values: &[T],
    weights: &[f64],
    n: usize,
) -> Result<Vec<T>, WeightedError> {
    let dist = WeightedIndex::new(weights)?;
    Ok((0..n).map(|_| values[dist.sample(rng)]).collect())
}

fn whole_normal(rng: &mut StdRng, mean: f64, std: f64, n: usize) -> Result<Vec<i64>, NormalError> {
    let dist = Normal::new(mean, std)?;
    Ok((0..n)
        .map(|_| (dist.sample(rng) as i64).abs())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn options() -> SampleOptions {
        let reference = NaiveDate::from_ymd_opt(2024, 6, 30)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("reference");
        SampleOptions::new(reference)
    }

    #[test]
    fn same_seed_same_frame() {
        let first = generate_listings(&options()).expect("first");
        let second = generate_listings(&options()).expect("second");
        assert!(first.equals_missing(&second));
    }

    #[test]
    fn different_seed_different_prices() {
        let first = generate_listings(&options()).expect("first");
        let other = SampleOptions {
            seed: 7,
            ..options()
        };
        let second = generate_listings(&other).expect("second");
        assert!(!first.equals_missing(&second));
    }

    #[test]
    fn shape_and_value_ranges() {
        let df = generate_listings(&options()).expect("sample");
        assert_eq!(df.height(), 150);
        assert_eq!(df.width(), 10);

        let ids = df.column("id_propiedad").expect("ids").str().expect("str");
        assert_eq!(ids.get(0), Some("PROP-0001"));
        assert_eq!(ids.get(149), Some("PROP-0150"));

        let prices = df.column("precio").expect("precio").i64().expect("i64");
        assert!(prices.into_iter().flatten().all(|p| p >= 0));

        let descriptions = df.column("descripcion").expect("descripcion");
        assert_eq!(descriptions.null_count(), 7);

        let dates = df.column("fecha_publicacion").expect("fecha").str().expect("str");
        for date in dates.into_iter().flatten() {
            let parsed = NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").expect("date");
            let age = (options().reference_time - parsed).num_days();
            assert!((1..=365).contains(&age), "age {age} out of range");
        }
    }
}

use ordered_float::OrderedFloat;

use crate::normalize::NormalizedSample;

/// Snitt over verdier som finnes. `None` hvis ingen.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for v in values {
        sum += v;
        cnt += 1;
    }
    if cnt == 0 { None } else { Some(sum / cnt as f64) }
}

pub fn max<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    values.into_iter().map(OrderedFloat).max().map(|v| v.0)
}

pub fn min<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    values.into_iter().map(OrderedFloat).min().map(|v| v.0)
}

/// Høydemeter: summerer kun positive deltaer mellom påfølgende høydesampler.
pub fn elevation_gain(samples: &[NormalizedSample]) -> Option<f64> {
    let alts: Vec<f64> = samples.iter().filter_map(|s| s.altitude).collect();
    if alts.is_empty() { return None; }
    let gain = alts
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 0.0)
        .sum::<f64>();
    Some(gain)
}

/// Distanse (m) = siste minus første distanseverdi i utvalget.
pub fn distance_covered(samples: &[NormalizedSample]) -> Option<f64> {
    let mut it = samples.iter().filter_map(|s| s.distance_m);
    let first = it.next()?;
    let last = it.last().unwrap_or(first);
    Some(last - first)
}

/// Arbeid (J): trapesintegrasjon av effekt over tid,
/// snitt av to påfølgende effektmålinger * dt.
pub fn energy_joules(samples: &[NormalizedSample]) -> Option<f64> {
    let pts: Vec<(f64, f64)> = samples
        .iter()
        .filter_map(|s| s.watts.map(|w| (s.t, w)))
        .collect();
    if pts.is_empty() { return None; }
    let joules = pts
        .windows(2)
        .map(|w| {
            let dt = (w[1].0 - w[0].0).max(0.0);
            (w[0].1 + w[1].1) / 2.0 * dt
        })
        .sum::<f64>();
    Some(joules)
}

/// Forløpt tid (s) fra første til siste sample.
pub fn elapsed_seconds(samples: &[NormalizedSample]) -> Option<f64> {
    let first = samples.first()?;
    let last = samples.last()?;
    Some((last.t - first.t).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(t: f64) -> NormalizedSample {
        NormalizedSample { t, ..Default::default() }
    }

    #[test]
    fn energy_uses_trapezoid_between_power_samples() {
        let samples = vec![
            NormalizedSample { speed_mps: Some(5.0), ..s(0.0) },
            NormalizedSample { speed_mps: Some(10.0), ..s(10.0) },
            NormalizedSample { watts: Some(200.0), ..s(20.0) },
            NormalizedSample { watts: Some(300.0), ..s(30.0) },
        ];
        let j = energy_joules(&samples).unwrap();
        assert!((j - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn descents_do_not_reduce_gain() {
        let alts = [100.0, 105.0, 102.0, 110.0];
        let samples: Vec<_> = alts
            .iter()
            .enumerate()
            .map(|(i, a)| NormalizedSample { altitude: Some(*a), ..s(i as f64) })
            .collect();
        assert_eq!(elevation_gain(&samples), Some(13.0));
    }

    #[test]
    fn single_distance_sample_covers_zero() {
        let samples = vec![NormalizedSample { distance_m: Some(420.0), ..s(3.0) }, s(4.0)];
        assert_eq!(distance_covered(&samples), Some(0.0));
    }

    #[test]
    fn empty_inputs_give_none() {
        assert_eq!(mean(Vec::<f64>::new()), None);
        assert_eq!(max(Vec::<f64>::new()), None);
        assert_eq!(energy_joules(&[]), None);
        assert_eq!(elevation_gain(&[s(0.0)]), None);
    }
}

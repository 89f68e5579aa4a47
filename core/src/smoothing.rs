use ordered_float::OrderedFloat;

/// Robust 3-punkts medianfilter på (x, y)-punkter, kun y filtreres.
/// Endepunkter bruker seg selv som naboverdi (repeteres) for å holde lengden.
pub fn median3(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }
    let n = points.len();
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        let a0 = if i > 0 { points[i - 1].1 } else { points[i].1 };
        let a1 = points[i].1;
        let a2 = if i + 1 < n { points[i + 1].1 } else { points[i].1 };

        let mut win = [OrderedFloat(a0), OrderedFloat(a1), OrderedFloat(a2)];
        win.sort();
        out.push((points[i].0, win[1].0)); // median
    }

    out
}

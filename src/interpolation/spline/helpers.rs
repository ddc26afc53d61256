/// Stores spacings `h[i] = x[i+1] - x[i]` between adjacent knots
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut h = Vec::with_capacity(n - 1);

    for i in 0..n - 1 {
        h.push(x[i+1] - x[i]);
    }

    h
}


/// First differences `(y[i+1] - y[i]) / h[i]`
pub(crate) fn deltas(y: &[f64], h: &[f64]) -> Vec<f64> {
    let n = y.len();
    let mut d = Vec::with_capacity(n - 1);
    for i in 0..n - 1 { d.push((y[i+1] - y[i]) / h[i]); }
    d
}


/// Index `lo` of the segment `[x[lo], x[lo+1]]` holding `xq`;
/// `xq == x[n-1]` maps to the last segment.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}

//=====================================================================
// Adaptive Gauss-Kronrod quadrature (7-point Gauss, 15-point Kronrod),
// following the QUADPACK QAG scheme with bisection of the interval
// that carries the largest error estimate.
//=====================================================================

// Kronrod abscissae on [-1, 1], largest first. XGK[1], XGK[3] and XGK[5]
// are also the Gauss abscissae, XGK[7] is the center.
const XGK: [f64; 8] = [
    0.991455371120812639206854697526329,
    0.949107912342758524526189684047851,
    0.864864423359769072789712788640926,
    0.741531185599394439863864773280788,
    0.586087235467691130294144845693013,
    0.405845151377397166906606412076961,
    0.207784955007898467600689403773245,
    0.000000000000000000000000000000000,
];

const WGK: [f64; 8] = [
    0.022935322010529224963732008058970,
    0.063092092629978553290700663189204,
    0.104790010322250183839876322541518,
    0.140653259715525918745189590510238,
    0.169004726639267902826583426598550,
    0.190350578064785409913256402421014,
    0.204432940075298892414161999234649,
    0.209482141084727828012999174891714,
];

const WG: [f64; 4] = [
    0.129484966168869693270611432679082,
    0.279705391489276667901467771423780,
    0.381830050505118944950369775488975,
    0.417959183673469387755102040816327,
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadOptions {
    pub eps_abs: f64,
    pub eps_rel: f64,
    /// Maximum number of subintervals.
    pub limit: usize,
}

impl Default for QuadOptions {
    fn default() -> Self {
        Self {
            eps_abs: 1.49e-8,
            eps_rel: 1.49e-8,
            limit: 50,
        }
    }
}

/// Integral estimate together with an estimate of its absolute error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadResult {
    pub value: f64,
    pub abs_error: f64,
}

#[derive(Debug, Clone, Copy)]
struct Subinterval {
    a: f64,
    b: f64,
    value: f64,
    abs_error: f64,
}

impl Subinterval {
    fn new<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> Self {
        let QuadResult { value, abs_error } = gauss_kronrod_15(f, a, b);
        Self { a, b, value, abs_error }
    }
}

/// Single G7/K15 rule on [a, b] with the QUADPACK error estimate.
pub fn gauss_kronrod_15<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64) -> QuadResult {
    let center = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);

    let f_center = f(center);
    let mut result_kronrod = f_center * WGK[7];
    let mut result_gauss = f_center * WG[3];
    let mut result_abs = f_center.abs() * WGK[7];
    let mut samples = [(0.0, 0.0); 7];

    for j in 0..7 {
        let abscissa = half_length * XGK[j];
        let f_lower = f(center - abscissa);
        let f_upper = f(center + abscissa);
        samples[j] = (f_lower, f_upper);
        result_kronrod += WGK[j] * (f_lower + f_upper);
        result_abs += WGK[j] * (f_lower.abs() + f_upper.abs());
        if j % 2 == 1 {
            result_gauss += WG[j / 2] * (f_lower + f_upper);
        }
    }

    let mean = 0.5 * result_kronrod;
    let mut result_asc = WGK[7] * (f_center - mean).abs();
    for (j, (f_lower, f_upper)) in samples.iter().enumerate() {
        result_asc += WGK[j] * ((f_lower - mean).abs() + (f_upper - mean).abs());
    }

    let scale = half_length.abs();
    let result_abs = result_abs * scale;
    let result_asc = result_asc * scale;
    let mut abs_error = ((result_kronrod - result_gauss) * half_length).abs();
    if result_asc != 0.0 && abs_error != 0.0 {
        abs_error = result_asc * (200.0 * abs_error / result_asc).powf(1.5).min(1.0);
    }
    if result_abs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        abs_error = abs_error.max(50.0 * f64::EPSILON * result_abs);
    }

    QuadResult {
        value: result_kronrod * half_length,
        abs_error,
    }
}

/// Adaptive integration of `f` from `a` to `b`.
///
/// Returns the best estimate once the requested tolerance or the
/// subinterval limit is reached; the latter is logged as a warning.
pub fn quad<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, options: &QuadOptions) -> QuadResult {
    if a == b {
        return QuadResult::default();
    }

    let mut subintervals = vec![Subinterval::new(&f, a, b)];
    loop {
        let value: f64 = subintervals.iter().map(|s| s.value).sum();
        let abs_error: f64 = subintervals.iter().map(|s| s.abs_error).sum();
        let tolerance = options.eps_abs.max(options.eps_rel * value.abs());

        if abs_error <= tolerance {
            return QuadResult { value, abs_error };
        }
        if abs_error.is_nan() {
            log::warn!("Non-finite integrand between {} and {}", a, b);
            return QuadResult { value, abs_error };
        }
        if subintervals.len() >= options.limit {
            log::warn!(
                "Subinterval limit ({}) reached between {} and {}, estimated error {:e}",
                options.limit,
                a,
                b,
                abs_error
            );
            return QuadResult { value, abs_error };
        }

        let worst = subintervals
            .iter()
            .enumerate()
            .max_by(|(_, lhs), (_, rhs)| lhs.abs_error.total_cmp(&rhs.abs_error))
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        let Subinterval { a: lo, b: hi, .. } = subintervals.swap_remove(worst);
        let mid = 0.5 * (lo + hi);
        if mid == lo || mid == hi {
            log::warn!("Subinterval around {} cannot be bisected further", mid);
            subintervals.push(Subinterval::new(&f, lo, hi));
            let value = subintervals.iter().map(|s| s.value).sum();
            return QuadResult { value, abs_error };
        }
        subintervals.push(Subinterval::new(&f, lo, mid));
        subintervals.push(Subinterval::new(&f, mid, hi));
    }
}

/// Iterated integration over a hyper-rectangle.
///
/// `ranges[0]` belongs to the first argument of `f` and is the innermost
/// integral. The reported error is that of the outermost integral.
pub fn nquad<F>(f: &F, ranges: &[(f64, f64)], options: &QuadOptions) -> QuadResult
where
    F: Fn(&[f64]) -> f64,
{
    if ranges.is_empty() {
        return QuadResult { value: f(&[]), abs_error: 0.0 };
    }
    integrate_level(f, ranges, &[], options)
}

fn integrate_level<F>(
    f: &F,
    ranges: &[(f64, f64)],
    outer: &[f64],
    options: &QuadOptions,
) -> QuadResult
where
    F: Fn(&[f64]) -> f64,
{
    let level = ranges.len() - 1;
    let (a, b) = ranges[level];
    quad(
        |x| {
            let mut point = Vec::with_capacity(ranges.len() + outer.len());
            point.push(x);
            point.extend_from_slice(outer);
            if level == 0 {
                f(&point)
            } else {
                integrate_level(f, &ranges[..level], &point, options).value
            }
        },
        a,
        b,
        options,
    )
}

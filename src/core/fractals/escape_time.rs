use crate::core::data::complex::Complex;
use crate::core::fractals::iteration_fn::IterationFunction;

/// Number of iterations completed before the orbit of `z0` under
/// `iteration_fn(·, c)` leaves the disc of radius `radius`.
///
/// Returns `max_iterations` when the orbit stays bounded for every
/// iteration. A magnitude that is not `<= radius` counts as escaped, so an
/// orbit that overflows to infinity or NaN terminates instead of running to
/// the cap.
#[inline]
pub fn escape_time<F>(
    z0: Complex,
    c: Complex,
    radius: f64,
    max_iterations: u32,
    iteration_fn: &F,
) -> u32
where
    F: IterationFunction + ?Sized,
{
    let radius_squared = radius * radius;

    // squaring is exact enough only while r² stays a normal float
    if radius_squared.is_normal() {
        iterate_until(z0, c, max_iterations, iteration_fn, |z| {
            !(z.magnitude_squared() <= radius_squared)
        })
    } else {
        iterate_until(z0, c, max_iterations, iteration_fn, |z| {
            !(z.magnitude() <= radius)
        })
    }
}

#[inline(always)]
fn iterate_until<F, E>(
    z0: Complex,
    c: Complex,
    max_iterations: u32,
    iteration_fn: &F,
    escaped: E,
) -> u32
where
    F: IterationFunction + ?Sized,
    E: Fn(Complex) -> bool,
{
    let mut z = z0;

    for iteration in 0..max_iterations {
        if escaped(z) {
            return iteration;
        }
        z = iteration_fn.apply(z, c);
    }

    max_iterations
}

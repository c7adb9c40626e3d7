// helpers for printing and ordering `Complex` values

use std::cmp::Ordering;

use num::Complex;

// sort a vector of complex numbers lexicographically, using their real part first
pub(crate) fn complex_sort_mut(v: &mut [Complex<f64>]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

/// compact formatting for Complex, used in trace logs
#[allow(clippy::float_cmp)]
pub(crate) fn complex_fmt(c: &Complex<f64>) -> String {
    let r = c.re;
    let i = c.im;
    if i == 0.0 {
        format!("{r}")
    } else if i == 1.0 {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}

#[cfg(test)]
mod test {
    use super::{complex_fmt, complex_sort_mut};

    #[test]
    fn fmt() {
        assert_eq!(complex_fmt(&complex!(2.0)), "2");
        assert_eq!(complex_fmt(&complex!(2.0, 1.0)), "(2+i)");
        assert_eq!(complex_fmt(&complex!(-1.5, -3.0)), "(-1.5+i-3)");
    }

    #[test]
    fn sort() {
        let mut v = vec![complex!(1.0, 1.0), complex!(-1.0), complex!(1.0, -1.0)];
        complex_sort_mut(&mut v);
        assert_eq!(v, vec![complex!(-1.0), complex!(1.0, -1.0), complex!(1.0, 1.0)]);
    }
}

extern crate nalgebra as na;

//three-term recurrence: P0 = 1, P1 = x, (k+1) P_{k+1} = (2k+1) x P_k - k P_{k-1}

pub fn recurrence_pair(n: usize, x: &na::DVector<f64>) -> (na::DVector<f64>, na::DVector<f64>) {
    let size = x.len();
    let mut p_prev = na::DVector::from_element(size, 1.0);
    let mut p_curr = x.clone();

    for k in 1..n {
        let kf = k as f64;
        for i in 0..size {
            let p_next = ((2.0 * kf + 1.0) * x[i] * p_curr[i] - kf * p_prev[i]) / (kf + 1.0);
            p_prev[i] = p_curr[i];
            p_curr[i] = p_next;
        }
    }

    (p_prev, p_curr)
}

pub fn eval(n: usize, x: f64) -> f64 {
    if n == 0 {
        return 1.0;
    }

    let mut p_prev = 1.0;
    let mut p_curr = x;
    for k in 1..n {
        let kf = k as f64;
        let p_next = ((2.0 * kf + 1.0) * x * p_curr - kf * p_prev) / (kf + 1.0);
        p_prev = p_curr;
        p_curr = p_next;
    }
    p_curr
}

//! VCA-controlled integrator cells.
//!
//! Both cells are op-amp integrators whose input current passes through an
//! exponential VCA, so the integration rate is `level / RC` for a VCA gain
//! `level`. State is advanced with [`step_rk2`]/[`step_rk2_system`] and
//! clamped to the op-amp rails after every step.
//!
//! [`step_rk2`]: crate::step_rk2
//! [`step_rk2_system`]: crate::step_rk2_system

use crate::lanes::Sample;
use crate::ode::{step_rk2, step_rk2_system};

/// One-pole inverting lowpass integrator.
///
/// ```text
/// dv/dt = −level/RC · (v_in + v)
/// ```
///
/// The steady state is `−v_in`, so the cell inverts.
#[derive(Debug, Clone, Copy)]
pub struct LowpassCell<T: Sample> {
    rc: f32,
    limit: f32,
    voltage: T,
}

impl<T: Sample> LowpassCell<T> {
    /// Create a cell with time constant `rc` seconds, clamped to `±limit` volts.
    pub fn new(rc: f32, limit: f32) -> Self {
        Self {
            rc,
            limit,
            voltage: T::ZERO,
        }
    }

    /// Advance by `dt` seconds and return the new output voltage.
    #[inline]
    pub fn process(&mut self, dt: f32, v_in: T, level: T) -> T {
        let rad_per_s = -level / T::splat(self.rc);
        self.voltage = step_rk2(dt, self.voltage, |v| rad_per_s * (v_in + v)).saturate(self.limit);
        self.voltage
    }

    /// Current output voltage.
    #[inline]
    pub fn voltage(&self) -> T {
        self.voltage
    }

    /// Discharge the integrator.
    pub fn reset(&mut self) {
        self.voltage = T::ZERO;
    }
}

/// Two-integrator state-variable filter.
///
/// With `hp = −(in + lp − 2·q·bp)` the integrators obey
///
/// ```text
/// d(lp)/dt = −level/RC · bp
/// d(bp)/dt = −level/RC · hp
/// ```
///
/// `q` is the gain of the damping VCA; the returned bandpass output is
/// `−2·q·bp`.
#[derive(Debug, Clone, Copy)]
pub struct SvfCell<T: Sample> {
    rc: f32,
    limit: f32,
    lp: T,
    bp: T,
    hp: T,
}

impl<T: Sample> SvfCell<T> {
    /// Create a cell with time constant `rc` seconds, clamped to `±limit` volts.
    pub fn new(rc: f32, limit: f32) -> Self {
        Self {
            rc,
            limit,
            lp: T::ZERO,
            bp: T::ZERO,
            hp: T::ZERO,
        }
    }

    /// Advance by `dt` seconds; returns the scaled bandpass output.
    #[inline]
    pub fn process(&mut self, dt: f32, input: T, level: T, q: T) -> T {
        let rad_per_s = -level / T::splat(self.rc);
        let two_q = T::splat(2.0) * q;

        let [lp, bp] = step_rk2_system(dt, [self.lp, self.bp], |s| {
            let hp = -(input + s[0] - two_q * s[1]);
            [rad_per_s * s[1], rad_per_s * hp]
        });

        self.lp = lp.saturate(self.limit);
        self.bp = bp.saturate(self.limit);
        let out = -(self.bp * two_q);
        self.hp = -(input + self.lp + out);
        out
    }

    /// Lowpass integrator voltage.
    #[inline]
    pub fn lp(&self) -> T {
        self.lp
    }

    /// Bandpass integrator voltage.
    #[inline]
    pub fn bp(&self) -> T {
        self.bp
    }

    /// Highpass voltage from the last step.
    #[inline]
    pub fn hp(&self) -> T {
        self.hp
    }

    /// Discharge both integrators.
    pub fn reset(&mut self) {
        self.lp = T::ZERO;
        self.bp = T::ZERO;
        self.hp = T::ZERO;
    }
}

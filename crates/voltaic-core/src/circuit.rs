//! Nonlinear analog sub-circuit models.
//!
//! These functions model the active parts the engines are built from:
//!
//! - [`ota_current`] - Operational transconductance amplifier output current
//! - [`v_to_i_converter`] - Op-amp/BJT voltage-to-current converter feeding
//!   an OTA bias pin
//! - [`exp_vca_level`] / [`vca_level_to_pin_voltage`] - 2164-style
//!   exponential VCA control law (−33 mV/dB) and its inverse
//! - [`q_factor_to_voltage`] - Control voltage that sets a given SVF Q
//!
//! All voltages are in volts, currents in amperes, resistances in ohms.

use libm::log10f;

/// Thermal voltage `kT/q` at 40 °C (the die temperature of a warm module).
pub const THERMAL_VOLTAGE: f32 = 8.617333262145e-5 * (40.0 + 273.15);

/// Largest `|Δv / 2Vt|` fed to the Padé approximant (`2√3`).
///
/// The approximant reaches its maximum (about 0.99) here and would fall
/// back toward zero beyond it, so clamping keeps the curve monotonic.
pub const OTA_Z_LIMIT: f32 = 3.464_101_6;

/// Exponential VCA control sensitivity, volts per dB.
pub const VCA_VOLTS_PER_DB: f32 = -33e-3;

/// Collector saturation voltage of the V-to-I converter transistor.
pub const V_TO_I_COLLECTOR_SAT: f32 = -10.0;

/// Default bias-network resistance when a converter has no bias input.
pub const V_TO_I_OPEN_BIAS_R: f32 = 1e12;

/// Output current of an OTA.
///
/// `i_abc · tanh((vp − vn) / 2Vt)`, with tanh replaced by the Padé
/// approximant `p(z) = 12z(12 + z²) / (36z² + (12 + z²)²)`.
///
/// # Arguments
/// * `vp` - Non-inverting input voltage
/// * `vn` - Inverting input voltage
/// * `i_abc` - Amplifier bias current
///
/// # Example
/// ```rust
/// use voltaic_core::ota_current;
///
/// assert_eq!(ota_current(0.0, 0.0, 1e-3), 0.0);
/// // Far overdriven: within 2% of the bias current
/// assert!((ota_current(1.0, 0.0, 1e-3) - 1e-3).abs() < 2e-5);
/// ```
#[inline]
pub fn ota_current(vp: f32, vn: f32, i_abc: f32) -> f32 {
    let z = ((vp - vn) / (2.0 * THERMAL_VOLTAGE)).clamp(-OTA_Z_LIMIT, OTA_Z_LIMIT);
    let q = 12.0 + z * z;
    let p = 12.0 * z * q / (36.0 * z * z + q * q);
    i_abc * p
}

/// Output current of a voltage-to-current converter.
///
/// The converter is an inverting summing amplifier whose output drives a
/// BJT. Inputs `vc` (through `rc`) and `vp` (through `rp`) sum at the
/// op-amp's inverting node against feedback resistor `rfb`.
///
/// The nominal output `−(vc·rfb/rc + vp·rfb/rp)` is first clipped at the
/// collector saturation voltage; the op-amp's inverting node voltage is then
/// back-solved from the clipped output through the resistor network, and the
/// current through `rfb` is returned, floored at zero (the transistor cannot
/// sink reverse current).
///
/// # Arguments
/// * `rfb` - Feedback resistor
/// * `vc` - Control voltage
/// * `rc` - Control input resistor
/// * `vp` - Bias voltage (`0.0` when unused)
/// * `rp` - Bias resistor ([`V_TO_I_OPEN_BIAS_R`] when unused)
///
/// # Example
/// ```rust
/// use voltaic_core::{v_to_i_converter, V_TO_I_OPEN_BIAS_R};
///
/// // 1 V into 100k with 100k feedback: 10 uA
/// let i = v_to_i_converter(100e3, 1.0, 100e3, 0.0, V_TO_I_OPEN_BIAS_R);
/// assert!((i - 10e-6).abs() < 1e-9);
/// // Negative control voltages turn the converter off
/// assert_eq!(v_to_i_converter(100e3, -1.0, 100e3, 0.0, V_TO_I_OPEN_BIAS_R), 0.0);
/// ```
#[inline]
pub fn v_to_i_converter(rfb: f32, vc: f32, rc: f32, vp: f32, rp: f32) -> f32 {
    let v_nominal = -(vc * rfb / rc + vp * rfb / rp);
    let vout = v_nominal.max(V_TO_I_COLLECTOR_SAT);

    // Node equation at the inverting input, scaled by rc·rp·rfb.
    let n_rc = rp * rfb;
    let n_rp = rc * rfb;
    let n_rfb = rc * rp;
    let vneg = (vc * n_rc + vp * n_rp + vout * n_rfb) / (n_rc + n_rp + n_rfb);

    ((vneg - vout) / rfb).max(0.0)
}

/// Gain of an exponential VCA for a control-port voltage.
///
/// `10^(v / (−33 mV/dB · 20))`: every −33 mV adds 1 dB of gain.
#[inline]
pub fn exp_vca_level(v: f32) -> f32 {
    libm::powf(10.0, v / (VCA_VOLTS_PER_DB * 20.0))
}

/// Control-port voltage that produces a given VCA gain.
///
/// Gains at or below zero map to `off_voltage` (the fully closed rail).
#[inline]
pub fn vca_level_to_pin_voltage(level: f32, off_voltage: f32) -> f32 {
    if level > 0.0 {
        VCA_VOLTS_PER_DB * 20.0 * log10f(level)
    } else {
        off_voltage
    }
}

/// Control voltage that sets a state-variable filter to quality factor `q`.
///
/// The Q control runs the SVF damping path through an exponential VCA, so
/// the voltage is `−VCA_VOLTS_PER_DB · 20 · log10(2q)`.
#[inline]
pub fn q_factor_to_voltage(q: f32) -> f32 {
    -VCA_VOLTS_PER_DB * 20.0 * log10f(2.0 * q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use libm::tanhf;

    #[test]
    fn ota_is_odd_and_bounded() {
        for i in -100..=100 {
            let dv = i as f32 * 1e-3;
            let pos = ota_current(dv, 0.0, 1.0);
            let neg = ota_current(-dv, 0.0, 1.0);
            assert_eq!(pos, -neg);
            assert!(pos.abs() <= 1.0);
        }
    }

    #[test]
    fn ota_tracks_tanh() {
        let vt2 = 2.0 * THERMAL_VOLTAGE;
        for i in -30..=30 {
            let z = i as f32 * 0.1;
            let approx = ota_current(z * vt2, 0.0, 1.0);
            assert!((approx - tanhf(z)).abs() < 0.03, "z = {z}: {approx} vs {}", tanhf(z));
        }
    }

    #[test]
    fn ota_is_monotonic() {
        let mut prev = ota_current(-1.0, 0.0, 1.0);
        for i in -999..=1000 {
            let cur = ota_current(i as f32 * 1e-3, 0.0, 1.0);
            assert!(cur >= prev - 1e-6, "{cur} < {prev}");
            prev = cur;
        }
    }

    #[test]
    fn ota_saturates_near_bias_current() {
        let sat = ota_current(0.5, 0.0, 2e-3);
        assert!((sat / 2e-3 - 0.98974).abs() < 1e-4, "{sat}");
        assert_eq!(ota_current(5.0, 0.0, 2e-3), sat);
        assert_eq!(ota_current(0.0, 0.5, 2e-3), -sat);
    }

    #[test]
    fn v_to_i_is_linear_before_saturation() {
        let rfb = 47e3;
        let i1 = v_to_i_converter(rfb, 1.0, 22e3, 0.0, V_TO_I_OPEN_BIAS_R);
        let i2 = v_to_i_converter(rfb, 2.0, 22e3, 0.0, V_TO_I_OPEN_BIAS_R);
        assert!((i1 - 1.0 / 22e3).abs() < 1e-9);
        assert!((i2 - 2.0 * i1).abs() < 1e-9);
    }

    #[test]
    fn v_to_i_saturates_at_collector_limit() {
        // Nominal output -47k/22k * 12 V < -10 V, so the output clips and the
        // current falls short of vc/rc.
        let rfb = 47e3;
        let i = v_to_i_converter(rfb, 12.0, 22e3, 0.0, V_TO_I_OPEN_BIAS_R);
        assert!(i < 12.0 / 22e3);
        let j = v_to_i_converter(rfb, 20.0, 22e3, 0.0, V_TO_I_OPEN_BIAS_R);
        assert!(j > i, "current still grows through the input resistor");
    }

    #[test]
    fn v_to_i_sums_bias_input() {
        let i = v_to_i_converter(47e3, 0.0, 22e3, 6.0, 62e3);
        assert!((i - 6.0 / 62e3).abs() < 1e-9);
    }

    #[test]
    fn v_to_i_never_negative() {
        assert_eq!(v_to_i_converter(47e3, -5.0, 22e3, 0.0, V_TO_I_OPEN_BIAS_R), 0.0);
    }

    #[test]
    fn vca_law_round_trips() {
        assert!((exp_vca_level(0.0) - 1.0).abs() < 1e-6);
        // -33 mV * 20 = -0.66 V per decade of gain
        assert!((exp_vca_level(-0.66) - 10.0).abs() < 1e-4);
        let v = vca_level_to_pin_voltage(0.25, 10.5);
        assert!((exp_vca_level(v) - 0.25).abs() < 1e-5);
        assert_eq!(vca_level_to_pin_voltage(0.0, 10.5), 10.5);
    }

    #[test]
    fn q_voltage_is_zero_at_half() {
        assert!(q_factor_to_voltage(0.5).abs() < 1e-6);
        // q = 40 -> 0.66 * log10(80)
        assert!((q_factor_to_voltage(40.0) - 1.256).abs() < 1e-3);
    }
}

//! Mars Sol Date (MSD) conversions.
//!
//! MSD = (JD − 2451549.5 + k) / 1.02749125 + 44796.0, where `k` is a small
//! correction in days tied to the longitude of the Airy-0 reference crater.

use crate::instant::Instant;
use crate::julian::{instant_to_jd, jd_to_instant};

/// Default correction term `k`, in days.
pub const DEFAULT_MSD_CORRECTION: f64 = 0.00014;

/// Julian Date anchoring the MSD count (2000-01-06T00:00:00).
pub const MSD_EPOCH_JD: f64 = 2_451_549.5;

/// Length of a sol in Earth days.
pub const MARS_SOL_RATIO: f64 = 1.027_491_25;

/// MSD at [`MSD_EPOCH_JD`] before correction.
pub const MSD_EPOCH_OFFSET: f64 = 44_796.0;

/// Julian Date → Mars Sol Date with an explicit correction `k`.
pub fn jd_to_msd_with(jd: f64, k: f64) -> f64 {
    (jd - MSD_EPOCH_JD + k) / MARS_SOL_RATIO + MSD_EPOCH_OFFSET
}

/// Mars Sol Date → Julian Date with an explicit correction `k`.
///
/// Algebraic inverse of [`jd_to_msd_with`] for the same `k`.
pub fn msd_to_jd_with(msd: f64, k: f64) -> f64 {
    (msd - MSD_EPOCH_OFFSET) * MARS_SOL_RATIO - k + MSD_EPOCH_JD
}

/// Julian Date → Mars Sol Date using [`DEFAULT_MSD_CORRECTION`].
pub fn jd_to_msd(jd: f64) -> f64 {
    jd_to_msd_with(jd, DEFAULT_MSD_CORRECTION)
}

/// Mars Sol Date → Julian Date using [`DEFAULT_MSD_CORRECTION`].
pub fn msd_to_jd(msd: f64) -> f64 {
    msd_to_jd_with(msd, DEFAULT_MSD_CORRECTION)
}

pub fn instant_to_msd(t: Instant) -> f64 {
    jd_to_msd(instant_to_jd(t))
}

pub fn msd_to_instant(msd: f64) -> Instant {
    jd_to_instant(msd_to_jd(msd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_point() {
        let msd = jd_to_msd(MSD_EPOCH_JD);
        assert!((msd - 44_796.000_14).abs() < 1e-5, "msd = {msd}");
    }

    #[test]
    fn zero_correction_anchor_is_exact() {
        assert_eq!(jd_to_msd_with(MSD_EPOCH_JD, 0.0), MSD_EPOCH_OFFSET);
        assert_eq!(msd_to_jd_with(MSD_EPOCH_OFFSET, 0.0), MSD_EPOCH_JD);
    }

    #[test]
    fn one_sol_per_ratio_days() {
        let a = jd_to_msd(2_460_000.0);
        let b = jd_to_msd(2_460_000.0 + MARS_SOL_RATIO);
        assert!((b - a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn defaulted_matches_explicit() {
        let jd = 2_459_000.25;
        assert_eq!(jd_to_msd(jd), jd_to_msd_with(jd, DEFAULT_MSD_CORRECTION));
        let msd = 52_000.5;
        assert_eq!(msd_to_jd(msd), msd_to_jd_with(msd, DEFAULT_MSD_CORRECTION));
    }

    #[test]
    fn roundtrip_custom_k() {
        let jd = 2_460_310.5;
        let k = 0.00096;
        let back = msd_to_jd_with(jd_to_msd_with(jd, k), k);
        assert!((back - jd).abs() <= 4.0 * f64::EPSILON * jd);
    }

    #[test]
    fn instant_msd_roundtrip() {
        let t = Instant::new(1_700_000_000, 0);
        let back = msd_to_instant(instant_to_msd(t));
        let err = back.normalized().seconds - t.seconds;
        assert!(err == 0 || err == -1, "err = {err}");
    }
}

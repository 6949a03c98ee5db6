//! Precomputed elliptic anti-aliasing cascades.
//!
//! One entry per [`SupportedRate`], ascending. Each section is normalized
//! (`a0 = 1`) and listed as `sos([b0, b1, b2], [a1, a2])`.

use super::{AaDesign, SupportedRate};
use crate::sos::SosCoefficients;

const fn sos(b: [f32; 3], a: [f32; 2]) -> SosCoefficients {
    SosCoefficients::new(b, a)
}

/// Shared interpolation/decimation cascades for the ladder profile.
///
/// Oversampled to at least 120 kHz; the same cascade serves both roles.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) static LADDER: [AaDesign; SupportedRate::COUNT] = [
    // 8000 Hz, 15x, order 6
    AaDesign { oversampling_factor: 15, sections: &[
        sos([3.42306291e-03, 6.53522273e-03, 3.42306291e-03], [-1.13209947e+00, 3.65774415e-01]),
        sos([1.00000000e+00, 1.42136933e+00, 1.00000000e+00], [-9.55595652e-01, 5.55195466e-01]),
        sos([1.00000000e+00, 1.05842861e+00, 1.00000000e+00], [-8.35474882e-01, 8.34840828e-01]),
    ] },
    // 11025 Hz, 11x, order 6
    AaDesign { oversampling_factor: 11, sections: &[
        sos([3.26702718e-03, 6.22983576e-03, 3.26702718e-03], [-1.14130758e+00, 3.70354990e-01]),
        sos([1.00000000e+00, 1.40863044e+00, 1.00000000e+00], [-9.69538649e-01, 5.57917370e-01]),
        sos([1.00000000e+00, 1.03994151e+00, 1.00000000e+00], [-8.54328717e-01, 8.35728285e-01]),
    ] },
    // 12000 Hz, 10x, order 6
    AaDesign { oversampling_factor: 10, sections: &[
        sos([3.42306291e-03, 6.53522273e-03, 3.42306291e-03], [-1.13209947e+00, 3.65774415e-01]),
        sos([1.00000000e+00, 1.42136933e+00, 1.00000000e+00], [-9.55595652e-01, 5.55195466e-01]),
        sos([1.00000000e+00, 1.05842861e+00, 1.00000000e+00], [-8.35474882e-01, 8.34840828e-01]),
    ] },
    // 22050 Hz, 6x, order 8
    AaDesign { oversampling_factor: 6, sections: &[
        sos([6.47358611e-04, 1.15520581e-03, 6.47358611e-04], [-1.35050917e+00, 4.84676642e-01]),
        sos([1.00000000e+00, 7.82770646e-01, 1.00000000e+00], [-1.24212580e+00, 6.01760550e-01]),
        sos([1.00000000e+00, 9.46030879e-02, 1.00000000e+00], [-1.12297856e+00, 7.63193697e-01]),
        sos([1.00000000e+00, -1.84341946e-01, 1.00000000e+00], [-1.08165394e+00, 9.20980215e-01]),
    ] },
    // 24000 Hz, 5x, order 8
    AaDesign { oversampling_factor: 5, sections: &[
        sos([9.93374792e-04, 1.81504524e-03, 9.93374792e-04], [-1.28123502e+00, 4.43830055e-01]),
        sos([1.00000000e+00, 9.69736619e-01, 1.00000000e+00], [-1.14056361e+00, 5.73274737e-01]),
        sos([1.00000000e+00, 3.23593812e-01, 1.00000000e+00], [-9.84074266e-01, 7.48267989e-01]),
        sos([1.00000000e+00, 4.69137219e-02, 1.00000000e+00], [-9.17508757e-01, 9.16260523e-01]),
    ] },
    // 44100 Hz, 3x, order 14
    AaDesign { oversampling_factor: 3, sections: &[
        sos([2.33467524e-04, 3.85146244e-04, 2.33467524e-04], [-1.46779940e+00, 5.59300587e-01]),
        sos([1.00000000e+00, 2.84344987e-01, 1.00000000e+00], [-1.39743012e+00, 6.47280334e-01]),
        sos([1.00000000e+00, -4.81735913e-01, 1.00000000e+00], [-1.30466696e+00, 7.63828718e-01]),
        sos([1.00000000e+00, -8.14458422e-01, 1.00000000e+00], [-1.22921466e+00, 8.60153843e-01]),
        sos([1.00000000e+00, -9.63424410e-01, 1.00000000e+00], [-1.18164620e+00, 9.24279595e-01]),
        sos([1.00000000e+00, -1.03102512e+00, 1.00000000e+00], [-1.15782377e+00, 9.63657309e-01]),
        sos([1.00000000e+00, -1.05757483e+00, 1.00000000e+00], [-1.15253824e+00, 9.89272846e-01]),
    ] },
    // 48000 Hz, 3x, order 12
    AaDesign { oversampling_factor: 3, sections: &[
        sos([1.96007199e-04, 3.15285921e-04, 1.96007199e-04], [-1.49750952e+00, 5.79487424e-01]),
        sos([1.00000000e+00, 1.64502383e-01, 1.00000000e+00], [-1.43900370e+00, 6.63196513e-01]),
        sos([1.00000000e+00, -5.92180251e-01, 1.00000000e+00], [-1.36241892e+00, 7.75058824e-01]),
        sos([1.00000000e+00, -9.07488127e-01, 1.00000000e+00], [-1.30223398e+00, 8.69165582e-01]),
        sos([1.00000000e+00, -1.04177534e+00, 1.00000000e+00], [-1.26951947e+00, 9.34679234e-01]),
        sos([1.00000000e+00, -1.09276235e+00, 1.00000000e+00], [-1.26454687e+00, 9.80322986e-01]),
    ] },
    // 88200 Hz, 2x, order 8
    AaDesign { oversampling_factor: 2, sections: &[
        sos([2.14361684e-04, 3.44618768e-04, 2.14361684e-04], [-1.51452462e+00, 5.91486912e-01]),
        sos([1.00000000e+00, 1.79381294e-01, 1.00000000e+00], [-1.47183116e+00, 6.80568376e-01]),
        sos([1.00000000e+00, -5.38705333e-01, 1.00000000e+00], [-1.43146550e+00, 8.07687680e-01]),
        sos([1.00000000e+00, -7.87002288e-01, 1.00000000e+00], [-1.44140131e+00, 9.35689662e-01]),
    ] },
    // 96000 Hz, 2x, order 8
    AaDesign { oversampling_factor: 2, sections: &[
        sos([1.61637850e-04, 2.48564833e-04, 1.61637850e-04], [-1.55379599e+00, 6.19242969e-01]),
        sos([1.00000000e+00, -3.56106191e-03, 1.00000000e+00], [-1.52397985e+00, 7.01779035e-01]),
        sos([1.00000000e+00, -7.04269454e-01, 1.00000000e+00], [-1.49925562e+00, 8.20191196e-01]),
        sos([1.00000000e+00, -9.36222412e-01, 1.00000000e+00], [-1.51854586e+00, 9.39911675e-01]),
    ] },
    // 176400 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.95938020e-01, 3.91858763e-01, 1.95938020e-01], [-4.62313019e-01, 2.46047822e-01]),
    ] },
    // 192000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.74603587e-01, 3.49188678e-01, 1.74603587e-01], [-5.65216145e-01, 2.63611998e-01]),
    ] },
    // 352800 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.99874107e-02, 1.39948456e-01, 6.99874107e-02], [-1.16347041e+00, 4.43393682e-01]),
    ] },
    // 384000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.09620331e-02, 1.21896769e-01, 6.09620331e-02], [-1.22760212e+00, 4.71422957e-01]),
    ] },
    // 705600 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([2.13438638e-02, 4.26550556e-02, 2.13438638e-02], [-1.57253460e+00, 6.57877382e-01]),
    ] },
    // 768000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.83197956e-02, 3.66063440e-02, 1.83197956e-02], [-1.60702602e+00, 6.80271956e-01]),
    ] },
];

/// Interpolation cascades for the equalizer profile (120 kHz, 3x bandwidth headroom).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) static EQUALIZER_UP: [AaDesign; SupportedRate::COUNT] = [
    // 8000 Hz, 15x, order 4
    AaDesign { oversampling_factor: 15, sections: &[
        sos([1.44208376e-04, 2.15422675e-04, 1.44208376e-04], [-1.75298317e+00, 7.75007227e-01]),
        sos([1.00000000e+00, 1.72189731e-01, 1.00000000e+00], [-1.85199502e+00, 9.01687724e-01]),
    ] },
    // 11025 Hz, 11x, order 4
    AaDesign { oversampling_factor: 11, sections: &[
        sos([3.47236726e-04, 5.94611382e-04, 3.47236726e-04], [-1.66651262e+00, 7.05884392e-01]),
        sos([1.00000000e+00, 7.58730216e-01, 1.00000000e+00], [-1.77900341e+00, 8.69327961e-01]),
    ] },
    // 12000 Hz, 10x, order 4
    AaDesign { oversampling_factor: 10, sections: &[
        sos([4.63786610e-04, 8.16220909e-04, 4.63786610e-04], [-1.63450649e+00, 6.81471340e-01]),
        sos([1.00000000e+00, 9.17818354e-01, 1.00000000e+00], [-1.74936370e+00, 8.57701633e-01]),
    ] },
    // 22050 Hz, 6x, order 6
    AaDesign { oversampling_factor: 6, sections: &[
        sos([1.95909107e-04, 3.07811266e-04, 1.95909107e-04], [-1.58181808e+00, 6.40141057e-01]),
        sos([1.00000000e+00, 1.34444168e-01, 1.00000000e+00], [-1.58691814e+00, 7.40684153e-01]),
        sos([1.00000000e+00, -4.56209108e-01, 1.00000000e+00], [-1.64635749e+00, 9.03421507e-01]),
    ] },
    // 24000 Hz, 5x, order 6
    AaDesign { oversampling_factor: 5, sections: &[
        sos([3.60375579e-04, 6.11714197e-04, 3.60375579e-04], [-1.50089044e+00, 5.82797128e-01]),
        sos([1.00000000e+00, 5.06808919e-01, 1.00000000e+00], [-1.48367876e+00, 6.99513376e-01]),
        sos([1.00000000e+00, -8.08861216e-02, 1.00000000e+00], [-1.52492835e+00, 8.87536413e-01]),
    ] },
    // 44100 Hz, 3x, order 8
    AaDesign { oversampling_factor: 3, sections: &[
        sos([6.47358611e-04, 1.15520581e-03, 6.47358611e-04], [-1.35050917e+00, 4.84676642e-01]),
        sos([1.00000000e+00, 7.82770646e-01, 1.00000000e+00], [-1.24212580e+00, 6.01760550e-01]),
        sos([1.00000000e+00, 9.46030879e-02, 1.00000000e+00], [-1.12297856e+00, 7.63193697e-01]),
        sos([1.00000000e+00, -1.84341946e-01, 1.00000000e+00], [-1.08165394e+00, 9.20980215e-01]),
    ] },
    // 48000 Hz, 3x, order 8
    AaDesign { oversampling_factor: 3, sections: &[
        sos([4.56315687e-04, 7.94441994e-04, 4.56315687e-04], [-1.40446545e+00, 5.18222739e-01]),
        sos([1.00000000e+00, 6.11274299e-01, 1.00000000e+00], [-1.31956356e+00, 6.25927896e-01]),
        sos([1.00000000e+00, -1.00659178e-01, 1.00000000e+00], [-1.22823335e+00, 7.76420985e-01]),
        sos([1.00000000e+00, -3.75767056e-01, 1.00000000e+00], [-1.20548228e+00, 9.25277956e-01]),
    ] },
    // 88200 Hz, 2x, order 6
    AaDesign { oversampling_factor: 2, sections: &[
        sos([6.91751141e-04, 1.23689749e-03, 6.91751141e-04], [-1.40714871e+00, 5.20902227e-01]),
        sos([1.00000000e+00, 8.42431018e-01, 1.00000000e+00], [-1.35717505e+00, 6.56002263e-01]),
        sos([1.00000000e+00, 2.97097489e-01, 1.00000000e+00], [-1.36759134e+00, 8.70920336e-01]),
    ] },
    // 96000 Hz, 2x, order 6
    AaDesign { oversampling_factor: 2, sections: &[
        sos([5.02504803e-04, 8.78421990e-04, 5.02504803e-04], [-1.45413648e+00, 5.51330003e-01]),
        sos([1.00000000e+00, 6.85942380e-01, 1.00000000e+00], [-1.42143582e+00, 6.77242054e-01]),
        sos([1.00000000e+00, 1.15756990e-01, 1.00000000e+00], [-1.44850505e+00, 8.78995879e-01]),
    ] },
    // 176400 Hz, 1x, order 6
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.91751141e-04, 1.23689749e-03, 6.91751141e-04], [-1.40714871e+00, 5.20902227e-01]),
        sos([1.00000000e+00, 8.42431018e-01, 1.00000000e+00], [-1.35717505e+00, 6.56002263e-01]),
        sos([1.00000000e+00, 2.97097489e-01, 1.00000000e+00], [-1.36759134e+00, 8.70920336e-01]),
    ] },
    // 192000 Hz, 1x, order 6
    AaDesign { oversampling_factor: 1, sections: &[
        sos([5.02504803e-04, 8.78421990e-04, 5.02504803e-04], [-1.45413648e+00, 5.51330003e-01]),
        sos([1.00000000e+00, 6.85942380e-01, 1.00000000e+00], [-1.42143582e+00, 6.77242054e-01]),
        sos([1.00000000e+00, 1.15756990e-01, 1.00000000e+00], [-1.44850505e+00, 8.78995879e-01]),
    ] },
    // 352800 Hz, 1x, order 6
    AaDesign { oversampling_factor: 1, sections: &[
        sos([7.63562466e-05, 9.37911276e-05, 7.63562466e-05], [-1.69760825e+00, 7.28764991e-01]),
        sos([1.00000000e+00, -5.40096033e-01, 1.00000000e+00], [-1.72321786e+00, 8.05120281e-01]),
        sos([1.00000000e+00, -1.04012920e+00, 1.00000000e+00], [-1.79287839e+00, 9.28245030e-01]),
    ] },
    // 384000 Hz, 1x, order 6
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.23104401e-05, 6.94740629e-05, 6.23104401e-05], [-1.72153665e+00, 7.48079159e-01]),
        sos([1.00000000e+00, -6.96283878e-01, 1.00000000e+00], [-1.74951535e+00, 8.19207305e-01]),
        sos([1.00000000e+00, -1.16050137e+00, 1.00000000e+00], [-1.81879173e+00, 9.33631596e-01]),
    ] },
    // 705600 Hz, 1x, order 4
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.08339911e-04, 1.50243615e-04, 1.08339911e-04], [-1.77824462e+00, 7.96098482e-01]),
        sos([1.00000000e+00, -5.03405956e-02, 1.00000000e+00], [-1.87131112e+00, 9.11379528e-01]),
    ] },
    // 768000 Hz, 1x, order 4
    AaDesign { oversampling_factor: 1, sections: &[
        sos([8.80491172e-05, 1.13851506e-04, 8.80491172e-05], [-1.79584317e+00, 8.11038264e-01]),
        sos([1.00000000e+00, -2.19769620e-01, 1.00000000e+00], [-1.88421935e+00, 9.18189356e-01]),
    ] },
];

/// Decimation cascades for the equalizer profile.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) static EQUALIZER_DOWN: [AaDesign; SupportedRate::COUNT] = [
    // 8000 Hz, 15x, order 16
    AaDesign { oversampling_factor: 15, sections: &[
        sos([1.27849152e-05, -1.15294016e-05, 1.27849152e-05], [-1.89076082e+00, 8.94920241e-01]),
        sos([1.00000000e+00, -1.81550212e+00, 1.00000000e+00], [-1.90419428e+00, 9.15590704e-01]),
        sos([1.00000000e+00, -1.91311657e+00, 1.00000000e+00], [-1.92211660e+00, 9.43157527e-01]),
        sos([1.00000000e+00, -1.93984732e+00, 1.00000000e+00], [-1.93701740e+00, 9.66048056e-01]),
        sos([1.00000000e+00, -1.95004731e+00, 1.00000000e+00], [-1.94692651e+00, 9.81207030e-01]),
        sos([1.00000000e+00, -1.95451979e+00, 1.00000000e+00], [-1.95288929e+00, 9.90199673e-01]),
        sos([1.00000000e+00, -1.95654696e+00, 1.00000000e+00], [-1.95649904e+00, 9.95393001e-01]),
        sos([1.00000000e+00, -1.95734415e+00, 1.00000000e+00], [-1.95907829e+00, 9.98656952e-01]),
    ] },
    // 11025 Hz, 11x, order 16
    AaDesign { oversampling_factor: 11, sections: &[
        sos([1.59399541e-05, -5.45523304e-06, 1.59399541e-05], [-1.85152256e+00, 8.59147179e-01]),
        sos([1.00000000e+00, -1.66827517e+00, 1.00000000e+00], [-1.86567107e+00, 8.86607422e-01]),
        sos([1.00000000e+00, -1.84052903e+00, 1.00000000e+00], [-1.88464921e+00, 9.23416484e-01]),
        sos([1.00000000e+00, -1.88895850e+00, 1.00000000e+00], [-1.90052671e+00, 9.54145238e-01]),
        sos([1.00000000e+00, -1.90758521e+00, 1.00000000e+00], [-1.91115958e+00, 9.74577353e-01]),
        sos([1.00000000e+00, -1.91577845e+00, 1.00000000e+00], [-1.91763851e+00, 9.86729328e-01]),
        sos([1.00000000e+00, -1.91949726e+00, 1.00000000e+00], [-1.92169110e+00, 9.93757870e-01]),
        sos([1.00000000e+00, -1.92096059e+00, 1.00000000e+00], [-1.92481123e+00, 9.98179459e-01]),
    ] },
    // 12000 Hz, 10x, order 16
    AaDesign { oversampling_factor: 10, sections: &[
        sos([1.74724987e-05, -2.65793181e-06, 1.74724987e-05], [-1.83684224e+00, 8.46022748e-01]),
        sos([1.00000000e+00, -1.60455772e+00, 1.00000000e+00], [-1.85073181e+00, 8.75957566e-01]),
        sos([1.00000000e+00, -1.80816772e+00, 1.00000000e+00], [-1.86939499e+00, 9.16147406e-01]),
        sos([1.00000000e+00, -1.86608225e+00, 1.00000000e+00], [-1.88504252e+00, 9.49754529e-01]),
        sos([1.00000000e+00, -1.88843627e+00, 1.00000000e+00], [-1.89555097e+00, 9.72128817e-01]),
        sos([1.00000000e+00, -1.89828300e+00, 1.00000000e+00], [-1.90199243e+00, 9.85446639e-01]),
        sos([1.00000000e+00, -1.90275515e+00, 1.00000000e+00], [-1.90608719e+00, 9.93153182e-01]),
        sos([1.00000000e+00, -1.90451538e+00, 1.00000000e+00], [-1.90935079e+00, 9.98002792e-01]),
    ] },
    // 22050 Hz, 6x, order 16
    AaDesign { oversampling_factor: 6, sections: &[
        sos([3.67003458e-05, 3.08516252e-05, 3.67003458e-05], [-1.72921734e+00, 7.53994379e-01]),
        sos([1.00000000e+00, -1.04633213e+00, 1.00000000e+00], [-1.73301180e+00, 8.01279004e-01]),
        sos([1.00000000e+00, -1.49728136e+00, 1.00000000e+00], [-1.73817883e+00, 8.65169236e-01]),
        sos([1.00000000e+00, -1.64018498e+00, 1.00000000e+00], [-1.74263646e+00, 9.18956353e-01]),
        sos([1.00000000e+00, -1.69729414e+00, 1.00000000e+00], [-1.74585766e+00, 9.54949897e-01]),
        sos([1.00000000e+00, -1.72280865e+00, 1.00000000e+00], [-1.74827060e+00, 9.76444779e-01]),
        sos([1.00000000e+00, -1.73447030e+00, 1.00000000e+00], [-1.75063420e+00, 9.88907702e-01]),
        sos([1.00000000e+00, -1.73907302e+00, 1.00000000e+00], [-1.75392950e+00, 9.96761482e-01]),
    ] },
    // 24000 Hz, 5x, order 16
    AaDesign { oversampling_factor: 5, sections: &[
        sos([5.41421251e-05, 6.11551260e-05, 5.41421251e-05], [-1.67503641e+00, 7.10371798e-01]),
        sos([1.00000000e+00, -7.40935436e-01, 1.00000000e+00], [-1.66871015e+00, 7.66060345e-01]),
        sos([1.00000000e+00, -1.30326567e+00, 1.00000000e+00], [-1.66021936e+00, 8.41290550e-01]),
        sos([1.00000000e+00, -1.49333046e+00, 1.00000000e+00], [-1.65322192e+00, 9.04610823e-01]),
        sos([1.00000000e+00, -1.57100117e+00, 1.00000000e+00], [-1.64887008e+00, 9.46976897e-01]),
        sos([1.00000000e+00, -1.60602637e+00, 1.00000000e+00], [-1.64694927e+00, 9.72274830e-01]),
        sos([1.00000000e+00, -1.62210241e+00, 1.00000000e+00], [-1.64717215e+00, 9.86942309e-01]),
        sos([1.00000000e+00, -1.62845914e+00, 1.00000000e+00], [-1.64981608e+00, 9.96186562e-01]),
    ] },
    // 44100 Hz, 3x, order 12
    AaDesign { oversampling_factor: 3, sections: &[
        sos([2.68627470e-04, 4.49235868e-04, 2.68627470e-04], [-1.45093297e+00, 5.48077112e-01]),
        sos([1.00000000e+00, 3.56445341e-01, 1.00000000e+00], [-1.37442858e+00, 6.39226382e-01]),
        sos([1.00000000e+00, -4.09182122e-01, 1.00000000e+00], [-1.27479281e+00, 7.60081618e-01]),
        sos([1.00000000e+00, -7.45642800e-01, 1.00000000e+00], [-1.19642609e+00, 8.60924455e-01]),
        sos([1.00000000e+00, -8.92243997e-01, 1.00000000e+00], [-1.15251661e+00, 9.30694207e-01]),
        sos([1.00000000e+00, -9.48436919e-01, 1.00000000e+00], [-1.14204907e+00, 9.79130351e-01]),
    ] },
    // 48000 Hz, 3x, order 10
    AaDesign { oversampling_factor: 3, sections: &[
        sos([2.57287527e-04, 4.26397322e-04, 2.57287527e-04], [-1.46657488e+00, 5.58547936e-01]),
        sos([1.00000000e+00, 3.12318565e-01, 1.00000000e+00], [-1.39841450e+00, 6.48946069e-01]),
        sos([1.00000000e+00, -4.43959552e-01, 1.00000000e+00], [-1.31299240e+00, 7.70865691e-01]),
        sos([1.00000000e+00, -7.61106497e-01, 1.00000000e+00], [-1.25520703e+00, 8.77567308e-01]),
        sos([1.00000000e+00, -8.77468526e-01, 1.00000000e+00], [-1.24463600e+00, 9.61716067e-01]),
    ] },
    // 88200 Hz, 2x, order 6
    AaDesign { oversampling_factor: 2, sections: &[
        sos([6.91751141e-04, 1.23689749e-03, 6.91751141e-04], [-1.40714871e+00, 5.20902227e-01]),
        sos([1.00000000e+00, 8.42431018e-01, 1.00000000e+00], [-1.35717505e+00, 6.56002263e-01]),
        sos([1.00000000e+00, 2.97097489e-01, 1.00000000e+00], [-1.36759134e+00, 8.70920336e-01]),
    ] },
    // 96000 Hz, 2x, order 6
    AaDesign { oversampling_factor: 2, sections: &[
        sos([5.02504803e-04, 8.78421990e-04, 5.02504803e-04], [-1.45413648e+00, 5.51330003e-01]),
        sos([1.00000000e+00, 6.85942380e-01, 1.00000000e+00], [-1.42143582e+00, 6.77242054e-01]),
        sos([1.00000000e+00, 1.15756990e-01, 1.00000000e+00], [-1.44850505e+00, 8.78995879e-01]),
    ] },
    // 176400 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.95938020e-01, 3.91858763e-01, 1.95938020e-01], [-4.62313019e-01, 2.46047822e-01]),
    ] },
    // 192000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.74603587e-01, 3.49188678e-01, 1.74603587e-01], [-5.65216145e-01, 2.63611998e-01]),
    ] },
    // 352800 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.99874107e-02, 1.39948456e-01, 6.99874107e-02], [-1.16347041e+00, 4.43393682e-01]),
    ] },
    // 384000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.09620331e-02, 1.21896769e-01, 6.09620331e-02], [-1.22760212e+00, 4.71422957e-01]),
    ] },
    // 705600 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([2.13438638e-02, 4.26550556e-02, 2.13438638e-02], [-1.57253460e+00, 6.57877382e-01]),
    ] },
    // 768000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.83197956e-02, 3.66063440e-02, 1.83197956e-02], [-1.60702602e+00, 6.80271956e-01]),
    ] },
];

/// Interpolation cascades for the dynamics profile (80 kHz, 2x bandwidth headroom).
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) static DYNAMICS_UP: [AaDesign; SupportedRate::COUNT] = [
    // 8000 Hz, 10x, order 4
    AaDesign { oversampling_factor: 10, sections: &[
        sos([4.63786610e-04, 8.16220909e-04, 4.63786610e-04], [-1.63450649e+00, 6.81471340e-01]),
        sos([1.00000000e+00, 9.17818354e-01, 1.00000000e+00], [-1.74936370e+00, 8.57701633e-01]),
    ] },
    // 11025 Hz, 8x, order 6
    AaDesign { oversampling_factor: 8, sections: &[
        sos([8.58405971e-05, 1.10355095e-04, 8.58405971e-05], [-1.68369279e+00, 7.17693063e-01]),
        sos([1.00000000e+00, -4.51272752e-01, 1.00000000e+00], [-1.70761645e+00, 7.97046177e-01]),
        sos([1.00000000e+00, -9.69385103e-01, 1.00000000e+00], [-1.77709771e+00, 9.25148961e-01]),
    ] },
    // 12000 Hz, 7x, order 6
    AaDesign { oversampling_factor: 7, sections: &[
        sos([1.23289409e-04, 1.76631634e-04, 1.23289409e-04], [-1.63990095e+00, 6.83607830e-01]),
        sos([1.00000000e+00, -1.84350251e-01, 1.00000000e+00], [-1.65709238e+00, 7.72217183e-01]),
        sos([1.00000000e+00, -7.46080513e-01, 1.00000000e+00], [-1.72410914e+00, 9.15596208e-01]),
    ] },
    // 22050 Hz, 4x, order 6
    AaDesign { oversampling_factor: 4, sections: &[
        sos([8.28104239e-04, 1.49680255e-03, 8.28104239e-04], [-1.37972564e+00, 5.03689463e-01]),
        sos([1.00000000e+00, 9.23962985e-01, 1.00000000e+00], [-1.31894849e+00, 6.44142088e-01]),
        sos([1.00000000e+00, 3.95355727e-01, 1.00000000e+00], [-1.31864199e+00, 8.66452582e-01]),
    ] },
    // 24000 Hz, 4x, order 6
    AaDesign { oversampling_factor: 4, sections: &[
        sos([8.28104239e-04, 1.49680255e-03, 8.28104239e-04], [-1.37972564e+00, 5.03689463e-01]),
        sos([1.00000000e+00, 9.23962985e-01, 1.00000000e+00], [-1.31894849e+00, 6.44142088e-01]),
        sos([1.00000000e+00, 3.95355727e-01, 1.00000000e+00], [-1.31864199e+00, 8.66452582e-01]),
    ] },
    // 44100 Hz, 2x, order 12
    AaDesign { oversampling_factor: 2, sections: &[
        sos([1.79111485e-03, 3.36261548e-03, 1.79111485e-03], [-1.13743427e+00, 3.66260569e-01]),
        sos([1.00000000e+00, 1.20719512e+00, 1.00000000e+00], [-9.11565008e-01, 5.12543165e-01]),
        sos([1.00000000e+00, 6.02914008e-01, 1.00000000e+00], [-6.39374195e-01, 6.90602186e-01]),
        sos([1.00000000e+00, 2.52534955e-01, 1.00000000e+00], [-4.37984152e-01, 8.26937992e-01]),
        sos([1.00000000e+00, 7.75467885e-02, 1.00000000e+00], [-3.22061575e-01, 9.15513587e-01]),
        sos([1.00000000e+00, 6.28451771e-03, 1.00000000e+00], [-2.73474858e-01, 9.74748983e-01]),
    ] },
    // 48000 Hz, 2x, order 10
    AaDesign { oversampling_factor: 2, sections: &[
        sos([1.56483717e-03, 2.92030174e-03, 1.56483717e-03], [-1.17455774e+00, 3.85298764e-01]),
        sos([1.00000000e+00, 1.15074177e+00, 1.00000000e+00], [-9.70672689e-01, 5.26603999e-01]),
        sos([1.00000000e+00, 5.31582897e-01, 1.00000000e+00], [-7.26313285e-01, 7.02981269e-01]),
        sos([1.00000000e+00, 1.94109007e-01, 1.00000000e+00], [-5.54517652e-01, 8.45646275e-01]),
        sos([1.00000000e+00, 5.47965468e-02, 1.00000000e+00], [-4.79572665e-01, 9.52220684e-01]),
    ] },
    // 88200 Hz, 1x, order 12
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.79111485e-03, 3.36261548e-03, 1.79111485e-03], [-1.13743427e+00, 3.66260569e-01]),
        sos([1.00000000e+00, 1.20719512e+00, 1.00000000e+00], [-9.11565008e-01, 5.12543165e-01]),
        sos([1.00000000e+00, 6.02914008e-01, 1.00000000e+00], [-6.39374195e-01, 6.90602186e-01]),
        sos([1.00000000e+00, 2.52534955e-01, 1.00000000e+00], [-4.37984152e-01, 8.26937992e-01]),
        sos([1.00000000e+00, 7.75467885e-02, 1.00000000e+00], [-3.22061575e-01, 9.15513587e-01]),
        sos([1.00000000e+00, 6.28451771e-03, 1.00000000e+00], [-2.73474858e-01, 9.74748983e-01]),
    ] },
    // 96000 Hz, 1x, order 10
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.56483717e-03, 2.92030174e-03, 1.56483717e-03], [-1.17455774e+00, 3.85298764e-01]),
        sos([1.00000000e+00, 1.15074177e+00, 1.00000000e+00], [-9.70672689e-01, 5.26603999e-01]),
        sos([1.00000000e+00, 5.31582897e-01, 1.00000000e+00], [-7.26313285e-01, 7.02981269e-01]),
        sos([1.00000000e+00, 1.94109007e-01, 1.00000000e+00], [-5.54517652e-01, 8.45646275e-01]),
        sos([1.00000000e+00, 5.47965468e-02, 1.00000000e+00], [-4.79572665e-01, 9.52220684e-01]),
    ] },
    // 176400 Hz, 1x, order 6
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.91751141e-04, 1.23689749e-03, 6.91751141e-04], [-1.40714871e+00, 5.20902227e-01]),
        sos([1.00000000e+00, 8.42431018e-01, 1.00000000e+00], [-1.35717505e+00, 6.56002263e-01]),
        sos([1.00000000e+00, 2.97097489e-01, 1.00000000e+00], [-1.36759134e+00, 8.70920336e-01]),
    ] },
    // 192000 Hz, 1x, order 6
    AaDesign { oversampling_factor: 1, sections: &[
        sos([5.02504803e-04, 8.78421990e-04, 5.02504803e-04], [-1.45413648e+00, 5.51330003e-01]),
        sos([1.00000000e+00, 6.85942380e-01, 1.00000000e+00], [-1.42143582e+00, 6.77242054e-01]),
        sos([1.00000000e+00, 1.15756990e-01, 1.00000000e+00], [-1.44850505e+00, 8.78995879e-01]),
    ] },
    // 352800 Hz, 1x, order 6
    AaDesign { oversampling_factor: 1, sections: &[
        sos([7.63562466e-05, 9.37911276e-05, 7.63562466e-05], [-1.69760825e+00, 7.28764991e-01]),
        sos([1.00000000e+00, -5.40096033e-01, 1.00000000e+00], [-1.72321786e+00, 8.05120281e-01]),
        sos([1.00000000e+00, -1.04012920e+00, 1.00000000e+00], [-1.79287839e+00, 9.28245030e-01]),
    ] },
    // 384000 Hz, 1x, order 6
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.23104401e-05, 6.94740629e-05, 6.23104401e-05], [-1.72153665e+00, 7.48079159e-01]),
        sos([1.00000000e+00, -6.96283878e-01, 1.00000000e+00], [-1.74951535e+00, 8.19207305e-01]),
        sos([1.00000000e+00, -1.16050137e+00, 1.00000000e+00], [-1.81879173e+00, 9.33631596e-01]),
    ] },
    // 705600 Hz, 1x, order 4
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.08339911e-04, 1.50243615e-04, 1.08339911e-04], [-1.77824462e+00, 7.96098482e-01]),
        sos([1.00000000e+00, -5.03405956e-02, 1.00000000e+00], [-1.87131112e+00, 9.11379528e-01]),
    ] },
    // 768000 Hz, 1x, order 4
    AaDesign { oversampling_factor: 1, sections: &[
        sos([8.80491172e-05, 1.13851506e-04, 8.80491172e-05], [-1.79584317e+00, 8.11038264e-01]),
        sos([1.00000000e+00, -2.19769620e-01, 1.00000000e+00], [-1.88421935e+00, 9.18189356e-01]),
    ] },
];

/// Decimation cascades for the dynamics profile.
#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) static DYNAMICS_DOWN: [AaDesign; SupportedRate::COUNT] = [
    // 8000 Hz, 10x, order 16
    AaDesign { oversampling_factor: 10, sections: &[
        sos([1.74724987e-05, -2.65793181e-06, 1.74724987e-05], [-1.83684224e+00, 8.46022748e-01]),
        sos([1.00000000e+00, -1.60455772e+00, 1.00000000e+00], [-1.85073181e+00, 8.75957566e-01]),
        sos([1.00000000e+00, -1.80816772e+00, 1.00000000e+00], [-1.86939499e+00, 9.16147406e-01]),
        sos([1.00000000e+00, -1.86608225e+00, 1.00000000e+00], [-1.88504252e+00, 9.49754529e-01]),
        sos([1.00000000e+00, -1.88843627e+00, 1.00000000e+00], [-1.89555097e+00, 9.72128817e-01]),
        sos([1.00000000e+00, -1.89828300e+00, 1.00000000e+00], [-1.90199243e+00, 9.85446639e-01]),
        sos([1.00000000e+00, -1.90275515e+00, 1.00000000e+00], [-1.90608719e+00, 9.93153182e-01]),
        sos([1.00000000e+00, -1.90451538e+00, 1.00000000e+00], [-1.90935079e+00, 9.98002792e-01]),
    ] },
    // 11025 Hz, 8x, order 16
    AaDesign { oversampling_factor: 8, sections: &[
        sos([2.28458309e-05, 6.85495861e-06, 2.28458309e-05], [-1.79651426e+00, 8.10683491e-01]),
        sos([1.00000000e+00, -1.41042952e+00, 1.00000000e+00], [-1.80827124e+00, 8.47262510e-01]),
        sos([1.00000000e+00, -1.70583736e+00, 1.00000000e+00], [-1.82413424e+00, 8.96543400e-01]),
        sos([1.00000000e+00, -1.79296606e+00, 1.00000000e+00], [-1.83751071e+00, 9.37903530e-01]),
        sos([1.00000000e+00, -1.82697868e+00, 1.00000000e+00], [-1.84658043e+00, 9.65516086e-01]),
        sos([1.00000000e+00, -1.84202935e+00, 1.00000000e+00], [-1.85227474e+00, 9.81981088e-01]),
        sos([1.00000000e+00, -1.84887890e+00, 1.00000000e+00], [-1.85613708e+00, 9.91518889e-01]),
        sos([1.00000000e+00, -1.85157727e+00, 1.00000000e+00], [-1.85962400e+00, 9.97525116e-01]),
    ] },
    // 12000 Hz, 7x, order 16
    AaDesign { oversampling_factor: 7, sections: &[
        sos([2.79174308e-05, 1.56664250e-05, 2.79174308e-05], [-1.76770492e+00, 7.86069996e-01]),
        sos([1.00000000e+00, -1.25883414e+00, 1.00000000e+00], [-1.77670663e+00, 8.27280516e-01]),
        sos([1.00000000e+00, -1.62177587e+00, 1.00000000e+00], [-1.78888474e+00, 8.82894847e-01]),
        sos([1.00000000e+00, -1.73200235e+00, 1.00000000e+00], [-1.79920477e+00, 9.29653670e-01]),
        sos([1.00000000e+00, -1.77543744e+00, 1.00000000e+00], [-1.80628315e+00, 9.60912839e-01]),
        sos([1.00000000e+00, -1.79473107e+00, 1.00000000e+00], [-1.81087559e+00, 9.79568474e-01]),
        sos([1.00000000e+00, -1.80352658e+00, 1.00000000e+00], [-1.81426259e+00, 9.90380916e-01]),
        sos([1.00000000e+00, -1.80699414e+00, 1.00000000e+00], [-1.81775362e+00, 9.97192369e-01]),
    ] },
    // 22050 Hz, 4x, order 16
    AaDesign { oversampling_factor: 4, sections: &[
        sos([9.74314780e-05, 1.37711747e-04, 9.74314780e-05], [-1.59261637e+00, 6.47353056e-01]),
        sos([1.00000000e+00, -2.94219878e-01, 1.00000000e+00], [-1.56519364e+00, 7.15705529e-01]),
        sos([1.00000000e+00, -9.81960881e-01, 1.00000000e+00], [-1.52839642e+00, 8.07626243e-01]),
        sos([1.00000000e+00, -1.23949615e+00, 1.00000000e+00], [-1.49778996e+00, 8.84625474e-01]),
        sos([1.00000000e+00, -1.34882542e+00, 1.00000000e+00], [-1.47786684e+00, 9.35956597e-01]),
        sos([1.00000000e+00, -1.39893677e+00, 1.00000000e+00], [-1.46698417e+00, 9.66536770e-01]),
        sos([1.00000000e+00, -1.42210887e+00, 1.00000000e+00], [-1.46262788e+00, 9.84243409e-01]),
        sos([1.00000000e+00, -1.43130155e+00, 1.00000000e+00], [-1.46352911e+00, 9.95397324e-01]),
    ] },
    // 24000 Hz, 4x, order 16
    AaDesign { oversampling_factor: 4, sections: &[
        sos([9.74314780e-05, 1.37711747e-04, 9.74314780e-05], [-1.59261637e+00, 6.47353056e-01]),
        sos([1.00000000e+00, -2.94219878e-01, 1.00000000e+00], [-1.56519364e+00, 7.15705529e-01]),
        sos([1.00000000e+00, -9.81960881e-01, 1.00000000e+00], [-1.52839642e+00, 8.07626243e-01]),
        sos([1.00000000e+00, -1.23949615e+00, 1.00000000e+00], [-1.49778996e+00, 8.84625474e-01]),
        sos([1.00000000e+00, -1.34882542e+00, 1.00000000e+00], [-1.47786684e+00, 9.35956597e-01]),
        sos([1.00000000e+00, -1.39893677e+00, 1.00000000e+00], [-1.46698417e+00, 9.66536770e-01]),
        sos([1.00000000e+00, -1.42210887e+00, 1.00000000e+00], [-1.46262788e+00, 9.84243409e-01]),
        sos([1.00000000e+00, -1.43130155e+00, 1.00000000e+00], [-1.46352911e+00, 9.95397324e-01]),
    ] },
    // 44100 Hz, 2x, order 10
    AaDesign { oversampling_factor: 2, sections: &[
        sos([2.47147477e-03, 4.68008071e-03, 2.47147477e-03], [-1.08909166e+00, 3.42723010e-01]),
        sos([1.00000000e+00, 1.29826448e+00, 1.00000000e+00], [-8.40340328e-01, 5.00534399e-01]),
        sos([1.00000000e+00, 7.43776254e-01, 1.00000000e+00], [-5.49893538e-01, 6.91539899e-01]),
        sos([1.00000000e+00, 4.24723977e-01, 1.00000000e+00], [-3.48795082e-01, 8.41459476e-01]),
        sos([1.00000000e+00, 2.89331378e-01, 1.00000000e+00], [-2.57028674e-01, 9.51166241e-01]),
    ] },
    // 48000 Hz, 2x, order 10
    AaDesign { oversampling_factor: 2, sections: &[
        sos([1.56483717e-03, 2.92030174e-03, 1.56483717e-03], [-1.17455774e+00, 3.85298764e-01]),
        sos([1.00000000e+00, 1.15074177e+00, 1.00000000e+00], [-9.70672689e-01, 5.26603999e-01]),
        sos([1.00000000e+00, 5.31582897e-01, 1.00000000e+00], [-7.26313285e-01, 7.02981269e-01]),
        sos([1.00000000e+00, 1.94109007e-01, 1.00000000e+00], [-5.54517652e-01, 8.45646275e-01]),
        sos([1.00000000e+00, 5.47965468e-02, 1.00000000e+00], [-4.79572665e-01, 9.52220684e-01]),
    ] },
    // 88200 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([4.47760494e-01, 8.95513661e-01, 4.47760494e-01], [5.33267789e-01, 2.57766861e-01]),
    ] },
    // 96000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([4.08937060e-01, 8.17865642e-01, 4.08937060e-01], [3.98731881e-01, 2.37007882e-01]),
    ] },
    // 176400 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.95938020e-01, 3.91858763e-01, 1.95938020e-01], [-4.62313019e-01, 2.46047822e-01]),
    ] },
    // 192000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.74603587e-01, 3.49188678e-01, 1.74603587e-01], [-5.65216145e-01, 2.63611998e-01]),
    ] },
    // 352800 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.99874107e-02, 1.39948456e-01, 6.99874107e-02], [-1.16347041e+00, 4.43393682e-01]),
    ] },
    // 384000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([6.09620331e-02, 1.21896769e-01, 6.09620331e-02], [-1.22760212e+00, 4.71422957e-01]),
    ] },
    // 705600 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([2.13438638e-02, 4.26550556e-02, 2.13438638e-02], [-1.57253460e+00, 6.57877382e-01]),
    ] },
    // 768000 Hz, 1x, order 2
    AaDesign { oversampling_factor: 1, sections: &[
        sos([1.83197956e-02, 3.66063440e-02, 1.83197956e-02], [-1.60702602e+00, 6.80271956e-01]),
    ] },
];

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Checked-in quarter-wave sine table for the fast trig tier.
//!
//! Entry `i` is `floor(sin(i * (π/2) / SIN_QTR_SEGMENTS) * 2^64)`; the last
//! entry is exactly `1.0`.

/// Number of linear segments covering `[0, π/2]`.
pub(crate) const SIN_QTR_SEGMENTS: u128 = 128;

#[rustfmt::skip]
const SIN_QTR_LUT: [u128; 129] = [
    0, 226369926147403916, 452705761816584062, 678973421663217291,
    905138830610008563, 1131167928978272246, 1357026677617194444, 1582681063030003905,
    1808097102496279521, 2033240849189623029, 2258078397289926196, 2482575887089462614,
    2706699510092035140, 2930415514104411061, 3153690208319278249, 3376489968388956814,
    3598781241489102188, 3820530551371637052, 4041704503406151161, 4262269789609009850,
    4482193193659413854, 4701441595901655037, 4919981978332814722, 5137781429575153478,
    5354807149832443554, 5571026455829497539, 5786406785734149388, 6000915704060946578,
    6214520906555814904, 6427190225060960324, 6638891632359275195, 6849593246997519366,
    7059263338087549766, 7267870330084875444, 7475382807543818422, 7681769519848564266,
    7886999385919389869, 8091041498893359742, 8293865130778785882, 8495439737082750293,
    8695734961410993272, 8894720640039474722, 9092366806456920045, 9288643695877666507,
    9483521749724130484, 9676971620078220517, 9868964174101025825, 10059470498420114690,
    10248461903483781988, 10435909927881590155, 10621786342630552900, 10806063155426316218,
    10988712614858696456, 11169707214590940608, 11349019697502079459, 11526623059791749741,
    11702490555046867136, 11876595698269537712, 12048912269865601182, 12219414319593205342,
    12388076170470817045, 12554872422644081165, 12719777957210945242, 12882767940004473735,
    13043817825332782212, 13202903359675528264, 13360000585336402458, 13515085844051069276,
    13668135780550014704, 13819127346075763910, 13968037801853939344, 14114844722517636516,
    14259525999484601767, 14402059844286703433, 14542424791851195002, 14680599703733276117,
    14816563771299464606, 14950296518861300145, 15081777806758907629, 15210987834393955862,
    15337907143211554841, 15462516619630642544, 15584797497922419931, 15704731363036400681,
    15822300153373650055, 15937486163506795261, 16050272046846397691, 16160640818253285484,
    16268575856596453009, 16374060907256142060, 16477080084571727796, 16577617874234040805,
    16675659135621764998, 16771189104081559483, 16864193393151561058, 16954657996727932439,
    17042569291174129989, 17127914037372573266, 17210679382718407431, 17290852863055058269,
    17368422404551288317, 17443376325519471440, 17515703338174812020, 17585392550335243823,
    17652433467061752556, 17716815992238875078, 17778530430095137256, 17837567486663201478,
    17893918271179503954, 17947574297423171006, 17998527484994012712, 18046770160529401457,
    18092295058859852118, 18135095324103129865, 18175164510696720811, 18212496584368510010,
    18247085923045520651, 18278927317700577563, 18308015973136767549, 18334347508709578402,
    18357917958986607856, 18378723774344743121, 18396761821504721065, 18412029384002988547,
    18424524162600791837, 18434244275630433513, 18441188259278644697, 18445355067807029947,
    18446744073709551616,
];

/// Returns the raw magnitude of table sample `i` (`0..=SIN_QTR_SEGMENTS`).
///
/// Out-of-range indices clamp to the `1.0` endpoint.
#[inline]
pub(crate) fn sin_qtr_sample(i: usize) -> u128 {
    SIN_QTR_LUT
        .get(i)
        .copied()
        .unwrap_or(SIN_QTR_LUT[SIN_QTR_LUT.len() - 1])
}

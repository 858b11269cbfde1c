#![allow(dead_code)]

//=====================================================================
// Shared fixtures for tests. The boron level schemes are built once
// and reused by every test that needs them.
//=====================================================================

use lazy_static::lazy_static;

use crate::constituents::{isotopic_composition, Element, Isotope, Parity, State};

// AME2020 masses
pub const B10_AMU: f64 = 10.012936862;
pub const B11_AMU: f64 = 11.009305166;

lazy_static! {
    pub static ref B10: Isotope = build_b10();
    pub static ref B11: Isotope = build_b11();
    pub static ref NATURAL_BORON: Element = build_natural_boron();
}

fn excited(label: &str, two_j: u32, parity: Parity, energy: f64, widths: &[(&str, f64)]) -> State {
    State::excited(label, two_j, parity, energy, widths.iter().copied()).unwrap()
}

fn build_b10() -> Isotope {
    Isotope::new(5, 10, B10_AMU).unwrap().with_level_scheme(
        State::ground("3^+_1", 6, Parity::Positive),
        vec![excited("1^+_1", 2, Parity::Positive, 0.718380, &[("3^+_1", 0.0)])],
    )
}

// Level scheme of 11B up to 9 MeV with partial widths in MeV
fn build_b11() -> Isotope {
    use Parity::{Negative, Positive};

    let ground_state = State::ground("3/2^-_1", 3, Negative);
    let excited_states = vec![
        excited("1/2^-_1", 1, Negative, 2.124693, &[("3/2^-_1", 0.117e-6)]),
        excited("5/2^-_1", 5, Negative, 4.44498, &[("3/2^-_1", 0.55e-6)]),
        excited(
            "3/2^-_2",
            3,
            Negative,
            5.02030,
            &[("3/2^-_1", 0.856 * 1.97e-6), ("1/2^-_1", 0.144 * 1.97e-6)],
        ),
        excited(
            "7/2^-_1",
            7,
            Negative,
            6.74185,
            &[("3/2^-_1", 0.70 * 0.030e-6), ("5/2^-_1", 0.30 * 0.030e-6)],
        ),
        excited(
            "1/2^+_1",
            1,
            Positive,
            6.79180,
            &[
                ("3/2^-_1", 0.675 * 0.39e-6),
                ("1/2^-_1", 0.285 * 0.39e-6),
                ("3/2^-_2", 0.04 * 0.39e-6),
            ],
        ),
        excited(
            "5/2^+_1",
            5,
            Positive,
            7.28551,
            &[
                ("3/2^-_1", 0.87 * 1.14e-6),
                ("5/2^-_1", 0.055 * 1.14e-6),
                ("3/2^-_2", 0.075 * 1.14e-6),
            ],
        ),
        excited(
            "3/2^+_1",
            3,
            Positive,
            7.97784,
            &[
                ("3/2^-_1", 0.462 * 1.15e-6),
                ("1/2^-_1", 0.532 * 1.15e-6),
                ("5/2^+_1", 0.0085 * 1.15e-6),
            ],
        ),
        excited(
            "3/2^-_3",
            3,
            Negative,
            8.5601,
            &[
                ("3/2^-_1", 0.56e-6),
                ("1/2^-_1", 0.30e-6),
                ("5/2^-_1", 0.05e-6),
                ("3/2^-_2", 0.09e-6),
            ],
        ),
        excited(
            "5/2^-_2",
            5,
            Negative,
            8.92047,
            &[("3/2^-_1", 0.95 * 4.374e-6), ("5/2^-_1", 0.045 * 4.374e-6)],
        ),
    ];

    Isotope::new(5, 11, B11_AMU)
        .unwrap()
        .with_level_scheme(ground_state, excited_states)
}

fn build_natural_boron() -> Element {
    let abundance = |a: u32| {
        isotopic_composition(5)
            .iter()
            .find(|(mass_number, _)| *mass_number == a)
            .map(|(_, abundance)| *abundance)
            .unwrap()
    };
    Element::new(5, vec![(B10.clone(), abundance(10)), (B11.clone(), abundance(11))]).unwrap()
}

//=====================================================================
// Isotopic compositions of the elements (IUPAC, Meija et al., Pure Appl.
// Chem. 88, 293 (2016)) as (mass number, abundance) pairs, indexed by
// proton number. Elements without stable isotopes have no entries.
//=====================================================================
#[rustfmt::skip]
pub static ISOTOPIC_COMPOSITIONS: [&[(u32, f64)]; 119] = [
    // 0 n
    &[],
    // 1 H
    &[(1, 0.99984426), (2, 0.00015574)],
    // 2 He
    &[(3, 1.343e-6), (4, 0.999998657)],
    // 3 Li
    &[(6, 0.07589), (7, 0.92411)],
    // 4 Be
    &[(9, 1.0)],
    // 5 B
    &[(10, 0.1982), (11, 0.8018)],
    // 6 C
    &[(12, 0.988922), (13, 0.011078)],
    // 7 N
    &[(14, 0.996337), (15, 0.003663)],
    // 8 O
    &[(16, 0.9976206), (17, 0.000379), (18, 0.0020004)],
    // 9 F
    &[(19, 1.0)],
    // 10 Ne
    &[(20, 0.904838), (21, 0.002697), (22, 0.092465)],
    // 11 Na
    &[(23, 1.0)],
    // 12 Mg
    &[(24, 0.78951), (25, 0.1002), (26, 0.11029)],
    // 13 Al
    &[(27, 1.0)],
    // 14 Si
    &[(28, 0.9222968), (29, 0.0468316), (30, 0.0308716)],
    // 15 P
    &[(31, 1.0)],
    // 16 S
    &[(32, 0.9504074), (33, 0.0074869), (34, 0.0419599), (36, 0.0001458)],
    // 17 Cl
    &[(35, 0.757647), (37, 0.242353)],
    // 18 Ar
    &[(36, 0.0033361), (38, 0.0006289), (40, 0.996035)],
    // 19 K
    &[(39, 0.932581), (40, 0.000117), (41, 0.067302)],
    // 20 Ca
    &[(40, 0.96941), (42, 0.00647), (43, 0.00135), (44, 0.02086), (46, 4e-5), (48, 0.00187)],
    // 21 Sc
    &[(45, 1.0)],
    // 22 Ti
    &[(46, 0.08249), (47, 0.07437), (48, 0.7372), (49, 0.05409), (50, 0.05185)],
    // 23 V
    &[(50, 0.002497), (51, 0.997503)],
    // 24 Cr
    &[(50, 0.043452), (52, 0.837895), (53, 0.095006), (54, 0.023647)],
    // 25 Mn
    &[(55, 1.0)],
    // 26 Fe
    &[(54, 0.05845), (56, 0.91754), (57, 0.021191), (58, 0.002819)],
    // 27 Co
    &[(59, 1.0)],
    // 28 Ni
    &[(58, 0.680769), (60, 0.262231), (61, 0.011399), (62, 0.036345), (64, 0.009256)],
    // 29 Cu
    &[(63, 0.69174), (65, 0.30826)],
    // 30 Zn
    &[(64, 0.491704), (66, 0.277306), (67, 0.040401), (68, 0.184483), (70, 0.006106)],
    // 31 Ga
    &[(69, 0.601079), (71, 0.398921)],
    // 32 Ge
    &[(70, 0.20526), (72, 0.27446), (73, 0.0776), (74, 0.36523), (76, 0.07745)],
    // 33 As
    &[(75, 1.0)],
    // 34 Se
    &[(74, 0.00863), (76, 0.0922), (77, 0.07594), (78, 0.23685), (80, 0.49813), (82, 0.08825)],
    // 35 Br
    &[(79, 0.50686), (81, 0.49314)],
    // 36 Kr
    &[(78, 0.003551), (80, 0.022856), (82, 0.11593), (83, 0.114996), (84, 0.569877), (86, 0.17279)],
    // 37 Rb
    &[(85, 0.721654), (87, 0.278346)],
    // 38 Sr
    &[(84, 0.005574), (86, 0.098566), (87, 0.070015), (88, 0.825845)],
    // 39 Y
    &[(89, 1.0)],
    // 40 Zr
    &[(90, 0.51452), (91, 0.11223), (92, 0.17146), (94, 0.1738), (96, 0.02799)],
    // 41 Nb
    &[(93, 1.0)],
    // 42 Mo
    &[
        (92, 0.14649), (94, 0.09187), (95, 0.15873), (96, 0.16673), (97, 0.09582), (98, 0.24292),
        (100, 0.09744),
    ],
    // 43 Tc
    &[],
    // 44 Ru
    &[
        (96, 0.05542), (98, 0.018687), (99, 0.127579), (100, 0.125985), (101, 0.1706),
        (102, 0.315519), (104, 0.18621),
    ],
    // 45 Rh
    &[(103, 1.0)],
    // 46 Pd
    &[(102, 0.0102), (104, 0.1114), (105, 0.2233), (106, 0.2733), (108, 0.2646), (110, 0.1172)],
    // 47 Ag
    &[(107, 0.518392), (109, 0.481608)],
    // 48 Cd
    &[
        (106, 0.01249), (108, 0.0089), (110, 0.12485), (111, 0.12804), (112, 0.24117),
        (113, 0.12225), (114, 0.28729), (116, 0.07501),
    ],
    // 49 In
    &[(113, 0.04281), (115, 0.95719)],
    // 50 Sn
    &[
        (112, 0.00973), (114, 0.00659), (115, 0.00337), (116, 0.14536), (117, 0.07676),
        (118, 0.24223), (119, 0.08585), (120, 0.32593), (122, 0.04629), (124, 0.05789),
    ],
    // 51 Sb
    &[(121, 0.57213), (123, 0.42787)],
    // 52 Te
    &[
        (120, 0.00096), (122, 0.02603), (123, 0.00908), (124, 0.04816), (125, 0.07139),
        (126, 0.18952), (128, 0.31687), (130, 0.33799),
    ],
    // 53 I
    &[(127, 1.0)],
    // 54 Xe
    &[
        (124, 0.000952), (126, 0.00089), (128, 0.019102), (129, 0.264006), (130, 0.04071),
        (131, 0.212324), (132, 0.269086), (134, 0.104357), (136, 0.088573),
    ],
    // 55 Cs
    &[(133, 1.0)],
    // 56 Ba
    &[
        (130, 0.001058), (132, 0.001012), (134, 0.02417), (135, 0.06592), (136, 0.078532),
        (137, 0.112317), (138, 0.716991),
    ],
    // 57 La
    &[(138, 0.0008881), (139, 0.9991119)],
    // 58 Ce
    &[(136, 0.00186), (138, 0.00251), (140, 0.88449), (142, 0.11114)],
    // 59 Pr
    &[(141, 1.0)],
    // 60 Nd
    &[
        (142, 0.27153), (143, 0.12173), (144, 0.23798), (145, 0.08293), (146, 0.17189),
        (148, 0.05756), (150, 0.05638),
    ],
    // 61 Pm
    &[],
    // 62 Sm
    &[
        (144, 0.03078), (147, 0.15004), (148, 0.11248), (149, 0.13824), (150, 0.07365),
        (152, 0.2674), (154, 0.22741),
    ],
    // 63 Eu
    &[(151, 0.4781), (153, 0.5219)],
    // 64 Gd
    &[
        (152, 0.002029), (154, 0.021809), (155, 0.147998), (156, 0.204664), (157, 0.156518),
        (158, 0.248347), (160, 0.218635),
    ],
    // 65 Tb
    &[(159, 1.0)],
    // 66 Dy
    &[
        (156, 0.00056), (158, 0.00095), (160, 0.02329), (161, 0.18889), (162, 0.25475),
        (163, 0.24896), (164, 0.2826),
    ],
    // 67 Ho
    &[(165, 1.0)],
    // 68 Er
    &[
        (162, 0.001391), (164, 0.016006), (166, 0.335014), (167, 0.228724), (168, 0.269852),
        (170, 0.149013),
    ],
    // 69 Tm
    &[(169, 1.0)],
    // 70 Yb
    &[
        (168, 0.00123), (170, 0.02982), (171, 0.14086), (172, 0.21686), (173, 0.16103),
        (174, 0.32025), (176, 0.12995),
    ],
    // 71 Lu
    &[(175, 0.974013), (176, 0.025987)],
    // 72 Hf
    &[
        (174, 0.00162), (176, 0.052604), (177, 0.185953), (178, 0.272811), (179, 0.13621),
        (180, 0.350802),
    ],
    // 73 Ta
    &[(180, 0.0001201), (181, 0.9998799)],
    // 74 W
    &[(180, 0.001198), (182, 0.264985), (183, 0.143136), (184, 0.306422), (186, 0.284259)],
    // 75 Re
    &[(185, 0.37398), (187, 0.62602)],
    // 76 Os
    &[
        (184, 0.000198), (186, 0.015859), (187, 0.019644), (188, 0.132434), (189, 0.161466),
        (190, 0.262584), (192, 0.407815),
    ],
    // 77 Ir
    &[(191, 0.37272), (193, 0.62728)],
    // 78 Pt
    &[
        (190, 0.00011), (192, 0.00782), (194, 0.32864), (195, 0.33775), (196, 0.25211),
        (198, 0.07357),
    ],
    // 79 Au
    &[(197, 1.0)],
    // 80 Hg
    &[
        (196, 0.00155), (198, 0.10038), (199, 0.16938), (200, 0.23138), (201, 0.1317),
        (202, 0.29743), (204, 0.06818),
    ],
    // 81 Tl
    &[(203, 0.29524), (205, 0.70476)],
    // 82 Pb
    &[(204, 0.014245), (206, 0.241447), (207, 0.220827), (208, 0.523481)],
    // 83 Bi
    &[(209, 1.0)],
    // 84 Po
    &[],
    // 85 At
    &[],
    // 86 Rn
    &[],
    // 87 Fr
    &[],
    // 88 Ra
    &[],
    // 89 Ac
    &[],
    // 90 Th
    &[(230, 1.138e-5), (232, 0.99998862)],
    // 91 Pa
    &[(231, 1.0)],
    // 92 U
    &[(234, 5.42e-5), (235, 0.0072041), (238, 0.9927417)],
    // 93 Np
    &[],
    // 94 Pu
    &[],
    // 95 Am
    &[],
    // 96 Cm
    &[],
    // 97 Bk
    &[],
    // 98 Cf
    &[],
    // 99 Es
    &[],
    // 100 Fm
    &[],
    // 101 Md
    &[],
    // 102 No
    &[],
    // 103 Lr
    &[],
    // 104 Rf
    &[],
    // 105 Db
    &[],
    // 106 Sg
    &[],
    // 107 Bh
    &[],
    // 108 Hs
    &[],
    // 109 Mt
    &[],
    // 110 Ds
    &[],
    // 111 Rg
    &[],
    // 112 Cn
    &[],
    // 113 Nh
    &[],
    // 114 Fl
    &[],
    // 115 Mc
    &[],
    // 116 Lv
    &[],
    // 117 Ts
    &[],
    // 118 Og
    &[],
];

// Mass number of the longest-lived isotope of elements without a natural
// composition, used as a stand-in for their atomic mass.
const REFERENCE_MASS_NUMBERS: [(u8, u32); 35] = [
    (0, 1), (43, 98), (61, 145), (84, 209), (85, 210), (86, 222), (87, 223),
    (88, 226), (89, 227), (93, 237), (94, 244), (95, 243), (96, 247), (97, 247),
    (98, 251), (99, 252), (100, 257), (101, 258), (102, 259), (103, 266),
    (104, 267), (105, 268), (106, 269), (107, 270), (108, 269), (109, 278),
    (110, 281), (111, 282), (112, 285), (113, 286), (114, 289), (115, 290),
    (116, 293), (117, 294), (118, 294),
];

pub fn isotopic_composition(z: u8) -> &'static [(u32, f64)] {
    ISOTOPIC_COMPOSITIONS.get(z as usize).copied().unwrap_or(&[])
}

/// Mass number of the most abundant isotope, or of the longest-lived one
/// for elements without stable isotopes.
pub fn reference_mass_number(z: u8) -> Option<u32> {
    let composition = isotopic_composition(z);
    if composition.is_empty() {
        return REFERENCE_MASS_NUMBERS
            .iter()
            .find(|(reference_z, _)| *reference_z == z)
            .map(|(_, a)| *a);
    }
    composition
        .iter()
        .max_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1))
        .map(|(a, _)| *a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_abundances_are_normalized() {
        for composition in ISOTOPIC_COMPOSITIONS.iter().filter(|c| !c.is_empty()) {
            let norm: f64 = composition.iter().map(|(_, abundance)| abundance).sum();
            assert_relative_eq!(norm, 1.0, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_monoisotopic_elements() {
        // Be, F, Na, Al, P, Sc, V, Mn, Co, As, Nb, Rh, I, Cs, Pr, Tb, Ho, Tm, Au, Bi, Pa
        let n_monoisotopic = ISOTOPIC_COMPOSITIONS.iter().filter(|c| c.len() == 1).count();
        assert_eq!(n_monoisotopic, 21);
        assert_eq!(isotopic_composition(65), &[(159, 1.0)]);
        assert_eq!(isotopic_composition(79), &[(197, 1.0)]);
    }

    #[test]
    fn test_mass_numbers_are_plausible() {
        for (z, composition) in ISOTOPIC_COMPOSITIONS.iter().enumerate() {
            for (a, _) in composition.iter() {
                assert!(*a as usize >= z && (*a as usize) < 3 * z + 10);
            }
        }
    }

    #[test]
    fn test_reference_mass_numbers() {
        assert_eq!(reference_mass_number(82), Some(208));
        assert_eq!(reference_mass_number(43), Some(98));
        assert_eq!(reference_mass_number(5), Some(11));
        assert_eq!(isotopic_composition(82).len(), 4);
        for z in 0..=118 {
            assert!(reference_mass_number(z).is_some());
        }
        assert_eq!(reference_mass_number(119), None);
    }
}

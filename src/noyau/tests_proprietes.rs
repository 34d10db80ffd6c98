//! Propriétés (proptest) du couple parse / classify.

use proptest::prelude::*;

use super::identites::catalogue;
use super::{classify, parse, Classification};

const ENTREES: [&str; 16] = [
    "π", "√2", "-√3", "sqrt(7)", "2*π", "1/e", "-1/2", "3", "-4", "π/π", "e/(2*e)", "φ^2-φ",
    "sqrt(4)+0.5", "√20+1", "0.75", "2*π/τ",
];

/// Intercale des blancs : espaces[i] blancs avant le i-ème caractère.
fn intercaler(s: &str, espaces: &[usize]) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        let n = espaces.get(i).copied().unwrap_or(0);
        out.extend(std::iter::repeat_n(' ', n));
        out.push(c);
    }
    out
}

fn classe_entiere(v: f64) -> Classification {
    if v > 0.0 {
        Classification::Naturels
    } else {
        Classification::Entiers
    }
}

proptest! {
    #[test]
    fn parse_ne_panique_jamais(s in ".{0,40}") {
        if let Ok(v) = parse(&s) {
            prop_assert!(v.is_finite());
            // classify répond toujours, et toujours pareil
            prop_assert_eq!(classify(&s, v), classify(&s, v));
        }
    }

    #[test]
    fn blancs_sans_effet(
        s in prop::sample::select(ENTREES.to_vec()),
        espaces in prop::collection::vec(0usize..3, 0..16),
    ) {
        let espace = intercaler(s, &espaces);
        let a = parse(s).unwrap();
        let b = parse(&espace).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert_eq!(classify(s, a), classify(&espace, b));
    }

    #[test]
    fn entiers(n in -100_000i64..100_000) {
        let s = n.to_string();
        let v = parse(&s).unwrap();
        prop_assert_eq!(v, n as f64);
        prop_assert_eq!(classify(&s, v), classe_entiere(v));
    }

    #[test]
    fn fractions(a in -1000i64..1000, b in 1i64..100) {
        let s = format!("{a}/{b}");
        let v = parse(&s).unwrap();
        prop_assert_eq!(v, a as f64 / b as f64);

        let attendu = if a % b == 0 {
            classe_entiere(v)
        } else {
            Classification::Rationnels
        };
        prop_assert_eq!(classify(&s, v), attendu);
    }

    #[test]
    fn carres_parfaits(k in 1u32..1000) {
        let n = k * k;
        for s in [format!("√{n}"), format!("sqrt({n})")] {
            let v = parse(&s).unwrap();
            prop_assert_eq!(v, k as f64);
            prop_assert_eq!(classify(&s, v), Classification::Naturels);
        }
        let s = format!("-√{n}");
        prop_assert_eq!(parse(&s).unwrap(), -(k as f64));
    }

    #[test]
    fn denominateur_nul_refuse(a in -1000i64..1000) {
        let s = format!("{a}/0");
        prop_assert!(parse(&s).is_err());
    }

    #[test]
    fn catalogue_insensible_a_la_casse_et_aux_blancs(
        i in 0usize..1000,
        majuscules in prop::collection::vec(any::<bool>(), 0..24),
        espaces in prop::collection::vec(0usize..3, 0..24),
    ) {
        let ids = catalogue();
        let id = &ids[i % ids.len()];

        let variante: String = id
            .motif
            .chars()
            .enumerate()
            .map(|(j, c)| {
                if majuscules.get(j).copied().unwrap_or(false) {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        let variante = intercaler(&variante, &espaces);

        prop_assert_eq!(classify(&variante, id.valeur), id.classification());
    }
}

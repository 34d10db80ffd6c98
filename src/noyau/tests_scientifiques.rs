//! Tests scientifiques (campagne) : propriétés attendues du couple parse / classify.
//!
//! But : fixer le contrat observable (valeurs, erreurs, étiquettes) sur les entrées de manuel,
//! plus quelques limites contrôlées (longueur, budget temps).

use std::time::{Duration, Instant};

use super::constantes::toutes;
use super::identites::catalogue;
use super::{classify, parse, Classification, ParseError};

use Classification::*;

fn val(expr: &str) -> f64 {
    parse(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn classe(expr: &str) -> Classification {
    classify(expr, val(expr))
}

fn assert_proche(expr: &str, attendu: f64) {
    let v = val(expr);
    assert!((v - attendu).abs() < 1e-8, "expr={expr:?} v={v} attendu={attendu}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Table des constantes ------------------------ */

#[test]
fn sci_constantes_exactes_et_irrationnelles() {
    for c in toutes() {
        assert_eq!(val(c.nom), c.valeur, "clé {:?}", c.nom);
        assert_eq!(classe(c.nom), Irrationnels, "clé {:?}", c.nom);
    }
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_entrees_refusees() {
    for s in ["", "abc", "1/0", "√-1", "-√-2", "sqrt(-9)", ")(", "*"] {
        assert!(
            matches!(parse(s), Err(ParseError::InvalidSyntax { .. })),
            "expr={s:?} devrait être refusée"
        );
    }
}

/* ------------------------ Valeurs + étiquettes de manuel ------------------------ */

#[test]
fn sci_fraction() {
    assert_eq!(val("1/2"), 0.5);
    assert_eq!(classify("1/2", 0.5), Rationnels);
}

#[test]
fn sci_racine_carree_parfaite() {
    assert_eq!(val("sqrt(4)"), 2.0);
    assert_eq!(classify("sqrt(4)", 2.0), Naturels);
}

#[test]
fn sci_racine_irrationnelle() {
    assert_proche("sqrt(2)", 1.414_213_56);
    assert_eq!(classe("sqrt(2)"), Irrationnels);
}

#[test]
fn sci_identite_prime_sur_symbole() {
    assert_proche("π/π", 1.0);
    assert_eq!(classe("π/π"), Naturels);

    assert_proche("2*π/τ", 1.0);
    assert_eq!(classe("2*π/τ"), Naturels);

    assert_proche("√2/√2", 1.0);
    assert_eq!(classe("√2/√2"), Naturels);
}

#[test]
fn sci_entier_negatif() {
    assert_eq!(val("-3"), -3.0);
    assert_eq!(classify("-3", -3.0), Entiers);
    assert_eq!(classify("0", 0.0), Entiers);
}

#[test]
fn sci_zeros_algebriques() {
    for s in ["π-π", "e-e", "pi+(-pi)", "τ-2*π", "√3-√3"] {
        assert_eq!(classe(s), Entiers, "expr={s:?}");
    }
}

#[test]
fn sci_espaces_et_casse_du_catalogue() {
    // Le parseur est sensible à la casse (PI n’est pas une clé), le classement ne l’est pas.
    for s in ["e / (2 * e)", " e/( 2*e ) ", "E/(2*E)"] {
        assert_eq!(classify(s, 0.5), Rationnels, "expr={s:?}");
    }
}

#[test]
fn sci_chaque_identite_du_catalogue() {
    for id in catalogue() {
        // la valeur exacte de l’identité est toujours acceptée par son propre motif
        assert_eq!(
            classify(&id.motif, id.valeur),
            Classification::depuis_valeur_exacte(id.valeur),
            "motif={:?}",
            id.motif
        );
        // et le motif se relit (valeur calculée proche de la valeur exacte)
        let v = val(&id.motif);
        assert!(
            (v - id.valeur).abs() < 1e-9,
            "motif={:?} v={v} attendu={}",
            id.motif,
            id.valeur
        );
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_longue_somme_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let mut expr = String::new();
    for k in 0..400 {
        if k > 0 {
            expr.push_str(" + ");
        }
        expr.push_str("1/2");
        budget(t0, max);
    }

    assert_eq!(val(&expr), 200.0);
    assert_eq!(classe(&expr), Naturels);
    budget(t0, max);
}

#[test]
fn sci_stress_constantes_repetees_safe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["π"; 300].join("+");
    let v = val(&expr);
    assert!((v - 300.0 * std::f64::consts::PI).abs() < 1e-9);
    assert_eq!(classe(&expr), Irrationnels);
    budget(t0, max);
}

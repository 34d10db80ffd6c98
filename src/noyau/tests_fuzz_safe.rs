//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler parse / classify sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte les refus (InvalidSyntax), jamais les paniques ni les valeurs non finies
//! - invariant clé : ℝ-ℚ => le texte contient un jeton irrationnel

use std::time::{Duration, Instant};

use super::constantes::toutes;
use super::identites::{contient_irrationnel, normaliser};
use super::{classify, parse, Classification, ParseError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants ------------------------ */

/// Vérifie une entrée et renvoie true si elle a été acceptée.
fn verifier(expr: &str) -> bool {
    match parse(expr) {
        Ok(v) => {
            assert!(v.is_finite(), "valeur non finie: expr={expr:?} v={v}");

            let c = classify(expr, v);
            assert_eq!(c, classify(expr, v), "classify non déterministe: {expr:?}");

            if v.is_finite() && v.fract() == 0.0 {
                let attendu = if v > 0.0 {
                    Classification::Naturels
                } else {
                    Classification::Entiers
                };
                assert_eq!(c, attendu, "entier mal classé: expr={expr:?} v={v}");
            }

            if c == Classification::Irrationnels {
                assert!(
                    contient_irrationnel(&normaliser(expr)),
                    "ℝ-ℚ sans jeton irrationnel: {expr:?}"
                );
            }
            true
        }
        Err(ParseError::InvalidSyntax { entree }) => {
            assert_eq!(entree, expr, "l’erreur doit citer l’entrée");
            false
        }
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_rat(rng: &mut Rng) -> String {
    // inclut 0 (utile pour tester zéros)
    let a = rng.pick(10);
    // dénominateur parfois nul : division par zéro volontaire
    let b = rng.pick(9);

    match rng.pick(3) {
        0 => format!("{a}/{b}"),
        1 => format!("{a}.{}", rng.pick(100)),
        _ => format!("{a}"),
    }
}

fn gen_constante(rng: &mut Rng) -> String {
    let table = toutes();
    let i = rng.pick(table.len() as u32) as usize;
    table[i].nom.to_string()
}

fn gen_racine(rng: &mut Rng) -> String {
    let n = rng.pick(30);
    match rng.pick(4) {
        0 => format!("sqrt({n})"),
        1 => format!("sqrt({n}/{})", 1 + rng.pick(5)),
        2 => format!("√{n}"),
        _ => format!("-√{n}"),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(3) {
        0 => gen_rat(rng),
        1 => gen_constante(rng),
        _ => gen_racine(rng),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let op = ["+", "-", "*", "/", "^"][rng.pick(5) as usize];
    match rng.pick(4) {
        0 => gen_atom(rng),
        1 => format!(
            "({}{op}{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        2 => format!("{}{op}{}", gen_atom(rng), gen_expr(rng, depth - 1)),
        _ => format!("-{}", gen_expr(rng, depth - 1)),
    }
}

/// Soupe de morceaux : vise les frontières (UTF-8, parenthèses, signes).
fn gen_soupe(rng: &mut Rng) -> String {
    const MORCEAUX: [&str; 22] = [
        "√", "π", "φ", "τ", "e", "pi", "ln", "sqrt(", "(", ")", "-", "+", "*", "/", "^", ".", "0",
        "2", "7", "x", " ", "**",
    ];
    let n = rng.pick(12) as usize;
    (0..n)
        .map(|_| MORCEAUX[rng.pick(MORCEAUX.len() as u32) as usize])
        .collect()
}

/// Insère des blancs entre les caractères (jamais à l’intérieur d’un caractère).
fn espacer(rng: &mut Rng, s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if rng.coin() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_generees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        if verifier(&expr) {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_soupe_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..600 {
        budget(t0, max);
        let expr = gen_soupe(&mut rng);
        verifier(&expr);
    }
}

#[test]
fn fuzz_safe_blancs_sans_effet() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let espace = espacer(&mut rng, &expr);

        match (parse(&expr), parse(&espace)) {
            (Ok(a), Ok(b)) => {
                assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?} espacé={espace:?}");
                assert_eq!(classify(&expr, a), classify(&espace, b), "expr={expr:?}");
            }
            (Err(_), Err(_)) => {}
            (a, b) => panic!("verdicts différents: {expr:?} -> {a:?} / {espace:?} -> {b:?}"),
        }
    }
}

#[test]
fn fuzz_safe_determinisme_meme_seed() {
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);

    for _ in 0..50 {
        let e1 = gen_expr(&mut r1, 3);
        let e2 = gen_expr(&mut r2, 3);
        assert_eq!(e1, e2);
        assert_eq!(
            parse(&e1).map(f64::to_bits),
            parse(&e2).map(f64::to_bits),
            "expr={e1:?}"
        );
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    let v = parse(&expr).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
    assert_eq!(classify(&expr, v), Classification::Naturels);
    budget(t0, max);
}

// src/noyau/racines.rs
//
// Forme fonction sqrt(...) (un seul niveau, sans parenthèses imbriquées).
// - repérage de chaque appel : "sqrt(" ... premier ")" (intérieur non vide)
// - évaluation de l’intérieur : fraction simple -> arithmétique -> lecture décimale
// - remplacement de l’appel par le texte décimal de sa racine
//
// Partagé par le parseur (remplacement) et le classement (racine entière ou non).

use super::jetons::caracteres_surs;
use super::lecture::{ecrire_decimal, lire_decimal};
use super::rpn::evaluer;

const OUVERTURE: &str = "sqrt(";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppelSqrt<'a> {
    /// Position (octets) du début de "sqrt(".
    pub debut: usize,
    /// Position (octets) juste après ")".
    pub fin: usize,
    pub interieur: &'a str,
}

impl AppelSqrt<'_> {
    pub fn texte<'s>(&self, source: &'s str) -> &'s str {
        &source[self.debut..self.fin]
    }
}

/// Tous les appels sqrt(...) de gauche à droite, sans chevauchement.
pub fn appels_sqrt(s: &str) -> Vec<AppelSqrt<'_>> {
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(rel) = s[pos..].find(OUVERTURE) {
        let debut = pos + rel;
        let debut_int = debut + OUVERTURE.len();

        match s[debut_int..].find(')') {
            Some(0) => {
                // "sqrt()" : intérieur vide, pas un appel
                pos = debut_int;
            }
            Some(lg) => {
                let fin = debut_int + lg + 1;
                out.push(AppelSqrt {
                    debut,
                    fin,
                    interieur: &s[debut_int..debut_int + lg],
                });
                pos = fin;
            }
            None => break,
        }
    }

    out
}

/// Le texte entier est-il un unique appel sqrt(expr) ? Renvoie l’intérieur.
pub fn appel_unique(s: &str) -> Option<&str> {
    let appels = appels_sqrt(s);
    match appels.as_slice() {
        [a] if a.debut == 0 && a.fin == s.len() => Some(a.interieur),
        _ => None,
    }
}

/// Forme “fraction simple” : au moins un '/', ni '*' ni '+', pas de '-' hors tête.
pub fn forme_fraction_simple(s: &str) -> bool {
    s.contains('/')
        && !s.contains('*')
        && !s.contains('+')
        && !s.char_indices().skip(1).any(|(_, c)| c == '-')
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fraction {
    Valeur(f64),
    DenominateurNul,
}

/// Fraction simple a/b : exactement deux parties, deux décimaux.
/// None si ce n’est pas une fraction de deux décimaux.
pub fn lire_fraction(s: &str) -> Option<Fraction> {
    let mut parts = s.split('/');
    let (a, b) = match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) => (a, b),
        _ => return None,
    };

    let n = lire_decimal(a)?;
    let d = lire_decimal(b)?;
    if d == 0.0 {
        return Some(Fraction::DenominateurNul);
    }
    let q = n / d;
    q.is_finite().then_some(Fraction::Valeur(q))
}

/// Valeur de l’intérieur d’un sqrt(...), ou None si non évaluable.
pub fn evaluer_interieur(interieur: &str) -> Option<f64> {
    let v = if forme_fraction_simple(interieur) {
        match lire_fraction(interieur)? {
            Fraction::Valeur(v) => v,
            Fraction::DenominateurNul => return None,
        }
    } else if caracteres_surs(interieur, false) {
        evaluer(interieur).ok()?
    } else {
        lire_decimal(interieur)?
    };

    v.is_finite().then_some(v)
}

/// Racine de l’intérieur si celui-ci est un réel ≥ 0.
pub fn racine_interieur(interieur: &str) -> Option<f64> {
    evaluer_interieur(interieur)
        .filter(|v| *v >= 0.0)
        .map(f64::sqrt)
}

/// Remplace chaque appel évaluable par le texte décimal de sa racine.
/// Les appels non évaluables restent tels quels.
pub fn remplacer_appels(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pos = 0usize;

    for a in appels_sqrt(s) {
        out.push_str(&s[pos..a.debut]);
        match racine_interieur(a.interieur) {
            Some(r) => out.push_str(&ecrire_decimal(r)),
            None => out.push_str(a.texte(s)),
        }
        pos = a.fin;
    }
    out.push_str(&s[pos..]);

    out
}

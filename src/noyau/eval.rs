//! Noyau — lecture d’une expression (pipeline réel)
//!
//! Règles essayées dans l’ordre, la première qui produit une valeur gagne :
//!
//! 1. constante directe (π, √2, -√3…)
//! 2. copie de travail avec les constantes substituées
//! 3. fraction simple a/b (dénominateur nul => erreur)
//! 4. √n simple (radicande négatif => erreur)
//! 5. -√n simple
//! 6. sqrt(expr) : appel unique => valeur directe, sinon remplacement dans la copie de travail
//! 7. arithmétique + - * / ^ ( ) sur la copie de travail
//! 8. lecture décimale façon parseFloat
//! 9. sinon : ParseError::InvalidSyntax
//!
//! L’ordre fait partie du contrat : chaque règle suppose que les précédentes n’ont pas pris.

use log::trace;

use super::constantes;
use super::erreur::ParseError;
use super::jetons::caracteres_surs;
use super::lecture::{lire_decimal, lire_prefixe};
use super::racines::{
    appel_unique, forme_fraction_simple, lire_fraction, racine_interieur, remplacer_appels,
    Fraction,
};
use super::rpn::evaluer;
use super::substitution::substituer_constantes;

/// Retire tous les blancs (pas seulement en bordure).
pub fn sans_blancs(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// "√..." ou "-√..." sans autre opérateur : seul '-' de tête toléré.
fn sans_autre_operateur(s: &str) -> bool {
    !s.contains('*') && !s.contains('+') && !s.char_indices().skip(1).any(|(_, c)| c == '-')
}

/// API publique : texte -> valeur numérique.
pub fn parse(entree: &str) -> Result<f64, ParseError> {
    let texte = sans_blancs(entree);

    // 1) Constante directe
    if let Some(v) = constantes::lookup(&texte) {
        trace!("parse {texte:?} : constante directe");
        return Ok(v);
    }

    // 2) Copie de travail : constantes substituées
    let mut travail = substituer_constantes(&texte);

    // 3) Fraction simple
    if forme_fraction_simple(&texte) {
        match lire_fraction(&texte) {
            Some(Fraction::Valeur(v)) => {
                trace!("parse {texte:?} : fraction simple");
                return Ok(v);
            }
            Some(Fraction::DenominateurNul) => {
                trace!("parse {texte:?} : fraction de dénominateur nul");
                return Err(ParseError::invalide(entree));
            }
            None => {}
        }
    }

    // 4) √n simple
    if let Some(reste) = texte.strip_prefix('√') {
        if sans_autre_operateur(&texte) {
            if let Some(r) = lire_decimal(reste) {
                if r < 0.0 {
                    return Err(ParseError::invalide(entree));
                }
                trace!("parse {texte:?} : racine simple");
                return Ok(r.sqrt());
            }
        }
    }

    // 5) -√n simple
    if let Some(reste) = texte.strip_prefix("-√") {
        if !texte.contains('*') && !texte.contains('+') {
            if let Some(r) = lire_decimal(reste) {
                if r < 0.0 {
                    return Err(ParseError::invalide(entree));
                }
                trace!("parse {texte:?} : racine négative simple");
                return Ok(-r.sqrt());
            }
        }
    }

    // 6) sqrt(expr)
    if texte.contains("sqrt(") {
        if let Some(r) = appel_unique(&texte).and_then(racine_interieur) {
            trace!("parse {texte:?} : appel sqrt unique");
            return Ok(r);
        }
        travail = remplacer_appels(&travail);
        trace!("parse {texte:?} : appels sqrt remplacés -> {travail:?}");
    }

    // 7) Arithmétique générale
    if caracteres_surs(&travail, true) {
        match evaluer(&travail) {
            Ok(v) => {
                trace!("parse {texte:?} : arithmétique sur {travail:?}");
                return Ok(v);
            }
            Err(e) => trace!("parse {texte:?} : arithmétique refusée ({e})"),
        }
    }

    // 8) Lecture décimale (préfixe)
    if let Some(v) = lire_prefixe(&travail) {
        trace!("parse {texte:?} : lecture décimale de {travail:?}");
        return Ok(v);
    }

    // 9) Rien n’a pris
    Err(ParseError::invalide(entree))
}

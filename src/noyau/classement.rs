// src/noyau/classement.rs
//
// Classement d’un nombre dans ℕ, ℤ, ℚ ou ℝ-ℚ à partir du texte ET de la valeur.
//
// La valeur flottante seule ne distingue pas “exactement rationnel” de “irrationnel qui tombe
// presque sur un entier” : on relit donc le texte (constantes, sqrt(...), catalogue d’identités)
// avant de se rabattre sur la valeur. Aucun échec possible : toujours une étiquette.

use std::fmt;

use log::debug;

use super::constantes;
use super::eval::sans_blancs;
use super::identites::{chercher, contient_irrationnel, normaliser, reduire_sous_motifs};
use super::lecture::ecrire_decimal;
use super::racines::{appel_unique, appels_sqrt, evaluer_interieur};

/// Écart toléré entre la valeur exacte d’une identité et la valeur calculée.
pub const TOLERANCE_IDENTITE: f64 = 1e-4;

/// Bruit flottant toléré autour d’un entier une fois les irrationnels annulés (π/π*3).
const BRUIT_ENTIER: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Naturels,
    Entiers,
    Rationnels,
    Irrationnels,
}

impl Classification {
    pub const TOUTES: [Classification; 4] = [
        Classification::Naturels,
        Classification::Entiers,
        Classification::Rationnels,
        Classification::Irrationnels,
    ];

    /// Forme d’affichage canonique.
    pub fn nom_affichage(self) -> &'static str {
        match self {
            Classification::Naturels => "ℕ (Naturales)",
            Classification::Entiers => "ℤ (Enteros)",
            Classification::Rationnels => "ℚ (Racionales)",
            Classification::Irrationnels => "ℝ-ℚ (Irracionales)",
        }
    }

    /// Clé courte stable.
    pub fn cle(self) -> &'static str {
        match self {
            Classification::Naturels => "naturals",
            Classification::Entiers => "integers",
            Classification::Rationnels => "rationals",
            Classification::Irrationnels => "irrationals",
        }
    }

    /// Couleur (r, g, b) du point sur la droite.
    pub fn couleur(self) -> [u8; 3] {
        match self {
            Classification::Naturels => [0xe7, 0x4c, 0x3c],
            Classification::Entiers => [0xf3, 0x9c, 0x12],
            Classification::Rationnels => [0x27, 0xae, 0x60],
            Classification::Irrationnels => [0x8e, 0x44, 0xad],
        }
    }

    /// ℕ / ℤ pour un entier, ℚ sinon. Utilisé quand la valeur est connue exactement.
    pub fn depuis_valeur_exacte(v: f64) -> Classification {
        classer_entier(v).unwrap_or(Classification::Rationnels)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom_affichage())
    }
}

/// Forme d’affichage d’une classification.
pub fn classification_display_name(c: Classification) -> &'static str {
    c.nom_affichage()
}

fn est_entier(v: f64) -> bool {
    v.is_finite() && v.fract() == 0.0
}

/// Règles 1 et 2 : ℕ si entier > 0, ℤ si entier ≤ 0, None sinon.
fn classer_entier(v: f64) -> Option<Classification> {
    if !est_entier(v) {
        None
    } else if v > 0.0 {
        Some(Classification::Naturels)
    } else {
        Some(Classification::Entiers)
    }
}

/// Issue de l’examen des appels sqrt(...).
enum Racines {
    /// Verdict final.
    Classe(Classification),
    /// Toutes les racines sont entières : texte où chaque appel est remplacé par sa racine.
    Entieres(String),
}

/// Règle 4 : appels sqrt(...).
///
/// - appel unique (tout le texte) : racine entière => ℕ / ℤ, sinon ℝ-ℚ ; intérieur illisible => ℝ-ℚ
/// - plusieurs appels ou appel dans une expression : une racine illisible ou non entière => ℝ-ℚ ;
///   si toutes sont entières, on continue avec le texte où elles sont remplacées
fn examiner_racines(texte: &str) -> Racines {
    if let Some(interieur) = appel_unique(texte) {
        let verdict = match evaluer_interieur(interieur) {
            Some(v) if v >= 0.0 => {
                classer_entier(v.sqrt()).unwrap_or(Classification::Irrationnels)
            }
            _ => Classification::Irrationnels,
        };
        return Racines::Classe(verdict);
    }

    let mut out = String::with_capacity(texte.len());
    let mut pos = 0usize;
    for a in appels_sqrt(texte) {
        let racine = match evaluer_interieur(a.interieur) {
            Some(v) if v >= 0.0 => v.sqrt(),
            _ => return Racines::Classe(Classification::Irrationnels),
        };
        if !est_entier(racine) {
            return Racines::Classe(Classification::Irrationnels);
        }
        out.push_str(&texte[pos..a.debut]);
        out.push_str(&ecrire_decimal(racine));
        pos = a.fin;
    }
    out.push_str(&texte[pos..]);

    Racines::Entieres(out)
}

/// Règle 5 : expression avec opérateurs.
///
/// Catalogue ancré d’abord, puis sous-motifs qui s’annulent, puis symboles irrationnels.
fn classer_expression(texte: &str, valeur: f64) -> Classification {
    let normalise = normaliser(texte);

    if let Some(id) = chercher(&normalise) {
        if (valeur - id.valeur).abs() < TOLERANCE_IDENTITE {
            debug!("classify {texte:?} : identité {:?}", id.motif);
            return id.classification();
        }
        debug!(
            "classify {texte:?} : identité {:?} ignorée (valeur {valeur} != {})",
            id.motif, id.valeur
        );
    }

    if let Some(reste) = reduire_sous_motifs(&normalise) {
        if !contient_irrationnel(&reste) {
            debug!("classify {texte:?} : sous-motifs annulés -> {reste:?}");
            let arrondi = valeur.round();
            let v = if (valeur - arrondi).abs() < BRUIT_ENTIER {
                arrondi
            } else {
                valeur
            };
            return Classification::depuis_valeur_exacte(v);
        }
    }

    if contient_irrationnel(&normalise) {
        return Classification::Irrationnels;
    }

    Classification::depuis_valeur_exacte(valeur)
}

/// API publique : classe (texte, valeur) dans exactement un des quatre ensembles.
pub fn classify(texte_original: &str, valeur: f64) -> Classification {
    // 1) et 2) entier
    if let Some(c) = classer_entier(valeur) {
        return c;
    }

    let mut texte = sans_blancs(texte_original);

    // 3) constante irrationnelle directe
    if constantes::est_constante(&texte) {
        return Classification::Irrationnels;
    }

    // 4) sqrt(...)
    if texte.contains("sqrt(") {
        match examiner_racines(&texte) {
            Racines::Classe(c) => {
                debug!("classify {texte:?} : sqrt -> {c:?}");
                return c;
            }
            Racines::Entieres(reste) => texte = reste,
        }
    }

    // 5) opérateurs (6 : une fraction sans autre opérateur passe aussi par ici)
    if texte.contains(['*', '+', '-', '/']) {
        return classer_expression(&texte, valeur);
    }

    // 7) décimal à partie fractionnaire
    Classification::Rationnels
}

// src/noyau/identites.rs
//
// Catalogue d’identités algébriques (heuristique, NON exhaustive).
//
// Chaque entrée : (motif normalisé, valeur exacte). Le motif doit égaler TOUT le texte normalisé
// (minuscules, sans blancs, ** -> ^). Ce n’est pas une preuve : une forme absente du catalogue
// retombe sur la détection de symboles irrationnels.
//
// Familles générées pour chaque symbole positif s de la table (π, pi, e, …, √20) :
//   s/s = 1      s/(-s) = s/-s = -s/s = -1     s/(2*s) = 1/2
//   s-s = 0      s+(-s) = -s+s = 0
// Plus quelques identités nommées (τ = 2π, φ² = φ + 1).
//
// Second niveau : sous-motifs qui s’annulent (π/π, e-e, √2/√2, 2*π/τ…) repérés N’IMPORTE OÙ dans
// le texte. Un sous-motif n’est remplacé par sa valeur que s’il forme un bloc autonome vis-à-vis
// de ses voisins (précédence) ; le reste du texte décide ensuite.

use std::sync::LazyLock;

use super::classement::Classification;
use super::constantes;
use super::lecture::ecrire_decimal;

/// Jetons qui signalent un irrationnel possible dans un texte.
pub const JETONS_IRRATIONNELS: [&str; 11] = [
    "π", "pi", "e", "φ", "phi", "τ", "tau", "ln2", "ln10", "√", "sqrt",
];

#[derive(Clone, Debug, PartialEq)]
pub struct Identite {
    pub motif: String,
    pub valeur: f64,
}

impl Identite {
    fn new(motif: impl Into<String>, valeur: f64) -> Self {
        Self {
            motif: motif.into(),
            valeur,
        }
    }

    /// Classification de la valeur exacte de l’identité.
    pub fn classification(&self) -> Classification {
        Classification::depuis_valeur_exacte(self.valeur)
    }
}

const NOMMEES: [(&str, f64); 14] = [
    ("2*π/τ", 1.0),
    ("2*pi/tau", 1.0),
    ("τ/(2*π)", 1.0),
    ("tau/(2*pi)", 1.0),
    ("τ/2/π", 1.0),
    ("tau/2/pi", 1.0),
    ("τ/π", 2.0),
    ("tau/pi", 2.0),
    ("τ-2*π", 0.0),
    ("tau-2*pi", 0.0),
    ("φ^2-φ", 1.0),
    ("phi^2-phi", 1.0),
    ("φ-1/φ", 1.0),
    ("phi-1/phi", 1.0),
];

static CATALOGUE: LazyLock<Vec<Identite>> = LazyLock::new(|| {
    let mut v = Vec::new();

    let symboles = constantes::toutes()
        .iter()
        .map(|c| c.nom)
        .filter(|nom| !nom.starts_with('-'));

    for s in symboles {
        v.push(Identite::new(format!("{s}/{s}"), 1.0));
        v.push(Identite::new(format!("{s}/(-{s})"), -1.0));
        v.push(Identite::new(format!("{s}/-{s}"), -1.0));
        v.push(Identite::new(format!("-{s}/{s}"), -1.0));
        v.push(Identite::new(format!("{s}/(2*{s})"), 0.5));

        v.push(Identite::new(format!("{s}-{s}"), 0.0));
        v.push(Identite::new(format!("{s}+(-{s})"), 0.0));
        v.push(Identite::new(format!("-{s}+{s}"), 0.0));
    }

    v.extend(NOMMEES.iter().map(|&(m, x)| Identite::new(m, x)));
    v
});

pub fn catalogue() -> &'static [Identite] {
    &CATALOGUE
}

#[derive(Clone, Debug, PartialEq)]
pub struct SousMotif {
    pub motif: String,
    pub valeur: f64,
    /// Bloc * / (sinon bloc + -) : fixe les voisins tolérés.
    pub multiplicatif: bool,
}

static SOUS_MOTIFS: LazyLock<Vec<SousMotif>> = LazyLock::new(|| {
    let mut v = Vec::new();
    let mut pousser = |motif: String, valeur: f64, multiplicatif: bool| {
        v.push(SousMotif {
            motif,
            valeur,
            multiplicatif,
        })
    };

    let symboles = constantes::toutes()
        .iter()
        .map(|c| c.nom)
        .filter(|nom| !nom.starts_with('-'));

    for s in symboles {
        pousser(format!("{s}/{s}"), 1.0, true);
        pousser(format!("{s}/-{s}"), -1.0, true);
        pousser(format!("{s}/(-{s})"), -1.0, true);
        pousser(format!("{s}/(2*{s})"), 0.5, true);

        pousser(format!("{s}-{s}"), 0.0, false);
        pousser(format!("{s}+(-{s})"), 0.0, false);
    }

    for (m, x) in [("2*π/τ", 1.0), ("2*pi/tau", 1.0), ("τ/(2*π)", 1.0), ("tau/(2*pi)", 1.0)] {
        pousser(m.to_string(), x, true);
    }
    for (m, x) in [("τ-2*π", 0.0), ("tau-2*pi", 0.0)] {
        pousser(m.to_string(), x, false);
    }

    // plus long d’abord (e/(2*e) avant e/e)
    v.sort_by_key(|m| std::cmp::Reverse(m.motif.chars().count()));
    v
});

pub fn sous_motifs() -> &'static [SousMotif] {
    &SOUS_MOTIFS
}

/// Voisin de gauche toléré. `avant_avant` : caractère qui précède ce voisin.
fn voisin_gauche_ok(avant: Option<char>, avant_avant: Option<char>, multiplicatif: bool) -> bool {
    match avant {
        None | Some('(') | Some('+') => true,
        // '-' binaire seulement : "3/-π/π" vaut 3/(-π)/π
        Some('-') => multiplicatif && !matches!(avant_avant, Some('^' | '*' | '/')),
        Some('*') => multiplicatif,
        _ => false,
    }
}

fn voisin_droit_ok(apres: Option<char>, multiplicatif: bool) -> bool {
    match apres {
        None | Some(')') | Some('+') | Some('-') => true,
        Some('*') | Some('/') => multiplicatif,
        _ => false,
    }
}

/// Remplace chaque sous-motif autonome par sa valeur. None si aucun n’a pris.
///
/// "π/π+0.5" -> "1+0.5" ; "π/π*π" -> "1*π" ; "1/π/π" reste tel quel (π/π n’y est pas un bloc).
pub fn reduire_sous_motifs(normalise: &str) -> Option<String> {
    let mut out = String::with_capacity(normalise.len());
    let mut i = 0usize;
    let mut reduit = false;

    while i < normalise.len() {
        let reste = &normalise[i..];
        let mut gauche = normalise[..i].chars().rev();
        let avant = gauche.next();
        let avant_avant = gauche.next();

        let trouve = sous_motifs().iter().find(|m| {
            reste.starts_with(m.motif.as_str())
                && voisin_gauche_ok(avant, avant_avant, m.multiplicatif)
                && voisin_droit_ok(reste[m.motif.len()..].chars().next(), m.multiplicatif)
        });

        if let Some(m) = trouve {
            out.push_str(&ecrire_decimal(m.valeur));
            i += m.motif.len();
            reduit = true;
            continue;
        }

        if let Some(c) = reste.chars().next() {
            out.push(c);
            i += c.len_utf8();
        }
    }

    reduit.then_some(out)
}

/// Forme normalisée : sans blancs, minuscules, ** -> ^.
pub fn normaliser(s: &str) -> String {
    let sans: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    sans.to_lowercase().replace("**", "^")
}

/// Identité du catalogue égale au texte (déjà normalisé), s’il y en a une.
pub fn chercher(normalise: &str) -> Option<&'static Identite> {
    catalogue().iter().find(|i| i.motif == normalise)
}

/// Le texte (normalisé) contient-il un jeton irrationnel ?
pub fn contient_irrationnel(normalise: &str) -> bool {
    JETONS_IRRATIONNELS.iter().any(|j| normalise.contains(j))
}

// src/noyau/substitution.rs
//
// Substitution des constantes : chaque symbole de la table est remplacé par son texte décimal.
//
// Balayage unique de gauche à droite :
// - à chaque position, on essaie les clés de la plus longue à la plus courte (√20 avant √2, ln10 avant ln2)
// - une clé qui finit par un chiffre ne prend pas si le caractère suivant prolonge le nombre
//   ("√25" n’est pas "√2" suivi de "5")
// - un √ restant suivi d’un décimal (√25, √2.5) est remplacé par sa racine
// - le texte produit n’est jamais re-balayé (pas de collision avec les chiffres insérés)

use super::constantes;
use super::lecture::{ecrire_decimal, lire_decimal};

fn prolonge_nombre(c: Option<char>) -> bool {
    matches!(c, Some(c) if c.is_ascii_digit() || c == '.')
}

/// Clé de la table qui commence exactement à `reste`, en respectant la frontière numérique.
fn cle_en_tete(reste: &str) -> Option<(&'static str, f64)> {
    constantes::par_longueur_decroissante()
        .iter()
        .find(|c| {
            if !reste.starts_with(c.nom) {
                return false;
            }
            let finit_par_chiffre = c.nom.chars().last().is_some_and(|d| d.is_ascii_digit());
            !(finit_par_chiffre && prolonge_nombre(reste[c.nom.len()..].chars().next()))
        })
        .map(|c| (c.nom, c.valeur))
}

/// "√<décimal>" en tête de `reste` : (longueur en octets, racine).
fn radical_en_tete(reste: &str) -> Option<(usize, f64)> {
    let apres = reste.strip_prefix('√')?;
    let lg = apres
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(apres.len());
    let radicande = lire_decimal(&apres[..lg])?;
    Some(('√'.len_utf8() + lg, radicande.sqrt()))
}

/// Remplace toutes les occurrences de toutes les clés par leur valeur décimale.
pub fn substituer_constantes(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 4);
    let mut i = 0usize;

    while i < s.len() {
        let reste = &s[i..];

        if let Some((nom, valeur)) = cle_en_tete(reste) {
            out.push_str(&ecrire_decimal(valeur));
            i += nom.len();
            continue;
        }

        if let Some((lg, racine)) = radical_en_tete(reste) {
            out.push_str(&ecrire_decimal(racine));
            i += lg;
            continue;
        }

        // caractère quelconque : copié tel quel
        if let Some(c) = reste.chars().next() {
            out.push(c);
            i += c.len_utf8();
        }
    }

    out
}

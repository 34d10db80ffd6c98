// src/noyau/lecture.rs
//
// Lecture décimale (texte -> f64) et écriture décimale (f64 -> texte).
//
// Deux lectures :
// - stricte  : tout le texte doit être un littéral décimal (règles fraction / √ / sqrt)
// - préfixe  : façon parseFloat, on lit le plus long préfixe numérique et on ignore la suite
//
// Littéral accepté : [+-]? ( chiffres [. chiffres*]? | . chiffres ) ( [eE] [+-]? chiffres )?

/// Longueur (en octets) du plus long préfixe décimal valide, ou None.
fn longueur_prefixe(s: &str) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = 0usize;

    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }

    let debut_chiffres = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut nb_chiffres = i - debut_chiffres;

    if i < b.len() && b[i] == b'.' {
        let apres_point = i + 1;
        let mut j = apres_point;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        let frac = j - apres_point;
        // "5." est valide, "." seul ne l’est pas
        if nb_chiffres > 0 || frac > 0 {
            i = j;
            nb_chiffres += frac;
        }
    }

    if nb_chiffres == 0 {
        return None;
    }

    // exposant : seulement s’il est complet ("2e" => on s’arrête avant le e)
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let debut_exp = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > debut_exp {
            i = j;
        }
    }

    Some(i)
}

/// Lecture façon parseFloat : préfixe numérique, suite ignorée. Valeur finie uniquement.
pub fn lire_prefixe(s: &str) -> Option<f64> {
    let n = longueur_prefixe(s)?;
    s[..n].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lecture stricte : le texte entier doit être un littéral décimal.
pub fn lire_decimal(s: &str) -> Option<f64> {
    match longueur_prefixe(s) {
        Some(n) if n == s.len() => s.parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// f64 -> texte décimal réinjectable dans une expression.
///
/// Display de f64 n’utilise jamais la notation exponentielle et fait l’aller-retour exact.
pub fn ecrire_decimal(v: f64) -> String {
    format!("{v}")
}

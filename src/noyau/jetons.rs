// src/noyau/jetons.rs
//
// Jetons du langage arithmétique restreint : nombres décimaux, + - * / ^, ( ).
// Tout le reste est refusé (pas d’identifiant : les constantes sont déjà substituées).

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    // Moins unaire : produit par to_rpn, jamais par tokenize
    Neg,

    LPar,
    RPar,
}

/// Vrai si `s` ne contient que des caractères du langage arithmétique.
/// Avec `avec_puissance = false`, le ^ est refusé (intérieur de sqrt(...)).
pub fn caracteres_surs(s: &str, avec_puissance: bool) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            c.is_ascii_digit()
                || matches!(c, '+' | '-' | '*' | '/' | '.' | '(' | ')' | ' ')
                || (avec_puissance && c == '^')
        })
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 3.25, .5, 5.)
/// - opérateurs + - * / ^ (le ** est lu comme ^)
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            '*' => {
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    i += 1;
                    Some(Tok::Caret)
                } else {
                    Some(Tok::Star)
                }
            }
            _ => None,
        };
        if let Some(t) = tok {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre décimal : chiffres et au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut points = 0usize;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                if chars[i] == '.' {
                    points += 1;
                }
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            if points > 1 || txt == "." {
                return Err(ErreurCalcul::NombreInvalide(txt));
            }
            let v = txt
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::NombreInvalide(txt.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalcul::CaractereInattendu(c));
    }

    Ok(out)
}

/// Format utilitaire (debug/journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Précédence : + - (1) < * / (2) < moins unaire (3) < ^ (4)
// - ^ associatif à droite : 2^3^2 = 2^9
// - Moins unaire : Tok::Neg (préfixe), donc -2^2 = -4 et 2*-3 = -6
// - Plus unaire : ignoré

use log::trace;

use super::erreur::ErreurCalcul;
use super::jetons::{format_tokens, tokenize, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Minus, Num(2), Caret, Num(2)]
///   rpn:    [Num(2), Num(2), Caret, Neg]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter les signes unaires.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    // "2 3" ou ")(" : pas de multiplication implicite
                    return Err(ErreurCalcul::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalcul::ExpressionInvalide);
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    // "()" ou "(1+)"
                    return Err(ErreurCalcul::ExpressionInvalide);
                }

                // dépile jusqu’à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurCalcul::ParentheseInattendue);
                }

                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                // signe unaire : + ignoré, - devient Neg (préfixe, rien à dépiler)
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if !prev_was_value {
                    // "*2" ou "2+*3"
                    return Err(ErreurCalcul::ExpressionInvalide);
                }

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => out.push(tok),
        }
    }

    if !prev_was_value {
        // expression vide ou terminée par un opérateur
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalcul::ParenthesesNonFermees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de f64.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => st.push(v),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => a.powf(b),
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalcul::ExpressionInvalide),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::ExpressionInvalide),
    }
}

/// Pipeline complet : texte -> jetons -> RPN -> valeur finie.
pub fn evaluer(s: &str) -> Result<f64, ErreurCalcul> {
    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    trace!("rpn : {}", format_tokens(&rpn));
    let v = eval_rpn(&rpn)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::NonFini)
    }
}

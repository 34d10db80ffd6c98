//! Noyau : lecture d’expressions et classement dans ℕ, ℤ, ℚ, ℝ-ℚ
//!
//! Organisation interne :
//! - constantes.rs   : table symbole -> valeur (π, e, φ, τ, ln2, ln10, √n, -√n)
//! - lecture.rs      : lecture décimale (stricte / façon parseFloat) + écriture décimale
//! - jetons.rs       : tokenisation du langage arithmétique restreint
//! - rpn.rs          : shunting-yard + évaluation RPN (f64)
//! - substitution.rs : constantes -> texte décimal (plus long d’abord)
//! - racines.rs      : appels sqrt(...) (repérage, intérieur, remplacement)
//! - eval.rs         : parse(), règles 1 à 9
//! - identites.rs    : catalogue d’identités algébriques (heuristique)
//! - classement.rs   : Classification + classify()
//! - point.rs        : Point (valeur, texte, classification)
//! - erreur.rs       : ParseError, ErreurCalcul

pub mod classement;
pub mod constantes;
pub mod erreur;
pub mod eval;
pub mod identites;
pub mod jetons;
pub mod lecture;
pub mod point;
pub mod racines;
pub mod rpn;
pub mod substitution;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use classement::{classification_display_name, classify, Classification};
pub use erreur::ParseError;
pub use eval::parse;
pub use point::Point;

// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - ParseError   : seule erreur visible de parse() (l’appelant affiche un message, rien d’autre)
// - ErreurCalcul : échecs internes du calcul (jetons / RPN). Ne sortent jamais de parse() :
//                  une règle qui échoue laisse simplement la main à la suivante.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("format de nombre non valide : {entree:?} (exemples valides : sqrt(7), 2*π, 1/e, √2, -1/2)")]
    InvalidSyntax { entree: String },
}

impl ParseError {
    pub fn invalide(entree: impl Into<String>) -> Self {
        ParseError::InvalidSyntax {
            entree: entree.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalcul {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("parenthèses non fermées")]
    ParenthesesNonFermees,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseInattendue,

    #[error("expression invalide")]
    ExpressionInvalide,

    #[error("résultat non fini")]
    NonFini,
}

// src/noyau/point.rs
//
// Point produit par le noyau pour un texte soumis : valeur + texte d’origine + classification.
// Le cycle de vie (ajout, retrait, doublons, rang) appartient à l’état de l’application.

use super::classement::{classify, Classification};
use super::erreur::ParseError;
use super::eval::parse;

#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub valeur: f64,
    pub texte_original: String,
    pub classification: Classification,
}

impl Point {
    /// parse + classify en une fois.
    pub fn depuis_texte(texte: &str) -> Result<Point, ParseError> {
        let valeur = parse(texte)?;
        Ok(Point {
            valeur,
            classification: classify(texte, valeur),
            texte_original: texte.to_string(),
        })
    }

    /// Étiquette courte : "√2 ≈ 1.414".
    pub fn libelle(&self) -> String {
        format!("{} ≈ {:.3}", self.texte_original, self.valeur)
    }
}

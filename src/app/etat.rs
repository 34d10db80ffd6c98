//! src/app/etat.rs
//!
//! État de l’application (sans vue).
//!
//! Rôle : posséder la session de points (liste, rang visible, sélection du calcul de distance)
//! et offrir les opérations d’ajout / retrait / distance, sans logique d’affichage.
//!
//! Contrats :
//! - Tout passe par le noyau (parse + classify) : aucune évaluation maison ici.
//! - Un point n’entre que s’il est lisible, dans [-rang, rang] et pas déjà présent.
//! - Actions déterministes, sans effet de bord caché.

use log::{info, warn};
use thiserror::Error;

use crate::noyau::{ParseError, Point};

/// Demi-largeur visible par défaut : la droite couvre [-10, 10].
pub const RANG_DEFAUT: u32 = 10;

/// Rangs proposés par le sélecteur.
pub const RANGS_DISPONIBLES: [u32; 5] = [5, 10, 20, 50, 100];

/// Deux valeurs plus proches que ça désignent le même point.
pub const TOLERANCE_DOUBLON: f64 = 1e-4;

#[derive(Debug, Error)]
pub enum ErreurAjout {
    #[error("entrée vide")]
    Vide,

    #[error(transparent)]
    Syntaxe(#[from] ParseError),

    #[error("{valeur} est hors de la droite visible [-{rang}, {rang}]")]
    HorsRang { valeur: f64, rang: u32 },

    #[error("déjà présent : {existant}")]
    Doublon { existant: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErreurDistance {
    #[error("choisir deux points")]
    SelectionManquante,

    #[error("choisir deux points différents")]
    MemePoint,

    #[error("point inconnu (indice {0})")]
    IndexInconnu(usize),
}

#[derive(Clone, Debug)]
pub struct AppDroite {
    // --- entrée utilisateur ---
    pub entree: String,
    pub erreur: String,

    // --- session ---
    pub points: Vec<Point>,
    pub rang: u32,

    // --- calcul de distance ---
    pub selection_a: Option<usize>,
    pub selection_b: Option<usize>,
    pub resultat_distance: String,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppDroite {
    fn default() -> Self {
        Self {
            entree: String::new(),
            erreur: String::new(),
            points: Vec::new(),
            rang: RANG_DEFAUT,
            selection_a: None,
            selection_b: None,
            resultat_distance: String::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppDroite {
    /* ------------------------ Session de points ------------------------ */

    /// Lit, vérifie (rang, doublon), classe puis ajoute un point.
    pub fn ajouter(&mut self, texte: &str) -> Result<&Point, ErreurAjout> {
        let texte = texte.trim();
        if texte.is_empty() {
            return Err(ErreurAjout::Vide);
        }

        let point = Point::depuis_texte(texte)?;

        if point.valeur.abs() > f64::from(self.rang) {
            return Err(ErreurAjout::HorsRang {
                valeur: point.valeur,
                rang: self.rang,
            });
        }

        if let Some(p) = self
            .points
            .iter()
            .find(|p| (p.valeur - point.valeur).abs() < TOLERANCE_DOUBLON)
        {
            return Err(ErreurAjout::Doublon {
                existant: p.texte_original.clone(),
            });
        }

        info!(
            "point ajouté : {texte:?} = {} ({})",
            point.valeur,
            point.classification.cle()
        );
        self.points.push(point);

        let i = self.points.len() - 1;
        Ok(&self.points[i])
    }

    /// Bouton préréglé : même chemin que la saisie, erreur affichée.
    pub fn ajouter_preset(&mut self, texte: &str) {
        match self.ajouter(texte) {
            Ok(_) => self.erreur.clear(),
            Err(e) => self.set_erreur(e),
        }
    }

    /// Entrée validée (Enter ou bouton) : l’entrée n’est vidée qu’en cas de succès.
    pub fn soumettre_entree(&mut self) {
        let texte = self.entree.clone();
        match self.ajouter(&texte) {
            Ok(_) => {
                self.entree.clear();
                self.erreur.clear();
            }
            Err(e) => self.set_erreur(e),
        }
        self.focus_entree = true;
    }

    /// Retire le point d’indice i (ordre d’insertion). Indice inconnu : rien.
    pub fn retirer(&mut self, i: usize) -> Option<Point> {
        if i >= self.points.len() {
            return None;
        }
        let p = self.points.remove(i);
        info!("point retiré : {:?}", p.texte_original);

        // la sélection suit les indices décalés
        let suivre = |s: Option<usize>| match s {
            Some(k) if k == i => None,
            Some(k) if k > i => Some(k - 1),
            autre => autre,
        };
        self.selection_a = suivre(self.selection_a);
        self.selection_b = suivre(self.selection_b);
        self.resultat_distance.clear();

        Some(p)
    }

    /// Vide la session (points + sélection).
    pub fn vider(&mut self) {
        info!("session vidée ({} points)", self.points.len());
        self.points.clear();
        self.selection_a = None;
        self.selection_b = None;
        self.resultat_distance.clear();
        self.erreur.clear();
    }

    /// (indice d’insertion, point), triés par valeur croissante.
    pub fn points_tries(&self) -> Vec<(usize, &Point)> {
        let mut v: Vec<(usize, &Point)> = self.points.iter().enumerate().collect();
        v.sort_by(|a, b| a.1.valeur.total_cmp(&b.1.valeur));
        v
    }

    /// Change le rang visible. Seuls les rangs proposés sont acceptés ; les points restent.
    pub fn set_rang(&mut self, r: u32) -> bool {
        if !RANGS_DISPONIBLES.contains(&r) {
            warn!("rang refusé : {r}");
            return false;
        }
        self.rang = r;
        true
    }

    /* ------------------------ Distance ------------------------ */

    /// |a - b| entre deux points choisis (indices d’insertion).
    pub fn distance(&self, a: Option<usize>, b: Option<usize>) -> Result<f64, ErreurDistance> {
        let (Some(i), Some(j)) = (a, b) else {
            return Err(ErreurDistance::SelectionManquante);
        };
        if i == j {
            return Err(ErreurDistance::MemePoint);
        }
        let pa = self.points.get(i).ok_or(ErreurDistance::IndexInconnu(i))?;
        let pb = self.points.get(j).ok_or(ErreurDistance::IndexInconnu(j))?;
        Ok((pa.valeur - pb.valeur).abs())
    }

    /// Calcule la distance de la sélection courante et dépose le texte du résultat.
    pub fn calculer_distance(&mut self) {
        self.resultat_distance = match self.distance(self.selection_a, self.selection_b) {
            Ok(d) => format!("|a - b| = {d:.6}"),
            Err(e) => e.to_string(),
        };
    }

    /* ------------------------ Entrée ------------------------ */

    /// Efface seulement l’entrée (et le message d’erreur).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    pub fn set_erreur(&mut self, e: impl ToString) {
        let msg = e.to_string();
        warn!("ajout refusé : {msg}");
        self.erreur = msg;
        self.focus_entree = true;
    }
}

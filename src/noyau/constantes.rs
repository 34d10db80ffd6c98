// src/noyau/constantes.rs
//
// Table des constantes (symbole -> valeur f64).
// - Clés exactes, sensibles à la casse (alias ASCII en minuscules)
// - Symbole unicode et alias ASCII pointent sur la même valeur (π / pi)
// - Table immuable, initialisée une seule fois

use std::sync::LazyLock;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntreeConstante {
    pub nom: &'static str,
    pub valeur: f64,
}

/// Racines précalculées (√n).
const RACINES: [(&str, f64); 13] = [
    ("√2", 2.0),
    ("√3", 3.0),
    ("√5", 5.0),
    ("√7", 7.0),
    ("√8", 8.0),
    ("√10", 10.0),
    ("√11", 11.0),
    ("√12", 12.0),
    ("√13", 13.0),
    ("√15", 15.0),
    ("√17", 17.0),
    ("√19", 19.0),
    ("√20", 20.0),
];

/// Racines négatives (-√n) qui sont aussi des clés.
const RACINES_NEGATIVES: [(&str, f64); 3] = [("-√2", 2.0), ("-√3", 3.0), ("-√5", 5.0)];

static TABLE: LazyLock<Vec<EntreeConstante>> = LazyLock::new(construire_table);

/// Même table, triée par longueur de clé décroissante (substitution “plus long d’abord”).
static TABLE_PAR_LONGUEUR: LazyLock<Vec<EntreeConstante>> = LazyLock::new(|| {
    let mut v = TABLE.clone();
    // tri stable : à longueur égale, l’ordre de la table est conservé
    v.sort_by_key(|c| std::cmp::Reverse(c.nom.chars().count()));
    v
});

fn construire_table() -> Vec<EntreeConstante> {
    use std::f64::consts::{E, LN_10, LN_2, PI, TAU};

    let phi = (1.0 + 5f64.sqrt()) / 2.0;

    let mut t = vec![
        EntreeConstante { nom: "π", valeur: PI },
        EntreeConstante { nom: "pi", valeur: PI },
        EntreeConstante { nom: "e", valeur: E },
        EntreeConstante { nom: "φ", valeur: phi },
        EntreeConstante { nom: "phi", valeur: phi },
        EntreeConstante { nom: "τ", valeur: TAU },
        EntreeConstante { nom: "tau", valeur: TAU },
        EntreeConstante { nom: "ln2", valeur: LN_2 },
        EntreeConstante { nom: "ln10", valeur: LN_10 },
    ];

    t.extend(RACINES.iter().map(|&(nom, n)| EntreeConstante {
        nom,
        valeur: n.sqrt(),
    }));
    t.extend(RACINES_NEGATIVES.iter().map(|&(nom, n)| EntreeConstante {
        nom,
        valeur: -n.sqrt(),
    }));

    t
}

/// Toutes les entrées, dans l’ordre de la table.
pub fn toutes() -> &'static [EntreeConstante] {
    &TABLE
}

/// Entrées triées par longueur de nom décroissante.
pub fn par_longueur_decroissante() -> &'static [EntreeConstante] {
    &TABLE_PAR_LONGUEUR
}

/// Recherche exacte d’un symbole.
pub fn lookup(nom: &str) -> Option<f64> {
    TABLE.iter().find(|c| c.nom == nom).map(|c| c.valeur)
}

pub fn est_constante(nom: &str) -> bool {
    lookup(nom).is_some()
}

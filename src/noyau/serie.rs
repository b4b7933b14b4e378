// src/noyau/serie.rs
//
// Évaluation adaptative de f(x) = x/(eˣ − 1) par développement de Maclaurin :
//
//   f(x) = 1 − x/2 + Σ_{n≥1} ( B_{2n}/(2n)! · x^{2n} )
//
// On accumule les termes pairs jusqu’à ce que |terme| < epsilon; le premier
// terme sous epsilon est AJOUTÉ à la somme et compté dans N (N compte tout
// terme réellement sommé, terme d’arrêt inclus). Au-delà du plafond
// d’indices, échec explicite.
//
// NOTE numérique : (2n)! déborde f64 dès 171! — le coefficient B_k/k! est
// donc formé en rationnel exact, puis converti en f64 en une seule fois.

use std::fmt;

use num_rational::BigRational;

use super::bernoulli::{rationnel_vers_f64, suite_bernoulli_cache};
use super::combinatoire::factorielle;

/// Plafond d’indice par défaut (réserve de termes demandée au générateur,
/// indépendante de x). Constante de configuration, pas de dérivation connue.
pub const PLAFOND_DEFAUT: usize = 200;

/// Garde-fou : borne le plafond configurable (anti-abus / anti-gel).
const PLAFOND_MAX: usize = 2000;

/* ------------------------ Types ------------------------ */

/// Résultat d’une évaluation : valeur approchée + nombre de termes sommés
/// (les deux termes fermés de tête et le terme d’arrêt compris).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultatSerie {
    pub valeur: f64,
    pub nb_termes: usize,
}

/// Échecs de l’évaluateur. Aucun résultat partiel n’est retourné.
#[derive(Clone, Debug, PartialEq)]
pub enum ErreurSerie {
    /// epsilon hors de (0;1) (défense en profondeur : la saisie valide déjà).
    EpsilonHorsIntervalle(f64),
    /// La précision demandée exigerait plus de termes que le plafond —
    /// limite de configuration, pas une erreur de données.
    PrecisionInatteignable { plafond: usize },
}

impl fmt::Display for ErreurSerie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurSerie::EpsilonHorsIntervalle(v) => {
                write!(f, "epsilon hors de l’intervalle ouvert (0;1) : {v}")
            }
            ErreurSerie::PrecisionInatteignable { plafond } => {
                write!(
                    f,
                    "précision inatteignable : plus de {plafond} termes de série seraient nécessaires"
                )
            }
        }
    }
}

/* ------------------------ Évaluation ------------------------ */

/// Évalue f(x) à epsilon près avec le plafond par défaut.
pub fn evaluer(x: f64, epsilon: f64) -> Result<ResultatSerie, ErreurSerie> {
    evaluer_avec_plafond(x, epsilon, PLAFOND_DEFAUT)
}

/// Évalue f(x) à epsilon près, plafond d’indices configurable.
///
/// Fonction pure de (x, epsilon, plafond) : deux appels identiques donnent
/// des résultats identiques au bit près.
pub fn evaluer_avec_plafond(
    x: f64,
    epsilon: f64,
    plafond: usize,
) -> Result<ResultatSerie, ErreurSerie> {
    // Défense en profondeur (NaN échoue aussi ce test).
    if !(epsilon > 0.0 && epsilon < 1.0) {
        return Err(ErreurSerie::EpsilonHorsIntervalle(epsilon));
    }

    // Cas particulier : limite analytique en 0 (exp(0)−1 = 0, mais la série
    // donne f(0) = 1). Un seul terme par convention.
    if x == 0.0 {
        return Ok(ResultatSerie {
            valeur: 1.0,
            nb_termes: 1,
        });
    }

    let plafond = plafond.clamp(2, PLAFOND_MAX);

    // Réserve de termes indépendante de x (suite = constante pure, mémoïsée).
    let suite = suite_bernoulli_cache(plafond);

    // Deux termes fermés de tête : 1 − x/2.
    let mut somme = 1.0 - x / 2.0;
    let mut nb_termes: usize = 2;

    // Termes pairs : B_{2n}/(2n)! · x^{2n}, indice 2n = 2, 4, 6, ...
    let mut indice: usize = 2;
    loop {
        if indice > plafond {
            return Err(ErreurSerie::PrecisionInatteignable { plafond });
        }

        let coefficient = &suite[indice] / BigRational::from_integer(factorielle(indice));
        let terme = rationnel_vers_f64(&coefficient) * x.powi(indice as i32);

        somme += terme;
        nb_termes += 1;

        // Règle d’arrêt : le premier terme sous epsilon vient d’être inclus.
        if terme.abs() < epsilon {
            return Ok(ResultatSerie {
                valeur: somme,
                nb_termes,
            });
        }

        indice += 2;
    }
}

/* ------------------------ Tests ------------------------ */

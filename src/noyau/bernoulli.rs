// src/noyau/bernoulli.rs
//
// Suite de Bernoulli B_0..B_max par récurrence combinatoire, en EXACT
// (BigRational). La conversion vers f64 n’arrive qu’au tout dernier moment,
// une seule fois par entrée : zéro arrondi cumulé dans la récurrence.
//
// Récurrence (identité binomiale) :
//   B_0 = 1 ; B_1 = -1/2 ; B_k = 0 pour k impair > 1 ;
//   B_k = (-1/(k+1)) · Σ_{i=1}^{k} C(k+1, i+1) · B_{k-i}   pour k pair
// Le remplissage gauche→droite est obligatoire (B_k dépend de B_0..B_{k-1}).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use super::combinatoire::binome;

/* ------------------------ Récurrence exacte ------------------------ */

/// Suite exacte B_0..B_max_indice (longueur max_indice + 1).
pub fn suite_bernoulli(max_indice: usize) -> Vec<BigRational> {
    let mut suite = vec![BigRational::zero(); max_indice + 1];
    suite[0] = BigRational::one();
    if max_indice >= 1 {
        suite[1] = BigRational::new(BigInt::from(-1), BigInt::from(2));
    }

    for k in 2..=max_indice {
        // fait fermé : tous les B impairs au-delà de l’indice 1 sont nuls
        if k % 2 == 1 {
            continue;
        }

        let mut somme = BigRational::zero();
        for i in 1..=k {
            somme += BigRational::from_integer(binome(k + 1, i + 1)) * &suite[k - i];
        }

        let facteur = BigRational::new(BigInt::from(-1), BigInt::from(k as i64 + 1));
        suite[k] = facteur * somme;
    }

    suite
}

/// Vue flottante de la suite : conversion au dernier moment, entrée par entrée.
pub fn nombres_bernoulli(max_indice: usize) -> Vec<f64> {
    suite_bernoulli(max_indice)
        .iter()
        .map(rationnel_vers_f64)
        .collect()
}

/// Conversion finale rationnel -> f64 (l’unique passage au flottant).
/// to_f64 sur BigRational gère les grands numérateurs/dénominateurs.
pub(crate) fn rationnel_vers_f64(r: &BigRational) -> f64 {
    r.to_f64().unwrap_or(f64::NAN)
}

/* ------------------------ Cache (suite = constante pure) ------------------------ */

static CACHE_SUITE: OnceLock<Mutex<HashMap<usize, Vec<BigRational>>>> = OnceLock::new();

/// Suite exacte mémoïsée par plafond. La suite d’un plafond donné est une
/// constante : aucune invalidation, résultat identique au recalcul direct.
pub(crate) fn suite_bernoulli_cache(max_indice: usize) -> Vec<BigRational> {
    let m = CACHE_SUITE.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = m.lock().expect("mutex Bernoulli");

    if let Some(v) = guard.get(&max_indice) {
        return v.clone();
    }

    let v = suite_bernoulli(max_indice);
    guard.insert(max_indice, v.clone());
    v
}

/* ------------------------ Tests ------------------------ */

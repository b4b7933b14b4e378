// src/noyau/combinatoire.rs
//
// Factorielle et coefficient binomial EXACTS (BigInt).
// La récurrence de Bernoulli exige ces valeurs sans arrondi : tout reste
// entier jusqu’à la division finale (qui, elle, vit dans bernoulli.rs).
// Aucun risque de débordement : entiers à précision arbitraire.

use num_bigint::BigInt;
use num_traits::{One, Zero};

/// n! exact. factorielle(0) = 1.
pub fn factorielle(n: usize) -> BigInt {
    let mut acc = BigInt::one();
    for i in 2..=n {
        acc *= BigInt::from(i);
    }
    acc
}

/// C(n, r) exact, via factorielles (division entière toujours exacte).
/// r > n => 0 (convention habituelle).
pub fn binome(n: usize, r: usize) -> BigInt {
    if r > n {
        return BigInt::zero();
    }
    factorielle(n) / (factorielle(r) * factorielle(n - r))
}

/* ------------------------ Tests ------------------------ */

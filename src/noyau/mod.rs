//! Noyau numérique Q-pur
//!
//! Organisation interne :
//! - combinatoire.rs : factorielle + coefficient binomial exacts (BigInt)
//! - bernoulli.rs    : suite de Bernoulli (récurrence exacte) + cache
//! - serie.rs        : évaluation adaptative de f(x) = x/(eˣ−1)

pub mod bernoulli;
pub mod combinatoire;
pub mod serie;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use bernoulli::{nombres_bernoulli, suite_bernoulli};
pub use serie::{evaluer, evaluer_avec_plafond, ErreurSerie, ResultatSerie, PLAFOND_DEFAUT};

//! src/app/saisie.rs
//!
//! Saisie terminal (lecture + validation, sans noyau).
//!
//! Rôle : lire les trois valeurs au terminal et les valider AVANT toute
//! invocation du noyau. Une saisie rejetée ici n’atteint jamais l’évaluateur.
//!
//! Contrats :
//! - x : nombre réel fini (inf/nan refusés)
//! - epsilon : nombre réel dans l’intervalle OUVERT (0;1)
//! - destination : nom de fichier optionnel (vide => pas de journal)

use std::fmt;
use std::io::{self, Write};

/* ------------------------ Erreurs de saisie ------------------------ */

/// Saisie invalide : le noyau n’est jamais invoqué dans ces cas.
#[derive(Clone, Debug, PartialEq)]
pub enum ErreurSaisie {
    /// x non analysable comme réel fini.
    XInvalide(String),
    /// epsilon non analysable comme réel.
    EpsilonInvalide(String),
    /// epsilon analysé mais hors de (0;1) (bornes exclues).
    EpsilonHorsIntervalle(f64),
}

impl fmt::Display for ErreurSaisie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurSaisie::XInvalide(brut) => {
                write!(f, "x invalide : {brut:?} (nombre réel attendu)")
            }
            ErreurSaisie::EpsilonInvalide(brut) => {
                write!(f, "epsilon invalide : {brut:?} (nombre réel attendu)")
            }
            ErreurSaisie::EpsilonHorsIntervalle(v) => {
                write!(f, "epsilon doit être dans l’intervalle ouvert (0;1), reçu : {v}")
            }
        }
    }
}

/* ------------------------ Lecture terminal ------------------------ */

/// Affiche l’invite puis lit une ligne sur stdin (telle quelle, avec '\n').
pub fn lire_ligne(invite: &str) -> io::Result<String> {
    print!("{invite}");
    io::stdout().flush()?;

    let mut ligne = String::new();
    io::stdin().read_line(&mut ligne)?;
    Ok(ligne)
}

/* ------------------------ Validation ------------------------ */

/// x : réel quelconque (négatif et zéro inclus), mais FINI.
/// "inf"/"nan" passent le parse f64 : on les refuse explicitement.
pub fn analyser_x(brut: &str) -> Result<f64, ErreurSaisie> {
    let s = brut.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurSaisie::XInvalide(s.to_string())),
    }
}

/// epsilon : réel dans (0;1) strict. NaN échoue le test d’intervalle.
pub fn analyser_epsilon(brut: &str) -> Result<f64, ErreurSaisie> {
    let s = brut.trim();
    let v: f64 = s
        .parse()
        .map_err(|_| ErreurSaisie::EpsilonInvalide(s.to_string()))?;

    if v > 0.0 && v < 1.0 {
        Ok(v)
    } else {
        Err(ErreurSaisie::EpsilonHorsIntervalle(v))
    }
}

/// Destination optionnelle : ligne vide (ou espaces) => pas de journal.
pub fn analyser_destination(brut: &str) -> Option<String> {
    let s = brut.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

/* ------------------------ Tests ------------------------ */

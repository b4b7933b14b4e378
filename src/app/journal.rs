//! src/app/journal.rs
//!
//! Journal des résultats (collaborateur externe du noyau).
//!
//! Format sur disque = CONTRAT de compatibilité :
//! - une ligne par exécution, séparateur « | » :
//!   `JJ.MM.AAAA | x | epsilon | f(x, e) (10 décimales) | N`
//! - en-tête de deux lignes (noms de colonnes + séparateur) écrit UNIQUEMENT
//!   à la création du fichier; les exécutions suivantes ajoutent en fin de
//!   fichier sans réécrire l’en-tête.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

/// Précision du journal (décimales de f(x, e)).
const DECIMALES_JOURNAL: usize = 10;

const ENTETE_COLONNES: &str = "Date         | x      | e          | f(x, e)         | N(x, e)";
const ENTETE_SEPARATEUR: &str = "-------------------------------------------------------------";

/// Ajoute une ligne de résultat au fichier `chemin`, daté du jour (local).
pub fn ajouter_resultat(
    chemin: &str,
    x: f64,
    epsilon: f64,
    valeur: f64,
    nb_termes: usize,
) -> io::Result<()> {
    let date = Local::now().format("%d.%m.%Y").to_string();
    ajouter_resultat_date(chemin, &date, x, epsilon, valeur, nb_termes)
}

/// Variante à date injectée (testable sans dépendre de l’horloge).
fn ajouter_resultat_date(
    chemin: &str,
    date: &str,
    x: f64,
    epsilon: f64,
    valeur: f64,
    nb_termes: usize,
) -> io::Result<()> {
    // L’en-tête ne s’écrit qu’à la création : on regarde AVANT d’ouvrir.
    let nouveau = !Path::new(chemin).exists();

    let mut fichier = OpenOptions::new().create(true).append(true).open(chemin)?;

    if nouveau {
        writeln!(fichier, "{ENTETE_COLONNES}")?;
        writeln!(fichier, "{ENTETE_SEPARATEUR}")?;
    }

    writeln!(
        fichier,
        "{date} | {x} | {epsilon} | {valeur:.prec$} | {nb_termes}",
        prec = DECIMALES_JOURNAL,
    )
}

/* ------------------------ Tests ------------------------ */

// src/main.rs
//
// Maclaurin Q-pur — point d’entrée terminal
// -----------------------------------------
// But:
// - lire x, epsilon et (optionnel) un nom de fichier journal au terminal
// - évaluer f(x) = x/(eˣ − 1) par série de Maclaurin (noyau)
// - afficher la valeur (12 décimales) et le nombre de termes N
//
// IMPORTANT (structure projet):
// - la validation des saisies vit dans src/app/saisie.rs
// - le journal des résultats vit dans src/app/journal.rs
// - ici : enchaînement seulement, aucune logique numérique

mod app;
mod noyau;

use std::process::ExitCode;

use app::journal;
use app::saisie;

/// Titre affiché en bannière au lancement.
const TITRE_APP: &str = "Maclaurin Q-pur";

/// Précision d’affichage console (décimales).
const DECIMALES_CONSOLE: usize = 12;

/* ------------------------ Entrée ------------------------ */

fn main() -> ExitCode {
    match executer() {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

/* ------------------------ Enchaînement ------------------------ */

/// Session complète : saisies -> noyau -> console -> journal (optionnel).
///
/// Toute erreur remonte ici en texte; la décision d’arrêt (code retour)
/// appartient à main(), jamais au noyau.
fn executer() -> Result<(), String> {
    println!("{TITRE_APP} — f(x) = x/(eˣ − 1) par série de Maclaurin");

    // 1) Saisies (validées AVANT d’invoquer le noyau)
    let brut_x = saisie::lire_ligne("Entrez x (nombre réel) : ")
        .map_err(|e| format!("lecture de x impossible : {e}"))?;
    let x = saisie::analyser_x(&brut_x).map_err(|e| e.to_string())?;

    let brut_epsilon = saisie::lire_ligne("Entrez epsilon (0 < epsilon < 1) : ")
        .map_err(|e| format!("lecture d’epsilon impossible : {e}"))?;
    let epsilon = saisie::analyser_epsilon(&brut_epsilon).map_err(|e| e.to_string())?;

    let brut_destination = saisie::lire_ligne("Fichier journal (Entrée pour ignorer) : ")
        .map_err(|e| format!("lecture du nom de fichier impossible : {e}"))?;
    let destination = saisie::analyser_destination(&brut_destination);

    // 2) Noyau
    let resultat = noyau::evaluer(x, epsilon).map_err(|e| e.to_string())?;

    // 3) Console
    println!("f(x, e) = {:.*}", DECIMALES_CONSOLE, resultat.valeur);
    println!("N = {}", resultat.nb_termes);

    // 4) Journal (collaborateur externe : son échec n’invalide pas le calcul,
    //    mais il est signalé à l’utilisateur comme les autres erreurs)
    if let Some(chemin) = destination {
        journal::ajouter_resultat(&chemin, x, epsilon, resultat.valeur, resultat.nb_termes)
            .map_err(|e| format!("journal {chemin:?} : écriture impossible : {e}"))?;
    }

    Ok(())
}

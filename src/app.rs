// src/app.rs
//
// Maclaurin Q-pur — module App (racine)
// -------------------------------------
// Rôle:
// - Déclarer les sous-modules (saisie.rs + journal.rs)
// - Aucune logique numérique ici : le noyau reste seul responsable du calcul
//
// Important:
// - saisie.rs valide TOUT avant que le noyau soit invoqué (taxonomie
//   « saisie invalide » : x non analysable, epsilon non analysable ou hors (0;1))
// - journal.rs est un collaborateur externe : format de fichier = contrat

pub mod journal;
pub mod saisie;
